pub mod tree_consistent_hasher_service;

pub use tree_consistent_hasher_service::TreeConsistentHasherService;
