pub mod consistent_hasher_service;

pub use consistent_hasher_service::ConsistentHasherService;
