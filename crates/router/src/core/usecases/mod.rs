pub mod add_node_use_case;
pub mod locate_node_use_case;
pub mod remove_node_use_case;

pub use add_node_use_case::AddNodeUseCase;
pub use locate_node_use_case::LocateNodeUseCase;
pub use remove_node_use_case::RemoveNodeUseCase;
