//! In-process node routing for a distributed cache, on top of `ring_core`.

pub mod core;
pub mod infrastructure;

pub use crate::core::domain::models::{RouterError, RouterResult};
pub use crate::core::domain::services::ConsistentHasherService;
pub use crate::core::use_case::{UseCase, UseCaseValidatable};
pub use crate::infrastructure::config::RouterConfig;
pub use crate::infrastructure::di::RouterModule;

#[cfg(test)]
mod tests;
