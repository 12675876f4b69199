pub mod error;
pub mod usecases;

pub use error::{RouterError, RouterResult};
