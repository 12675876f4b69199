pub mod adapters;
pub mod config;
pub mod di;
