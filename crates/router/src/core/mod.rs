pub mod domain;
pub mod use_case;
pub mod usecases;
