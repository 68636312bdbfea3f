//! Shared error taxonomy and configuration for the Skim service.

pub mod config;
pub mod error;

pub use config::SkimConfig;
pub use error::{Result, SkimError};
