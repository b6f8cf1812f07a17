//! Storage layer
//!
//! Persists the CLI configuration as a TOML file.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
