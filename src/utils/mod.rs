//! Utils module - Shared utilities and helpers

/// Response normalization and error conversion
pub mod error_helpers;

/// Verbose console output for the CLI
pub mod logging;

/// Input validation utilities
pub mod validation;
