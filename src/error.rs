//! Error types for the Hearing Scheduling Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The slot allocator itself is a total function and has no error cases of
//! its own; everything here belongs to configuration loading and the API
//! edge.

use thiserror::Error;

/// The main error type for the Hearing Scheduling Engine.
///
/// # Example
///
/// ```
/// use hearing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The calendar policy failed validation at load time.
    ///
    /// A policy with no time labels or zero capacity would make the
    /// allocator spin without ever placing a hearing, so it is rejected
    /// here rather than handled at allocation time.
    #[error("Invalid calendar policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date: {value}")]
    InvalidDate {
        /// The value that failed to parse as a date.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
