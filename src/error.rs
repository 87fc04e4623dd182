//! Error types for the job-splitting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Configuration errors are raised while loading and validating inputs; the
//! allocation engine itself raises the business-rule violation
//! [`EngineError::NoTechnicians`], [`EngineError::LevelNotFound`] when the
//! level table does not cover a worker on the job, and
//! [`EngineError::AmountOverflow`] when a job's hours or amounts are too large
//! to compute with.

use thiserror::Error;

/// The main error type for the job-splitting engine.
///
/// # Example
///
/// ```
/// use job_split_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// A numeric engine setting was out of range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSetting {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// A level definition was malformed.
    #[error("Invalid level '{code}': {message}")]
    InvalidLevel {
        /// The offending level code.
        code: String,
        /// A description of what made the level invalid.
        message: String,
    },

    /// The employee roster was empty or inconsistent.
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// A description of the roster problem.
        message: String,
    },

    /// A level percentage was needed but the level is not in the level table.
    #[error("Level not found: {code}")]
    LevelNotFound {
        /// The level code that was not found.
        code: String,
    },

    /// A money value could not be parsed.
    #[error("Invalid amount: '{value}'")]
    InvalidAmount {
        /// The raw value that failed to parse.
        value: String,
    },

    /// Every worker on the job is a trainee (or nobody on the roster worked it).
    #[error("job has no technicians and only trainees")]
    NoTechnicians {
        /// Number of trainees that logged time on the job.
        trainees: usize,
    },

    /// A sum or product exceeded the range of a decimal.
    #[error("Amount overflow computing {operation}")]
    AmountOverflow {
        /// The quantity being computed.
        operation: String,
    },
}

impl EngineError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::InvalidSetting { .. } => "INVALID_SETTING",
            EngineError::InvalidLevel { .. } => "INVALID_LEVEL",
            EngineError::InvalidRoster { .. } => "INVALID_ROSTER",
            EngineError::LevelNotFound { .. } => "LEVEL_NOT_FOUND",
            EngineError::InvalidAmount { .. } => "INVALID_AMOUNT",
            EngineError::NoTechnicians { .. } => "NO_TECHNICIANS",
            EngineError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
