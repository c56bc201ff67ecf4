//! Error types for the bumper simulation.

use std::fmt;
use thiserror::Error;

/// The bodies a simulation is wired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Car,
    LeftBumper,
    RightBumper,
}

impl fmt::Display for BodyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Car => "car",
            Self::LeftBumper => "left bumper",
            Self::RightBumper => "right bumper",
        };
        f.write_str(name)
    }
}

/// Errors raised while setting up a simulation. Stepping never fails.
#[derive(Debug, Error)]
pub enum SimError {
    /// No trajectory recorder was supplied.
    #[error("trajectory recorder not found")]
    MissingRecorder,

    /// A required body was not supplied.
    #[error("required body not found: {0}")]
    MissingBody(BodyRole),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for simulation setup.
pub type Result<T> = std::result::Result<T, SimError>;
