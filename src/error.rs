//! Error types for configuration and run requests

use thiserror::Error;

/// Errors raised by parameter configuration and simulation requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PendulumError {
    #[error("Parameter {name} must be positive and finite, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Timestep must be positive and finite, got {dt}")]
    InvalidTimestep { dt: f64 },

    #[error("Recording interval must be at least 1 step")]
    InvalidRecordInterval,
}
