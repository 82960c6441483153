use thiserror::Error;

/// Failure reported by a vibrator service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The device has no usable vibration hardware.
    #[error("vibrator unavailable: {0}")]
    Unavailable(String),
    /// A generic backend error.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Error type for bridge dispatch.
///
/// The bridge never recovers from service faults, it hands them back to the
/// caller as-is.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("vibrator service failed: {0}")]
    Service(#[from] ServiceError),
    /// An argument is present but does not hold an integer.
    #[error("argument {name} must be an integer, got {value}")]
    InvalidArgument { name: String, value: String },
}

/// Convenient result alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
