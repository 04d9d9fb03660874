use thiserror::Error;

/// Errors returned by MMPay SDK operations.
#[derive(Debug, Error)]
pub enum MmpayError {
    /// A request field is missing or malformed. The caller must fix the
    /// input before retrying.
    #[error("validation error: {0}")]
    Validation(String),

    /// A callback verification input is missing or empty. The caller must
    /// reject the callback.
    #[error("verification error: {0}")]
    Verification(String),

    /// The network call failed. The caller may retry per its own policy.
    #[error("transport error: {0}")]
    Transport(String),

    /// The gateway answered with a non-success status.
    #[error("gateway returned status {status}: {body}")]
    Gateway { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
