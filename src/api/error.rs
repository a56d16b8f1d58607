//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a remote call failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure, the request never got a response
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server rejected the request (HTTP {status})")]
    ServerRejected { status: u16 },
    /// A request or response body could not be (de)serialized
    #[error("unexpected payload: {0}")]
    Parse(String),
}

impl ApiError {
    /// Short text for the error banner
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Tidak dapat terhubung ke server".to_string(),
            ApiError::ServerRejected { status } => format!("Server menolak permintaan ({status})"),
            ApiError::Parse(_) => "Respons server tidak valid".to_string(),
        }
    }
}

/// Map an HTTP status to the call's outcome: any 2xx succeeds
pub fn classify(status: u16) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        _ => Err(ApiError::ServerRejected { status }),
    }
}
