use serde::{Deserialize, Serialize};
use std::fmt;

/// Notice shown when a failed response carries no usable `message`.
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Unauthorized,
    Forbidden,
    Network,
    Decode,
    ServerError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
        }
    }
}

/// Structured error surfaced to the views as a notice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

/// Shape of the error body the hospital API returns: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ValidationError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    /// Map an HTTP status code onto an error kind.
    pub fn kind_for_status(status: u16) -> AppErrorKind {
        match status {
            400 | 422 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            _ => AppErrorKind::ServerError,
        }
    }

    /// Extract the `message` field from an API error body.
    ///
    /// Falls back to [`FALLBACK_MESSAGE`] when the body is empty, is not
    /// JSON, or has no non-empty string `message`.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
    }

    /// Build an error from a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::new(Self::kind_for_status(status), Self::message_from_body(body))
    }

    /// Text to show the user.
    pub fn notice(&self) -> &str {
        if self.message.trim().is_empty() {
            FALLBACK_MESSAGE
        } else {
            &self.message
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
