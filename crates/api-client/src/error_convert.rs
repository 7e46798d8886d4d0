use serde::de::DeserializeOwned;
use shared_types::{AppError, FALLBACK_MESSAGE};

/// Convert a reqwest::Error into an AppError.
///
/// Transport details go to the log; the user only ever sees the generic
/// notice, since there is no server payload to quote.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        tracing::warn!(error = %err, "Hospital API returned an unreadable body");
        return AppError::decode(FALLBACK_MESSAGE);
    }
    if let Some(status) = err.status() {
        return AppError::from_response(status.as_u16(), "");
    }
    tracing::warn!(error = %err, "Hospital API request failed");
    AppError::network(FALLBACK_MESSAGE)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Decode a 2xx body, or turn a non-2xx response into an AppError carrying
/// the payload's `message`.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, AppError> {
    if !(200..300).contains(&status) {
        return Err(AppError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, status, "Unexpected response shape from hospital API");
        AppError::decode(FALLBACK_MESSAGE)
    })
}

/// Read a response to completion and decode it with [`decode_body`].
pub async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| e.into_app_error())?;
    decode_body(status, &body)
}
