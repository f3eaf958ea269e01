//! Shared HTTP plumbing for the provider clients

use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

use crate::error::RoutingError;

/// Longest error body excerpt kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Send a request and return the body of a successful response
///
/// Maps transport failures, timeouts, rate limiting and non-success statuses
/// onto [`RoutingError`]. Providers report "no route" through error statuses,
/// so `classify_error` sees every non-success body first; returning `None`
/// yields a plain [`RoutingError::HttpStatus`].
pub(crate) async fn fetch_body<F>(
    request: RequestBuilder,
    timeout_secs: u64,
    classify_error: F,
) -> Result<String, RoutingError>
where
    F: FnOnce(StatusCode, &str) -> Option<RoutingError>,
{
    let response = request
        .send()
        .await
        .map_err(|e| map_transport_error(&e, timeout_secs))?;

    let status = response.status();
    debug!(status = %status, "Received routing response");

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok());

        return Err(RoutingError::RateLimitExceeded {
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if let Some(err) = classify_error(status, &body) {
            debug!(status = %status, error = %err, "Provider reported a routing failure");
            return Err(err);
        }
        return Err(RoutingError::HttpStatus {
            status: status.as_u16(),
            message: error_detail(&body),
        });
    }

    response
        .text()
        .await
        .map_err(|e| map_transport_error(&e, timeout_secs))
}

fn map_transport_error(e: &reqwest::Error, timeout_secs: u64) -> RoutingError {
    if e.is_timeout() {
        RoutingError::Timeout { timeout_secs }
    } else {
        RoutingError::ConnectionFailed(e.to_string())
    }
}

/// Pull a readable message out of an error body
///
/// Understands the `{"error": {"message": ...}}` and `{"message": ...}`
/// shapes; anything else is truncated verbatim.
fn error_detail(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/error/message")
                .or_else(|| json.get("message"))
                .or_else(|| json.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        });

    from_json.unwrap_or_else(|| body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect())
}
