//! Error-to-response mapping for page handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;
use triage_core::Error;

/// Wrapper turning pipeline errors into an operator-visible error page.
///
/// Upstream failures (bad status, undecodable body, unreachable backend) map
/// to 502; anything else is a 500. The body is a terse plain-text message so
/// the operator sees a failure rather than a silently empty page.
#[derive(Debug)]
pub struct PageError(Error);

impl From<Error> for PageError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = if self.0.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        error!("dashboard render failed: {}", self.0);

        (status, format!("Dashboard unavailable: {}", self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let response = PageError::from(Error::request(500, "/stats")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response =
            PageError::from(Error::decode("/tickets", "bad json")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn local_errors_map_to_internal_server_error() {
        let error = Error::Render {
            message: "template".to_string(),
        };
        let response = PageError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
