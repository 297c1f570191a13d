//! API key authentication middleware.
//!
//! Every request must carry the shared secret in the `x-api-key` header;
//! a missing or wrong key short-circuits the pipeline with a fixed 403
//! response before any handler runs. The gate does not go through the
//! central error translator.
//!
//! # Security Notes
//!
//! - Key comparison is constant-time (`subtle`) to avoid timing leaks
//! - Bypass paths use exact string matching against `request.uri().path()`:
//!   `/health` is bypassed but `/health/` or `/HEALTH` are not. Only add
//!   paths that don't expose catalog data.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::response::IntoResponse;
use subtle::ConstantTimeEq;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Body returned on every authentication failure, wrong and missing key alike.
const FORBIDDEN_BODY: &str = r#"{"error":"Forbidden - Invalid API Key"}"#;

/// API key authentication layer.
///
/// The expected key always exists (configuration falls back to a development
/// default), so the gate is unconditional apart from the bypass paths.
#[derive(Clone)]
pub struct ApiKeyGate {
    expected_key: Arc<String>,
    bypass_paths: Arc<Vec<String>>,
}

impl ApiKeyGate {
    /// Create a new gate for the given secret and bypass paths.
    pub fn new(api_key: String, bypass_paths: Vec<String>) -> Self {
        Self {
            expected_key: Arc::new(api_key),
            bypass_paths: Arc::new(bypass_paths),
        }
    }
}

impl<S> Layer<S> for ApiKeyGate {
    type Service = ApiKeyGateService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ApiKeyGateService {
            inner,
            expected_key: self.expected_key.clone(),
            bypass_paths: self.bypass_paths.clone(),
        }
    }
}

/// API key authentication service wrapper.
#[derive(Clone)]
pub struct ApiKeyGateService<S> {
    inner: S,
    expected_key: Arc<String>,
    bypass_paths: Arc<Vec<String>>,
}

impl<S> Service<Request<Body>> for ApiKeyGateService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let expected_key = self.expected_key.clone();
        let bypass_paths = self.bypass_paths.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = req.uri().path();
            if bypass_paths.iter().any(|p| p == path) {
                debug!(path, "Bypassing auth for probe endpoint");
                return inner.call(req).await;
            }

            match extract_api_key(&req) {
                Some(provided) if constant_time_eq(&provided, &expected_key) => {
                    debug!("API key authentication successful");
                    inner.call(req).await
                }
                Some(_) => {
                    warn!(path = %req.uri().path(), "Invalid API key provided");
                    Ok(forbidden_response())
                }
                None => {
                    warn!(path = %req.uri().path(), "Missing API key");
                    Ok(forbidden_response())
                }
            }
        })
    }
}

/// Extract the API key from the `x-api-key` request header.
fn extract_api_key<B>(req: &Request<B>) -> Option<String> {
    let header_value = req.headers().get(API_KEY_HEADER)?;
    let value = header_value.to_str().ok()?;
    Some(value.to_string())
}

/// Perform constant-time comparison of two strings.
///
/// This prevents timing attacks where an attacker could determine
/// the correct API key by measuring response times.
fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Build the fixed 403 response for failed authentication.
fn forbidden_response() -> Response<Body> {
    (
        StatusCode::FORBIDDEN,
        [("Content-Type", "application/json")],
        FORBIDDEN_BODY,
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_api_key_from_header() {
        let req = Request::builder()
            .header("x-api-key", "my-secret-key")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_api_key(&req), Some("my-secret-key".to_string()));
    }

    #[test]
    fn test_extract_api_key_none() {
        let req = Request::builder().body(Body::empty()).unwrap();
        assert!(extract_api_key(&req).is_none());
    }

    #[test]
    fn test_extract_api_key_ignores_query_parameter() {
        let req = Request::builder()
            .uri("/api/products?api_key=query-secret")
            .body(Body::empty())
            .unwrap();

        assert!(extract_api_key(&req).is_none());
    }

    #[test]
    fn test_constant_time_eq_equal() {
        assert!(constant_time_eq("secret123", "secret123"));
    }

    #[test]
    fn test_constant_time_eq_not_equal() {
        assert!(!constant_time_eq("secret123", "secret456"));
    }

    #[test]
    fn test_constant_time_eq_different_lengths() {
        assert!(!constant_time_eq("short", "much-longer-string"));
    }

    #[test]
    fn test_forbidden_response_status() {
        let response = forbidden_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
