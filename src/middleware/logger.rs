//! Request logging middleware.
//!
//! Sits outermost in the stack so that every inbound request is recorded,
//! including those the authentication gate rejects. Logs method and path on
//! ingress, status and latency on egress.

use std::task::{Context, Poll};
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, Response};
use tower::{Layer, Service};
use tracing::info;

/// Request logging layer for the Tower middleware stack.
#[derive(Clone, Default)]
pub struct RequestLogLayer;

impl RequestLogLayer {
    /// Create a new request logging layer.
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService { inner }
    }
}

/// Request logging service wrapper.
#[derive(Clone)]
pub struct RequestLogService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestLogService<S>
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
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let started = Instant::now();

        info!(%method, path, "Incoming request");

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let response = inner.call(req).await?;

            info!(
                %method,
                path,
                status = response.status().as_u16(),
                latency_ms = started.elapsed().as_millis() as u64,
                "Request completed"
            );

            Ok(response)
        })
    }
}
