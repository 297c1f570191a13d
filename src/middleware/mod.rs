//! HTTP middleware for security and observability.
//!
//! - **API Key Authentication**: constant-time shared-secret check,
//!   short-circuits with 403
//! - **Request Logging**: records every inbound request, authorized or not
//!
//! Stack order per request: Logger → Auth Gate → Handler.

pub mod auth;
pub mod logger;

pub use auth::ApiKeyGate;
pub use logger::RequestLogLayer;
