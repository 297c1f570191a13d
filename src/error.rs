use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Application-wide error types with appropriate HTTP status codes.
///
/// Handlers raise these as values and return them through [`ApiResult`];
/// the [`IntoResponse`] impl below is the single place where an error kind
/// becomes a status/body pair.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the full error server-side; clients only see the mapped message
        tracing::error!(error = %self, "Request failed");

        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            // Never expose internal details to clients
            ApiError::Config(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        let body = ErrorBody {
            error: message.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Funnel body-extraction rejections into the validation error kind.
///
/// Axum's default `Json` rejection answers 422 for mis-typed payloads; this
/// API treats every malformed create/update body as a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => {
                ApiError::Validation(sanitize_body_error(&e.body_text()))
            }
            JsonRejection::JsonSyntaxError(_) => {
                ApiError::Validation("Malformed JSON in request body".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::Validation("Expected a JSON request body".to_string())
            }
            _ => ApiError::Validation("Invalid request body".to_string()),
        }
    }
}

/// Sanitize serde error messages to avoid leaking internal type information.
///
/// Serde errors can contain internal struct/field names which shouldn't be
/// exposed to external clients. This function extracts the useful parts.
fn sanitize_body_error(msg: &str) -> String {
    if msg.contains("missing field")
        && let Some(start) = msg.find('`')
        && let Some(end) = msg[start + 1..].find('`')
    {
        let field = &msg[start + 1..start + 1 + end];
        return format!("Missing required field: {field}");
    }

    if msg.contains("invalid type") {
        return "Invalid data type in request body".to_string();
    }

    "Invalid product data".to_string()
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
