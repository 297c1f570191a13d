//! Request body extraction.
//!
//! [`ApiJson`] deserializes like `axum::Json` but rejects with [`ApiError`],
//! so a mis-typed or syntactically broken payload surfaces as a 400 with the
//! same `{"error": ...}` body as every other failure, instead of axum's
//! default 422.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};

    use super::*;
    use crate::models::NewProduct;

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let req = json_request(
            r#"{"name":"Mouse","description":"Wireless","price":25,"category":"electronics","inStock":true}"#,
        );

        let ApiJson(payload) = ApiJson::<NewProduct>::from_request(req, &())
            .await
            .expect("Extraction should succeed");

        assert_eq!(payload.name, "Mouse");
    }

    #[tokio::test]
    async fn test_mistyped_field_rejects_as_validation_error() {
        let req = json_request(
            r#"{"name":"Mouse","description":"Wireless","price":25,"category":"electronics","inStock":"yes"}"#,
        );

        let result = ApiJson::<NewProduct>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_broken_json_rejects_as_validation_error() {
        let req = json_request("{not json");

        let result = ApiJson::<NewProduct>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
