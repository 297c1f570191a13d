use crate::error::{ApiError, ApiResult};
use crate::models::{NewProduct, ProductPatch};

// =============================================================================
// Validation Constants
// =============================================================================

/// Maximum length for product names and categories.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for product descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 2048;

/// Validate the payload of a create request.
///
/// Type-level shape (numeric price, strictly boolean stock flag) is already
/// enforced by deserialization; this checks the field contents.
pub fn validate_new_product(payload: &NewProduct) -> ApiResult<()> {
    validate_name(&payload.name)?;
    validate_description(&payload.description)?;
    validate_category(&payload.category)?;
    Ok(())
}

/// Validate the payload of an update request.
///
/// Only fields present in the patch are checked; absent fields keep their
/// stored values and need no validation.
pub fn validate_patch(patch: &ProductPatch) -> ApiResult<()> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(description) = &patch.description {
        validate_description(description)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> ApiResult<()> {
    if name.is_empty() {
        return Err(ApiError::Validation(
            "Product name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ApiError::Validation(format!(
            "Product name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> ApiResult<()> {
    if description.is_empty() {
        return Err(ApiError::Validation(
            "Product description cannot be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ApiError::Validation(format!(
            "Product description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_category(category: &str) -> ApiResult<()> {
    if category.is_empty() {
        return Err(ApiError::Validation(
            "Product category cannot be empty".to_string(),
        ));
    }
    if category.len() > MAX_NAME_LENGTH {
        return Err(ApiError::Validation(format!(
            "Product category cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn valid_payload() -> NewProduct {
        NewProduct {
            name: "Mouse".to_string(),
            description: "Wireless".to_string(),
            price: Decimal::from(25),
            category: "electronics".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(validate_new_product(&valid_payload()).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let payload = NewProduct {
            name: String::new(),
            ..valid_payload()
        };

        let result = validate_new_product(&payload);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }

    #[test]
    fn test_empty_description_fails() {
        let payload = NewProduct {
            description: String::new(),
            ..valid_payload()
        };

        let result = validate_new_product(&payload);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("description"));
    }

    #[test]
    fn test_empty_category_fails() {
        let payload = NewProduct {
            category: String::new(),
            ..valid_payload()
        };

        let result = validate_new_product(&payload);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("category"));
    }

    #[test]
    fn test_name_too_long_fails() {
        let payload = NewProduct {
            name: "a".repeat(MAX_NAME_LENGTH + 1),
            ..valid_payload()
        };

        let result = validate_new_product(&payload);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_empty_patch_passes() {
        assert!(validate_patch(&ProductPatch::default()).is_ok());
    }

    #[test]
    fn test_patch_checks_present_fields_only() {
        let patch = ProductPatch {
            name: Some("Trackball".to_string()),
            ..ProductPatch::default()
        };
        assert!(validate_patch(&patch).is_ok());

        let patch = ProductPatch {
            name: Some(String::new()),
            ..ProductPatch::default()
        };
        assert!(validate_patch(&patch).is_err());
    }

    #[test]
    fn test_patch_empty_category_fails() {
        let patch = ProductPatch {
            category: Some(String::new()),
            ..ProductPatch::default()
        };

        let result = validate_patch(&patch);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("category"));
    }

    #[test]
    fn test_patch_description_too_long_fails() {
        let patch = ProductPatch {
            description: Some("a".repeat(MAX_DESCRIPTION_LENGTH + 1)),
            ..ProductPatch::default()
        };

        assert!(validate_patch(&patch).is_err());
    }
}
