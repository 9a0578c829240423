//! Request DTOs and input coercion
//!
//! Request fields are optional at the serde level so that a missing field
//! surfaces as a per-field validation error naming the field, rather than
//! a generic body rejection. Numeric fields arrive as raw JSON values and
//! are coerced afterwards: clients may send either a number or a numeric
//! string.

use domain_fund::Fund;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /funds`: the fund fields minus the server-assigned id
#[derive(Debug, Deserialize)]
pub struct CreateFundRequest {
    pub fund_name: Option<String>,
    pub fund_manager_name: Option<String>,
    pub fund_description: Option<String>,
    pub fund_nav: Option<Value>,
    pub fund_creation_date: Option<String>,
    pub fund_performance: Option<Value>,
}

/// Body of `PUT /funds/{id}/performance`
#[derive(Debug, Deserialize)]
pub struct UpdatePerformanceRequest {
    pub fund_performance: Option<Value>,
}

impl CreateFundRequest {
    /// Validates field presence and numeric coercion, then builds the fund.
    ///
    /// Fields are checked in declaration order, and the first missing one
    /// is named in the error. No fund is constructed on any failure.
    pub fn try_into_fund(self) -> Result<Fund, ApiError> {
        let name = self.fund_name.ok_or_else(|| missing("fund_name"))?;
        let manager_name = self
            .fund_manager_name
            .ok_or_else(|| missing("fund_manager_name"))?;
        let description = self
            .fund_description
            .ok_or_else(|| missing("fund_description"))?;
        let nav = self.fund_nav.ok_or_else(|| missing("fund_nav"))?;
        let nav = coerce_number(&nav)
            .ok_or_else(|| ApiError::Validation("Invalid data type provided.".to_string()))?;
        let creation_date = self
            .fund_creation_date
            .ok_or_else(|| missing("fund_creation_date"))?;
        let performance = self
            .fund_performance
            .ok_or_else(|| missing("fund_performance"))?;
        let performance = coerce_number(&performance)
            .ok_or_else(|| ApiError::Validation("Invalid data type provided.".to_string()))?;

        Ok(Fund::new(
            name,
            manager_name,
            description,
            nav,
            creation_date,
            performance,
        ))
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::Validation(format!("Missing field: {field}"))
}

/// Interprets a JSON value as a floating-point number.
///
/// Accepts a JSON number or a string that parses as one; everything else
/// is rejected.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_request() -> CreateFundRequest {
        serde_json::from_value(json!({
            "fund_name": "Test Fund",
            "fund_manager_name": "David Suh",
            "fund_description": "A test fund.",
            "fund_nav": 150.75,
            "fund_creation_date": "2024-11-05",
            "fund_performance": 12.5
        }))
        .unwrap()
    }

    #[test]
    fn test_complete_request_builds_a_fund() {
        let fund = full_request().try_into_fund().unwrap();

        assert_eq!(fund.name, "Test Fund");
        assert_eq!(fund.nav, 150.75);
        assert_eq!(fund.performance, 12.5);
    }

    #[test]
    fn test_first_missing_field_is_named() {
        let mut request = full_request();
        request.fund_manager_name = None;
        request.fund_creation_date = None;

        let err = request.try_into_fund().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid data: Missing field: fund_manager_name"
        );
    }

    #[test]
    fn test_non_numeric_nav_is_rejected() {
        let mut request = full_request();
        request.fund_nav = Some(json!("not a number"));

        let err = request.try_into_fund().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_coerce_number_accepts_numeric_strings() {
        assert_eq!(coerce_number(&json!("150.75")), Some(150.75));
        assert_eq!(coerce_number(&json!(12.5)), Some(12.5));
        assert_eq!(coerce_number(&json!(450000)), Some(450000.0));
    }

    #[test]
    fn test_coerce_number_rejects_non_numbers() {
        assert_eq!(coerce_number(&json!("12.5%")), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!([12.5])), None);
    }
}
