//! Wire and file projection of a fund
//!
//! The registry exposes funds over HTTP and persists them to the backing
//! file in one shared shape. Keeping that shape as its own serde type,
//! rather than deriving it on the entity, lets the wire format and the
//! domain shape evolve separately.

use serde::{Deserialize, Serialize};

use crate::fund::Fund;
use crate::identifier::FundId;

/// The seven-field representation of a fund used for HTTP responses and
/// for entries in the backing file.
///
/// Deserialization rejects unknown keys: a persisted record carries
/// exactly these seven fields, and anything else is structurally wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundProjection {
    pub fund_id: FundId,
    pub fund_name: String,
    pub fund_manager_name: String,
    pub fund_description: String,
    pub fund_nav: f64,
    pub fund_creation_date: String,
    pub fund_performance: f64,
}

impl From<&Fund> for FundProjection {
    fn from(fund: &Fund) -> Self {
        Self {
            fund_id: fund.id,
            fund_name: fund.name.clone(),
            fund_manager_name: fund.manager_name.clone(),
            fund_description: fund.description.clone(),
            fund_nav: fund.nav,
            fund_creation_date: fund.creation_date.clone(),
            fund_performance: fund.performance,
        }
    }
}

impl FundProjection {
    /// Reconstructs the entity, e.g. when loading the backing file
    pub fn into_fund(self) -> Fund {
        Fund {
            id: self.fund_id,
            name: self.fund_name,
            manager_name: self.fund_manager_name,
            description: self.fund_description,
            nav: self.fund_nav,
            creation_date: self.fund_creation_date,
            performance: self.fund_performance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_fund() -> Fund {
        Fund::new(
            "Test Fund",
            "David Suh",
            "A test fund.",
            150.75,
            "2024-11-05",
            12.5,
        )
    }

    #[test]
    fn test_projection_carries_exactly_seven_wire_keys() {
        let projection = FundProjection::from(&sample_fund());
        let value = serde_json::to_value(&projection).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        for key in [
            "fund_id",
            "fund_name",
            "fund_manager_name",
            "fund_description",
            "fund_nav",
            "fund_creation_date",
            "fund_performance",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn test_numeric_fields_serialize_as_json_numbers() {
        let projection = FundProjection::from(&sample_fund());
        let value = serde_json::to_value(&projection).unwrap();

        assert_eq!(value["fund_nav"], json!(150.75));
        assert_eq!(value["fund_performance"], json!(12.5));
    }

    #[test]
    fn test_fund_to_projection_roundtrip() {
        let fund = sample_fund();
        let reconstructed = FundProjection::from(&fund).into_fund();

        assert_eq!(fund, reconstructed);
    }

    #[test]
    fn test_projection_deserializes_from_wire_shape() {
        let value = json!({
            "fund_id": "e64d43b4-d26c-4e6d-9049-c6f3f62c588f",
            "fund_name": "Test Fund",
            "fund_manager_name": "David Suh",
            "fund_description": "A test fund.",
            "fund_nav": 150.75,
            "fund_creation_date": "2024-11-05",
            "fund_performance": 12.5
        });

        let projection: FundProjection = serde_json::from_value(value).unwrap();

        assert_eq!(
            projection.fund_id.to_string(),
            "e64d43b4-d26c-4e6d-9049-c6f3f62c588f"
        );
        assert_eq!(projection.fund_nav, 150.75);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let value = json!({
            "fund_id": "e64d43b4-d26c-4e6d-9049-c6f3f62c588f",
            "fund_name": "Test Fund",
            "fund_manager_name": "David Suh",
            "fund_description": "A test fund.",
            "fund_nav": 150.75,
            "fund_creation_date": "2024-11-05",
            "fund_performance": 12.5,
            "fund_benchmark": "S&P 500"
        });

        assert!(serde_json::from_value::<FundProjection>(value).is_err());
    }
}
