//! Comprehensive tests for domain_fund

use std::str::FromStr;

use domain_fund::{Fund, FundId, FundProjection};

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

mod identifier_tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let ids: Vec<FundId> = (0..100).map(|_| FundId::new()).collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_id_parses_back_from_display() {
        let id = FundId::new();
        let parsed = FundId::from_str(&id.to_string()).unwrap();

        assert_eq!(id, parsed);
    }

    #[test]
    fn test_invalid_id_string_fails_to_parse() {
        assert!(FundId::from_str("not-a-uuid").is_err());
    }
}

mod entity_tests {
    use super::*;

    #[test]
    fn test_creation_date_is_stored_verbatim() {
        // No date validation: the string is kept exactly as supplied.
        let fund = Fund::new("F", "M", "D", 1.0, "sometime in 2024", 0.0);

        assert_eq!(fund.creation_date, "sometime in 2024");
    }

    #[test]
    fn test_performance_update() {
        let mut fund = sample_fund();
        fund.set_performance(-3.25);

        assert_eq!(fund.performance, -3.25);
    }
}

mod projection_tests {
    use super::*;

    #[test]
    fn test_projection_copies_values_as_is() {
        let fund = sample_fund();
        let projection = FundProjection::from(&fund);

        assert_eq!(projection.fund_id, fund.id);
        assert_eq!(projection.fund_name, fund.name);
        assert_eq!(projection.fund_manager_name, fund.manager_name);
        assert_eq!(projection.fund_description, fund.description);
        assert_eq!(projection.fund_nav, fund.nav);
        assert_eq!(projection.fund_creation_date, fund.creation_date);
        assert_eq!(projection.fund_performance, fund.performance);
    }

    #[test]
    fn test_serialized_projection_roundtrips() {
        let fund = sample_fund();
        let json = serde_json::to_string(&FundProjection::from(&fund)).unwrap();
        let back: FundProjection = serde_json::from_str(&json).unwrap();

        assert_eq!(back.into_fund(), fund);
    }
}
