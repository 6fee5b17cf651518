//! Property-based tests for DTO validation and timestamp parsing.
//!
//! Uses proptest to verify the validation invariants across many random
//! inputs. No shallow tests - every property verifies a rule the contract
//! fixtures rely on.

use chrono::{DateTime, FixedOffset};
use proptest::prelude::*;
use roster_client::{parse_created_on, Company, Employee, User, ValidationError};

// ===== Helpers =====

fn sample_timestamp() -> DateTime<FixedOffset> {
    parse_created_on("2024-01-01T00:00:00Z").unwrap()
}

// ===== Property Tests =====

proptest! {
    /// Property: construction succeeds exactly when the name is non-empty
    /// and the id is non-negative
    #[test]
    fn construction_matches_validation_rules(
        id in any::<i64>(),
        name in "[A-Za-z ]{0,20}"
    ) {
        match User::new(id, name.clone(), sample_timestamp()) {
            Ok(user) => {
                prop_assert!(!name.is_empty(), "empty name accepted");
                prop_assert!(id >= 0, "negative id accepted: {}", id);
                prop_assert_eq!(user.id(), id);
                prop_assert_eq!(user.name(), name.as_str());
            }
            Err(ValidationError::EmptyName { .. }) => {
                prop_assert!(name.is_empty(), "non-empty name rejected: {:?}", name);
            }
            Err(ValidationError::NegativeId { .. }) => {
                prop_assert!(id < 0, "non-negative id rejected: {}", id);
                // An empty name is reported before a bad id.
                prop_assert!(!name.is_empty());
            }
        }
    }

    /// Property: an empty name is always rejected with the exact message
    #[test]
    fn empty_name_always_rejected(id in any::<i64>()) {
        let err = User::new(id, "", sample_timestamp()).unwrap_err();
        prop_assert_eq!(err.to_string(), "User must have a name");
    }

    /// Property: negative ids are always rejected, naming the resource kind
    #[test]
    fn negative_id_always_rejected(id in i64::MIN..0) {
        let ts = sample_timestamp();
        prop_assert_eq!(
            User::new(id, "x", ts).unwrap_err().to_string(),
            "User ID must be a positive integer"
        );
        prop_assert_eq!(
            Company::new(id, "x", ts).unwrap_err().to_string(),
            "Company ID must be a positive integer"
        );
        prop_assert_eq!(
            Employee::new(id, "x", ts).unwrap_err().to_string(),
            "Employee ID must be a positive integer"
        );
    }

    /// Property: the display label always renders as Kind(id:name)
    #[test]
    fn display_label_shape(
        id in 0i64..1_000_000,
        name in "[A-Za-z ]{1,20}"
    ) {
        let user = User::new(id, name.clone(), sample_timestamp()).unwrap();
        prop_assert_eq!(user.to_string(), format!("User({}:{})", id, name));
    }

    /// Property: colonless offsets parse identically to their colon forms
    #[test]
    fn offset_colon_is_immaterial(
        east in any::<bool>(),
        hours in 0u32..=23,
        minutes in 0u32..=59
    ) {
        let sign = if east { '+' } else { '-' };
        let colonless = format!("2024-06-15T12:00:00{sign}{hours:02}{minutes:02}");
        let with_colon = format!("2024-06-15T12:00:00{sign}{hours:02}:{minutes:02}");

        let a = parse_created_on(&colonless).unwrap();
        let b = parse_created_on(&with_colon).unwrap();
        prop_assert_eq!(a, b, "colonless offset parsed differently: {}", colonless);

        let magnitude = (hours * 3600 + minutes * 60) as i32;
        let expected = if east { magnitude } else { -magnitude };
        prop_assert_eq!(a.offset().local_minus_utc(), expected);
    }

    /// Property: timestamp parsing is total - arbitrary input never panics
    #[test]
    fn timestamp_parsing_never_panics(raw in ".{0,40}") {
        let _ = parse_created_on(&raw);
    }
}
