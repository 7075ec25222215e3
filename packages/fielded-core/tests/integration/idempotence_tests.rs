//! Rebuilding from a value object's own values yields an equal object.

use proptest::prelude::*;

use fielded_core::Value;

use super::helpers::user_schema;

proptest! {
    #[test]
    fn rebuild_from_canonical_values_is_identity(
        username in "[a-z][a-z0-9_]{0,15}",
        age in any::<i32>(),
        owed in -1.0e9f64..1.0e9f64,
        source in prop::sample::select(vec!["A", "B", "C"]),
        level in 0i64..100,
    ) {
        let schema = user_schema();
        let first = schema
            .build_named([
                ("username", Value::from(username)),
                ("age", Value::from(age.to_string())),
                ("owed", Value::from(owed.to_string())),
                ("source", Value::Symbol(source.to_string())),
                ("level", Value::Integer(level)),
            ])
            .unwrap();

        let second = schema.build_positional(first.values().to_vec()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.to_canonical_string(), second.to_canonical_string());
    }

    #[test]
    fn truncates_fractional_ages(whole in -10_000i64..10_000, frac in 0.0f64..0.99) {
        let schema = user_schema();
        let age = if whole < 0 { whole as f64 - frac } else { whole as f64 + frac };
        let user = schema
            .build_named([
                ("username", Value::from("johnny")),
                ("age", Value::Float(age)),
                ("owed", Value::Float(0.0)),
            ])
            .unwrap();
        prop_assert_eq!(user.get("age"), Some(&Value::Integer(whole)));
    }
}
