//! Decimal scale and rounding applied through a schema build.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use fielded_core::attribute::AttributeOptions;
use fielded_core::config::SchemaConfig;
use fielded_core::schema::Schema;
use fielded_core::types::RoundMode;
use fielded_core::Value;

fn dec(text: &str) -> Value {
    Value::Decimal(BigDecimal::from_str(text).unwrap())
}

fn amount_schema(mode: RoundMode) -> Arc<Schema> {
    Schema::builder("Payment")
        .define_attribute(
            "amount",
            "decimal",
            AttributeOptions::new().coercible().scale(2).round_mode(mode),
        )
        .unwrap()
        .build()
}

#[test]
fn test_round_modes_on_tie() {
    let expected = [
        (RoundMode::Up, "3.15", "-3.15"),
        (RoundMode::Down, "3.14", "-3.14"),
        (RoundMode::HalfUp, "3.15", "-3.15"),
        (RoundMode::HalfDown, "3.14", "-3.14"),
        (RoundMode::HalfEven, "3.14", "-3.14"),
        (RoundMode::Ceiling, "3.15", "-3.14"),
        (RoundMode::Floor, "3.14", "-3.15"),
    ];
    for (mode, positive, negative) in expected {
        let schema = amount_schema(mode);
        let obj = schema.build_positional(vec![Value::from("3.145")]).unwrap();
        assert_eq!(obj.get("amount"), Some(&dec(positive)), "{} on 3.145", mode);
        let obj = schema.build_positional(vec![Value::Float(-3.145)]).unwrap();
        assert_eq!(obj.get("amount"), Some(&dec(negative)), "{} on -3.145", mode);
    }
}

#[test]
fn test_scale_without_round_mode_rounds_half_up() {
    let schema = Schema::builder("Payment")
        .define_attribute("amount", "decimal", AttributeOptions::new().coercible().scale(2))
        .unwrap()
        .build();
    for raw in [Value::from("3.145"), Value::Float(3.145)] {
        let obj = schema.build_positional(vec![raw]).unwrap();
        assert_eq!(obj.get("amount"), Some(&dec("3.15")));
    }
    let obj = schema.build_positional(vec![Value::from("-3.145")]).unwrap();
    assert_eq!(obj.get("amount"), Some(&dec("-3.15")));
}

#[test]
fn test_every_input_kind_is_scaled() {
    let schema = amount_schema(RoundMode::HalfUp);
    for raw in [
        Value::from("3.145"),
        Value::from("$3.145"),
        Value::Float(3.145),
        dec("3.145"),
    ] {
        let obj = schema.build_positional(vec![raw]).unwrap();
        assert_eq!(obj.get("amount"), Some(&dec("3.15")));
    }
    let obj = schema.build_positional(vec![Value::Integer(7)]).unwrap();
    assert_eq!(obj.get("amount"), Some(&dec("7")));
}

#[test]
fn test_schema_default_round_mode() {
    let schema = Schema::builder("Ledger")
        .with_config(SchemaConfig {
            default_round_mode: RoundMode::HalfEven,
            ..Default::default()
        })
        .define_attribute("balance", "decimal", AttributeOptions::new().coercible().scale(1))
        .unwrap()
        .build();
    let balance = schema.attribute("balance").unwrap();
    assert_eq!(balance.round_mode(), RoundMode::HalfEven);

    let obj = schema.build_positional(vec![Value::from("2.25")]).unwrap();
    assert_eq!(obj.get("balance"), Some(&dec("2.2")));
    assert_eq!(obj.to_canonical_string(), "balance=2.2");
}

#[test]
fn test_unscaled_decimal_keeps_precision() {
    let schema = Schema::builder("Rate")
        .define_attribute("rate", "decimal", AttributeOptions::new().coercible())
        .unwrap()
        .build();
    let obj = schema.build_positional(vec![Value::from("0.123456789")]).unwrap();
    assert_eq!(obj.get("rate"), Some(&dec("0.123456789")));
}

#[test]
fn test_unscaled_decimal_beyond_fixed_precision() {
    let schema = Schema::builder("Rate")
        .define_attribute("rate", "decimal", AttributeOptions::new().coercible())
        .unwrap()
        .build();
    for text in [
        "0.12345678901234567890123456789",
        "123456789012345678901234567890.5",
        "79228162514264337593543950336",
        "-987654321098765432109876543210.01234567890123456789012345678",
    ] {
        let obj = schema.build_positional(vec![Value::from(text)]).unwrap();
        assert_eq!(obj.get("rate"), Some(&dec(text)));
        assert_eq!(obj.to_canonical_string(), format!("rate={}", text));
    }
}

#[test]
fn test_decimal_enumeration() {
    let schema = Schema::builder("Tier")
        .define_attribute(
            "rate",
            "decimal",
            AttributeOptions::new().coercible().one_of([1.5, 2.5]),
        )
        .unwrap()
        .build();
    for raw in [Value::from("1.5"), Value::Float(1.5), Value::from("$1.50")] {
        let obj = schema.build_positional(vec![raw]).unwrap();
        assert_eq!(obj.get("rate"), Some(&dec("1.5")));
    }
    let err = schema.build_positional(vec![Value::from("3")]).unwrap_err();
    assert_eq!(err.to_string(), ":rate is not included in list");
}

#[test]
fn test_scale_rejected_on_non_decimal() {
    let err = Schema::builder("Payment")
        .define_attribute("count", "integer", AttributeOptions::new().scale(2))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "option 'scale' is not supported by type 'integer' (attribute :count)"
    );
}
