//! End-to-end builds of the user record.

use chrono::{TimeZone, Utc};

use fielded_core::error::Absence;
use fielded_core::{BuildError, Value};

use super::helpers::user_schema;

#[test]
fn test_build_by_name() {
    let schema = user_schema();
    let user = schema
        .build_named([
            ("username", Value::from("johnny")),
            ("age", Value::from("35")),
            ("owed", Value::from("0.0")),
        ])
        .unwrap();

    assert_eq!(user.get("username"), Some(&Value::from("johnny")));
    assert_eq!(user.get("password"), Some(&Value::Nil));
    assert_eq!(user.get("age"), Some(&Value::Integer(35)));
    assert_eq!(user.get("owed"), Some(&Value::Float(0.0)));
    assert_eq!(user.get("source"), Some(&Value::Nil));
    assert_eq!(user.get("level"), Some(&Value::Integer(2)));
    assert_eq!(
        user.to_canonical_string(),
        r#"username="johnny" password=nil age=35 owed=0.0 source=nil level=2 at=nil"#
    );
}

#[test]
fn test_build_by_position() {
    let schema = user_schema();
    let user = schema
        .build_positional(vec![
            Value::from("johnny"),
            Value::from("secret"),
            Value::Float(24.32),
            Value::from("$12,345.67"),
            Value::Symbol("B".into()),
            Value::Integer(3),
            Value::from("2026-01-02T03:04:05Z"),
        ])
        .unwrap();

    assert_eq!(user.get("age"), Some(&Value::Integer(24)));
    assert_eq!(user.get("owed"), Some(&Value::Float(12345.67)));
    assert_eq!(user.get("source"), Some(&Value::from("B")));
    assert_eq!(user.get("level"), Some(&Value::Integer(3)));
    assert_eq!(
        user.get("at"),
        Some(&Value::Time(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()))
    );
    assert_eq!(
        user.to_string(),
        r#"#<User username="johnny" password="secret" age=24 owed=12345.67 source="B" level=3 at=2026-01-02T03:04:05Z>"#
    );
}

#[test]
fn test_build_mixed() {
    let schema = user_schema();
    let user = schema
        .build(
            vec![Value::from("johnny"), Value::Nil, Value::Integer(40)],
            [("owed", Value::Integer(5)), ("age", Value::from("41"))],
        )
        .unwrap();
    assert_eq!(user.get("age"), Some(&Value::Integer(41)));
    assert_eq!(user.get("owed"), Some(&Value::Float(5.0)));
}

#[test]
fn test_missing_username() {
    let schema = user_schema();
    let err = schema
        .build_named([("age", Value::from("35")), ("owed", Value::from("0.0"))])
        .unwrap_err();
    assert_eq!(err.to_string(), ":username is required");
    assert_eq!(err.attribute(), Some("username"));
}

#[test]
fn test_error_messages() {
    let schema = user_schema();
    let base = || {
        vec![
            ("username", Value::from("johnny")),
            ("age", Value::from("35")),
            ("owed", Value::from("1.5")),
        ]
    };

    let cases: Vec<(&str, Value, &str)> = vec![
        ("username", Value::from("9lives"), ":username is not in a valid format"),
        ("username", Value::Symbol("johnny".into()), ":username is not of type string"),
        ("username", Value::from(""), ":username is required"),
        ("password", Value::Integer(1234), ":password is not of type string"),
        ("age", Value::from("thirty"), ":age is required"),
        ("owed", Value::from("$3.o1"), ":owed is required"),
        ("source", Value::from("D"), ":source is not included in list"),
        ("level", Value::from("3"), ":level is required"),
    ];

    for (key, value, message) in cases {
        let mut named = base();
        named.push((key, value));
        let err = schema.build_named(named).unwrap_err();
        assert_eq!(err.to_string(), message, "building with {} set", key);
    }
}

#[test]
fn test_uncoercible_is_distinguishable_internally() {
    let schema = user_schema();
    let err = schema
        .build_named([("username", Value::from("johnny")), ("age", Value::from("x"))])
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Required {
            attribute: "age".into(),
            cause: Absence::Uncoercible
        }
    );
}

#[test]
fn test_first_failure_wins() {
    let schema = user_schema();
    let err = schema
        .build_named([
            ("username", Value::from("9lives")),
            ("age", Value::from("x")),
            ("source", Value::from("D")),
        ])
        .unwrap_err();
    assert!(matches!(err, BuildError::Format { .. }));
}

#[test]
fn test_json_input() {
    let schema = user_schema();
    let raw = serde_json::json!({
        "username": "johnny",
        "age": 35.9,
        "owed": "12.50",
        "source": "C",
        "ignored": true
    });
    let named: Vec<(String, Value)> = raw
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.clone(), Value::try_from(v.clone()).unwrap()))
        .collect();
    let user = schema.build_named(named).unwrap();
    assert_eq!(user.get("age"), Some(&Value::Integer(35)));
    assert_eq!(user.get("owed"), Some(&Value::Float(12.5)));
    assert_eq!(user.get("source"), Some(&Value::from("C")));
}

#[test]
fn test_descriptors() {
    let schema = user_schema();
    let descriptors: Vec<String> = schema.attributes().iter().map(|a| a.to_string()).collect();
    assert_eq!(
        descriptors[0],
        r#"name=username type="string" options={required=true, coercible=false, strict=true, format=/(?i)^[a-z]/}"#
    );
    assert_eq!(
        descriptors[4],
        r#"name=source type="string" options={required=false, coercible=true, enum=["A", "B", "C"]}"#
    );
    assert!(schema.attribute("level").unwrap().has_default());
}
