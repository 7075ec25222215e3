//! Shared fixtures for the integration suite.

use std::sync::Arc;

use fielded_core::attribute::AttributeOptions;
use fielded_core::schema::Schema;

/// User record mixing strict, coercible, enumerated and defaulted attributes.
pub fn user_schema() -> Arc<Schema> {
    Schema::builder("User")
        .define_attribute(
            "username",
            "string",
            AttributeOptions::new().required().strict().format("(?i)^[a-z]"),
        )
        .unwrap()
        .define_attribute("password", "string", AttributeOptions::new().optional().strict())
        .unwrap()
        .define_attribute("age", "integer", AttributeOptions::new().coercible())
        .unwrap()
        .define_attribute("owed", "float", AttributeOptions::new().coercible())
        .unwrap()
        .define_attribute(
            "source",
            "string",
            AttributeOptions::new().optional().coercible().one_of(["A", "B", "C"]),
        )
        .unwrap()
        .define_attribute("level", "integer", AttributeOptions::new().default_value(2))
        .unwrap()
        .define_attribute("at", "time", AttributeOptions::new().optional().coercible())
        .unwrap()
        .build()
}
