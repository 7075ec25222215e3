//! Typed attribute schemas that turn loosely-typed input into immutable,
//! validated value objects.
//!
//! Provides the type registry and built-in scalar types, attribute
//! definitions with their validation pipeline, schemas, and the fail-fast
//! builder that assembles value objects.
//!
//! ```
//! use fielded_core::attribute::AttributeOptions;
//! use fielded_core::schema::Schema;
//! use fielded_core::value::Value;
//!
//! let schema = Schema::builder("User")
//!     .define_attribute("username", "string", AttributeOptions::new().strict())
//!     .unwrap()
//!     .define_attribute("age", "integer", AttributeOptions::new().coercible())
//!     .unwrap()
//!     .build();
//!
//! let user = schema
//!     .build_named([("username", Value::from("johnny")), ("age", Value::from("35"))])
//!     .unwrap();
//! assert_eq!(user.get("age"), Some(&Value::Integer(35)));
//! assert_eq!(user.to_canonical_string(), r#"username="johnny" age=35"#);
//! ```

pub mod attribute;
pub mod builder;
pub mod config;
pub mod error;
pub mod schema;
pub mod types;
pub mod value;
pub mod value_object;

pub use error::{BuildError, SchemaError};
pub use schema::{Schema, SchemaBuilder};
pub use value::Value;
pub use value_object::ValueObject;
