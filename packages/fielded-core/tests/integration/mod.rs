//! Integration test suite for schema definition and value object building.
//!
//! Tests are organized by concern:
//! 1. End-to-end records with strict, coercible and defaulted attributes
//! 2. Decimal scale and rounding through a schema
//! 3. Sharing compiled schemas across threads
//! 4. Rebuilding from canonical values

pub mod concurrency_tests;
pub mod decimal_rounding_tests;
pub mod helpers;
pub mod idempotence_tests;
pub mod strict_value_tests;
