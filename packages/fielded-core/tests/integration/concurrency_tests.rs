//! Compiled schemas shared across threads.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;

use ntest::timeout;

use fielded_core::attribute::AttributeOptions;
use fielded_core::schema::Schema;
use fielded_core::Value;

use super::helpers::user_schema;

#[timeout(5000)]
#[test]
fn test_parallel_builds_share_schema() {
    let schema = user_schema();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                (0..200)
                    .map(|j| {
                        let age = i * 1000 + j;
                        schema
                            .build_named([
                                ("username", Value::from("johnny")),
                                ("age", Value::from(age.to_string())),
                                ("owed", Value::Integer(j)),
                            ])
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let users = handle.join().unwrap();
        assert_eq!(users.len(), 200);
        for (j, user) in users.iter().enumerate() {
            assert_eq!(user.get("age"), Some(&Value::Integer((i * 1000 + j) as i64)));
            assert!(Arc::ptr_eq(user.schema(), &schema));
        }
    }
}

#[timeout(5000)]
#[test]
fn test_default_producer_called_per_build() {
    let counter = Arc::new(AtomicI64::new(0));
    let next = Arc::clone(&counter);
    let schema = Schema::builder("Ticket")
        .define_attribute(
            "number",
            "integer",
            AttributeOptions::new().default_with(move || {
                Value::Integer(next.fetch_add(1, Ordering::SeqCst) + 1)
            }),
        )
        .unwrap()
        .build();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                for _ in 0..50 {
                    schema.build_positional(Vec::new()).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 200);
}

#[test]
fn test_value_objects_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<fielded_core::ValueObject>();
    assert_send_sync::<Schema>();
}
