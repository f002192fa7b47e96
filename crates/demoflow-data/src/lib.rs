//! demoflow-data - Synthetic seed data for the jaffle_shop_online demo
//!
//! Generators write one simulated day of customers/orders/signups CSVs
//! into the training or validation seed directories; the injection module
//! plants curated test failures into the demo environment once a demo
//! completes.

pub mod error;
pub mod generator;
pub mod injection;

pub use error::{DataError, DataResult};
pub use generator::{
    generate_training_data, generate_validation_data, FINAL_VALIDATION_ROWS,
    TRAINING_ROWS_PER_DAY, VALIDATION_ROWS_PER_DAY,
};
pub use injection::{demo_test_scenarios, inject_demo_tests, InjectedTest};
