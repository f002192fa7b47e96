//! Incremental seed data generators
//!
//! Each call writes one simulated day of data. The RNG is seeded from the
//! run timestamp, so regenerating the same day produces identical rows.
//! Training batches are clean; validation batches carry a share of dirty
//! rows (null emails, negative amounts, unknown statuses, duplicated ids)
//! so the data-quality tests downstream have something to catch, and the
//! final `last_run` batch is dirtier still.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use demoflow_core::ProjectLayout;
use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::{DataError, DataResult};

/// Rows of new order data per simulated training day
pub const TRAINING_ROWS_PER_DAY: usize = 200;

/// Rows of new order data per simulated validation day
pub const VALIDATION_ROWS_PER_DAY: usize = 100;

/// Rows in the final validation batch
pub const FINAL_VALIDATION_ROWS: usize = 600;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carmen", "Dana", "Elio", "Freya", "Gil", "Hana", "Igor", "Jules", "Kaya",
    "Liam", "Mona", "Nils", "Omar", "Priya", "Quinn", "Rosa", "Sven", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Berg", "Costa", "Dvorak", "Eng", "Fischer", "Garcia", "Hart", "Ito", "Jensen",
    "Kim", "Larsen", "Mori", "Novak", "Okafor", "Patel", "Quist", "Rossi", "Sato", "Tanaka",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.test", "shopmail.dev"];

const ORDER_STATUSES: &[&str] = &["placed", "shipped", "completed", "returned"];

const UTM_SOURCES: &[&str] = &["google", "facebook", "newsletter", "direct", "referral"];

/// How dirty a generated batch is allowed to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnomalyProfile {
    /// Training data: no injected anomalies
    Clean,
    /// Day-to-day validation data
    Light,
    /// Final validation batch
    Heavy,
}

impl AnomalyProfile {
    fn rate(self) -> f64 {
        match self {
            AnomalyProfile::Clean => 0.0,
            AnomalyProfile::Light => 0.08,
            AnomalyProfile::Heavy => 0.2,
        }
    }
}

/// Generate one simulated day of training data, overwriting the previous
/// day's files.
pub fn generate_training_data(
    layout: &ProjectLayout,
    run_time: DateTime<Utc>,
) -> DataResult<()> {
    log::info!(
        "Generating training data for {}",
        run_time.format("%Y-%m-%d")
    );
    write_batch(
        &layout.training_seeds_dir(),
        "training",
        run_time,
        TRAINING_ROWS_PER_DAY,
        AnomalyProfile::Clean,
    )
}

/// Generate one batch of validation data.
///
/// Callers clear the validation seed files first; this only writes.
pub fn generate_validation_data(
    layout: &ProjectLayout,
    run_time: DateTime<Utc>,
    amount_of_new_data: usize,
    last_run: bool,
) -> DataResult<()> {
    log::info!(
        "Generating validation data for {} ({} rows{})",
        run_time.format("%Y-%m-%d"),
        amount_of_new_data,
        if last_run { ", last run" } else { "" }
    );
    let profile = if last_run {
        AnomalyProfile::Heavy
    } else {
        AnomalyProfile::Light
    };
    write_batch(
        &layout.validation_seeds_dir(),
        "validation",
        run_time,
        amount_of_new_data,
        profile,
    )
}

fn write_batch(
    dir: &Path,
    suffix: &str,
    run_time: DateTime<Utc>,
    orders: usize,
    profile: AnomalyProfile,
) -> DataResult<()> {
    fs::create_dir_all(dir).map_err(|e| DataError::CreateDir {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut rng = ChaCha8Rng::seed_from_u64(run_time.timestamp() as u64);

    let customers = build_customers(&mut rng, run_time, (orders / 4).max(1), profile);
    let order_rows = build_orders(&mut rng, run_time, &customers, orders, profile);
    let signups = build_signups(&mut rng, run_time, &customers, (orders / 8).max(1), profile);

    write_csv(
        &dir.join(format!("customers_{suffix}.csv")),
        "id,name,email,created_at",
        customers.iter().map(Customer::to_row),
    )?;
    write_csv(
        &dir.join(format!("orders_{suffix}.csv")),
        "id,customer_id,created_at,amount,status",
        order_rows.iter().cloned(),
    )?;
    write_csv(
        &dir.join(format!("signups_{suffix}.csv")),
        "id,customer_id,signed_up_at,utm_source",
        signups.iter().cloned(),
    )?;
    Ok(())
}

struct Customer {
    id: String,
    name: String,
    email: String,
    created_at: String,
}

impl Customer {
    fn to_row(&self) -> String {
        format!("{},{},{},{}", self.id, self.name, self.email, self.created_at)
    }
}

fn build_customers(
    rng: &mut ChaCha8Rng,
    run_time: DateTime<Utc>,
    count: usize,
    profile: AnomalyProfile,
) -> Vec<Customer> {
    (0..count)
        .map(|_| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let email = if rng.random::<f64>() < profile.rate() {
                // Null email: trips the not_null test on customers
                String::new()
            } else {
                format!(
                    "{}.{}{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    rng.random_range(1..1000),
                    EMAIL_DOMAINS[rng.random_range(0..EMAIL_DOMAINS.len())]
                )
            };
            Customer {
                id: gen_id(rng),
                name: format!("{first} {last}"),
                email,
                created_at: timestamp_within_day(rng, run_time),
            }
        })
        .collect()
}

fn build_orders(
    rng: &mut ChaCha8Rng,
    run_time: DateTime<Utc>,
    customers: &[Customer],
    count: usize,
    profile: AnomalyProfile,
) -> Vec<String> {
    let mut rows: Vec<String> = Vec::with_capacity(count);
    let mut previous_id: Option<String> = None;

    for _ in 0..count {
        let dirty = rng.random::<f64>() < profile.rate();

        let id = match &previous_id {
            // Duplicated id: trips the unique test on orders
            Some(prev) if dirty && rng.random::<f64>() < 0.25 => prev.clone(),
            _ => gen_id(rng),
        };
        let customer_id = if dirty && rng.random::<f64>() < 0.25 {
            String::new()
        } else {
            customers[rng.random_range(0..customers.len())].id.clone()
        };
        let amount = if dirty {
            // Negative or outlier amounts feed the anomaly tests
            if rng.random::<f64>() < 0.5 {
                -rng.random_range(1.0..100.0)
            } else {
                rng.random_range(5_000.0..20_000.0)
            }
        } else {
            rng.random_range(5.0..500.0)
        };
        let status = if dirty && rng.random::<f64>() < 0.25 {
            "unknown"
        } else {
            ORDER_STATUSES[rng.random_range(0..ORDER_STATUSES.len())]
        };

        previous_id = Some(id.clone());
        rows.push(format!(
            "{},{},{},{:.2},{}",
            id,
            customer_id,
            timestamp_within_day(rng, run_time),
            amount,
            status
        ));
    }
    rows
}

fn build_signups(
    rng: &mut ChaCha8Rng,
    run_time: DateTime<Utc>,
    customers: &[Customer],
    count: usize,
    profile: AnomalyProfile,
) -> Vec<String> {
    (0..count)
        .map(|_| {
            let dirty = rng.random::<f64>() < profile.rate();
            let utm_source = if dirty {
                ""
            } else {
                UTM_SOURCES[rng.random_range(0..UTM_SOURCES.len())]
            };
            format!(
                "{},{},{},{}",
                gen_id(rng),
                customers[rng.random_range(0..customers.len())].id,
                timestamp_within_day(rng, run_time),
                utm_source
            )
        })
        .collect()
}

/// Deterministic id drawn from the day-seeded RNG
fn gen_id(rng: &mut ChaCha8Rng) -> String {
    Uuid::from_u128(rng.random()).to_string()
}

fn timestamp_within_day(rng: &mut ChaCha8Rng, run_time: DateTime<Utc>) -> String {
    let offset = Duration::seconds(rng.random_range(0..86_400));
    (run_time - offset).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn write_csv(
    path: &Path,
    header: &str,
    rows: impl Iterator<Item = String>,
) -> DataResult<()> {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(&row);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| DataError::WriteSeed {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
