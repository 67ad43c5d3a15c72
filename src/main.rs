//! Criteria plan printer.
//!
//! Loads configuration, builds an order-search criteria set, applies a
//! sample filter and prints the plan a query engine would receive.

mod order_search;

use chrono::NaiveDate;
use tracing_subscriber::{EnvFilter, fmt};

use criteria_core::config::AppConfig;
use criteria_core::error::AppError;
use criteria_core::types::OrderBy;
use criteria_model::{EntityCriteria, FilterPlan};

use crate::order_search::OrderSearch;

/// Table searched when the configuration names none.
const DEFAULT_TABLE: &str = "orders";

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config) {
        tracing::error!("Plan error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("CRITERIA_CONFIG") {
        Ok(path) => AppConfig::load_file(path),
        Err(_) => {
            let env = std::env::var("CRITERIA_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the sample criteria and print its plan
fn run(config: &AppConfig) -> Result<(), AppError> {
    let criteria = EntityCriteria::from_config(OrderSearch::default(), &config.criteria);
    if criteria.table_name().is_none() {
        criteria.set_table_name(Some(DEFAULT_TABLE));
    }
    tracing::info!("Built {criteria} with {} columns", criteria.len());

    let search = criteria.entity();
    search.customer_name.set(Some("%acme%".to_string()));
    search.status.set(vec!["open".to_string(), "held".to_string()]);
    search.created_on.set(NaiveDate::from_ymd_opt(2024, 1, 1));

    if let Some(total) = criteria.column("order_total") {
        total.set_order_by(OrderBy::Desc);
    }
    if let Some(stores) = criteria.column("store_id") {
        stores.set_enabled(false);
    }

    let plan = FilterPlan::from_criteria(&criteria);
    plan.validate()?;
    println!("{}", plan.to_json()?);

    criteria.reset_values();
    tracing::info!(
        unfiltered = FilterPlan::from_criteria(&criteria).is_unfiltered(),
        "Criteria reset"
    );
    Ok(())
}
