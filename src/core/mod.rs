//! Core module - Configuration, errors, input validation, and common types

mod config;
mod error;
pub mod input;
mod types;

pub use config::{Config, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{Appliance, ApplianceCost, ApplianceId, ChartBucket, ChartPeriod, ConsumptionSummary, Theme};
