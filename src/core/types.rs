//! Common types used across the application

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Appliance identifier: creation timestamp in milliseconds
pub type ApplianceId = i64;

/// A household appliance contributing to consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub id: ApplianceId,
    pub name: String,
    /// Power draw in watts
    pub power_watts: f64,
    /// Hours of use per day
    pub daily_hours: f64,
}

impl Appliance {
    pub fn new(id: ApplianceId, name: &str, power_watts: f64, daily_hours: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            power_watts,
            daily_hours,
        }
    }
}

/// Time resolution of the chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    /// 24 hourly buckets
    #[default]
    Daily,
    /// 7 day buckets, each scaled to a week
    Weekly,
    /// 30 day buckets, each scaled to a month
    Monthly,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Daily, ChartPeriod::Weekly, ChartPeriod::Monthly];

    /// Number of buckets in the series
    pub fn bucket_count(self) -> usize {
        match self {
            ChartPeriod::Daily => 24,
            ChartPeriod::Weekly => 7,
            ChartPeriod::Monthly => 30,
        }
    }

    /// Per-bucket scaling factor
    pub fn factor(self) -> f64 {
        match self {
            ChartPeriod::Daily => 1.0,
            ChartPeriod::Weekly => 7.0,
            ChartPeriod::Monthly => 30.0,
        }
    }

    /// Axis label of bucket `index`
    pub fn bucket_label(self, index: usize) -> String {
        match self {
            ChartPeriod::Daily => format!("{}h", index),
            ChartPeriod::Weekly | ChartPeriod::Monthly => format!("D\u{00ED}a {}", index + 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartPeriod::Daily => "daily",
            ChartPeriod::Weekly => "weekly",
            ChartPeriod::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "diario" | "day" => Ok(ChartPeriod::Daily),
            "weekly" | "semanal" | "week" => Ok(ChartPeriod::Weekly),
            "monthly" | "mensual" | "month" => Ok(ChartPeriod::Monthly),
            _ => Err(Error::UnknownPeriod(s.to_string())),
        }
    }
}

/// One slot of the chart series
///
/// Energy and cost are kept as 2-decimal strings, the way the chart consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBucket {
    pub label: String,
    pub energy_kwh: String,
    pub cost: String,
}

/// Per-appliance line of the cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceCost {
    pub id: ApplianceId,
    pub name: String,
    pub monthly_energy_kwh: f64,
    pub monthly_cost: f64,
}

/// Aggregate monthly figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumptionSummary {
    pub total_energy_kwh: f64,
    pub total_cost: f64,
    pub appliance_count: usize,
}

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
