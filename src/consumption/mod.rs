//! Consumption and cost engine
//!
//! Pure functions over a list of appliances and a price per kWh. Energy is
//! modeled as a fixed 30-day month with constant daily usage. Nothing here
//! rounds; rounding is left to display code.

mod chart;

pub use chart::build_chart_series;

use crate::core::{Appliance, ApplianceCost, ConsumptionSummary};

/// Days in the modeled month
pub const DAYS_PER_MONTH: f64 = 30.0;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Monthly energy in kWh: `power_watts * daily_hours * 30 / 1000`
pub fn monthly_energy_kwh(appliance: &Appliance) -> f64 {
    appliance.power_watts * appliance.daily_hours * DAYS_PER_MONTH / WATTS_PER_KILOWATT
}

/// Monthly cost in the tariff currency
pub fn monthly_cost(appliance: &Appliance, price_per_kwh: f64) -> f64 {
    monthly_energy_kwh(appliance) * price_per_kwh
}

pub fn total_monthly_energy_kwh(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(monthly_energy_kwh).sum()
}

pub fn total_monthly_cost(appliances: &[Appliance], price_per_kwh: f64) -> f64 {
    appliances.iter().map(|a| monthly_cost(a, price_per_kwh)).sum()
}

/// Per-appliance energy and cost, in list order
pub fn cost_breakdown(appliances: &[Appliance], price_per_kwh: f64) -> Vec<ApplianceCost> {
    appliances
        .iter()
        .map(|a| ApplianceCost {
            id: a.id,
            name: a.name.clone(),
            monthly_energy_kwh: monthly_energy_kwh(a),
            monthly_cost: monthly_cost(a, price_per_kwh),
        })
        .collect()
}

pub fn summarize(appliances: &[Appliance], price_per_kwh: f64) -> ConsumptionSummary {
    ConsumptionSummary {
        total_energy_kwh: total_monthly_energy_kwh(appliances),
        total_cost: total_monthly_cost(appliances, price_per_kwh),
        appliance_count: appliances.len(),
    }
}

pub(crate) fn kwh(power_watts: f64, hours: f64) -> f64 {
    power_watts * hours / WATTS_PER_KILOWATT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn household() -> Vec<Appliance> {
        vec![
            Appliance::new(1, "Horno", 2000.0, 3.0),
            Appliance::new(2, "Nevera", 150.0, 24.0),
            Appliance::new(3, "Televisor", 100.0, 4.5),
        ]
    }

    #[test]
    fn test_monthly_energy() {
        let oven = Appliance::new(1, "Horno", 2000.0, 3.0);
        assert_eq!(monthly_energy_kwh(&oven), 180.0);
        assert!(approx(monthly_cost(&oven, 0.15), 27.0));
    }

    #[test]
    fn test_zero_values() {
        let idle = Appliance::new(1, "Cargador", 0.0, 10.0);
        assert_eq!(monthly_energy_kwh(&idle), 0.0);
        let unused = Appliance::new(2, "Taladro", 800.0, 0.0);
        assert_eq!(monthly_cost(&unused, 0.15), 0.0);
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(total_monthly_energy_kwh(&[]), 0.0);
        assert_eq!(total_monthly_cost(&[], 0.15), 0.0);
        assert_eq!(summarize(&[], 0.15), ConsumptionSummary::default());
    }

    #[test]
    fn test_totals_are_sums() {
        let appliances = household();
        // 180 + 108 + 13.5
        assert!(approx(total_monthly_energy_kwh(&appliances), 301.5));
        assert!(approx(
            total_monthly_cost(&appliances, 0.15),
            total_monthly_energy_kwh(&appliances) * 0.15
        ));

        let mut reversed = appliances.clone();
        reversed.reverse();
        assert!(approx(
            total_monthly_energy_kwh(&reversed),
            total_monthly_energy_kwh(&appliances)
        ));
    }

    #[test]
    fn test_breakdown_follows_list_order() {
        let rows = cost_breakdown(&household(), 0.2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Horno");
        assert!(approx(rows[0].monthly_cost, 36.0));
        assert_eq!(rows[1].id, 2);
        assert!(approx(rows[1].monthly_energy_kwh, 108.0));
        assert!(approx(rows[2].monthly_energy_kwh, 13.5));
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&household(), 0.15);
        assert_eq!(summary.appliance_count, 3);
        assert!(approx(summary.total_energy_kwh, 301.5));
        assert!(approx(summary.total_cost, 45.225));
    }

    #[test]
    fn test_idempotent() {
        let appliances = household();
        assert_eq!(summarize(&appliances, 0.15), summarize(&appliances, 0.15));
        assert_eq!(cost_breakdown(&appliances, 0.15), cost_breakdown(&appliances, 0.15));
    }
}
