//! Chart series derivation
//!
//! The series is a presentation artifact, not a physical usage curve. In the
//! daily view every appliance runs during its first `daily_hours` hours
//! starting at hour 0. In the weekly and monthly views every day bucket shows
//! the energy of a full week or month at the appliance's usage rate.

use super::kwh;
use crate::core::{Appliance, ChartBucket, ChartPeriod};
use crate::format::to_fixed;

/// Build the ordered bucket series for `period`
pub fn build_chart_series(appliances: &[Appliance], price_per_kwh: f64, period: ChartPeriod) -> Vec<ChartBucket> {
    let factor = period.factor();

    (0..period.bucket_count())
        .map(|index| {
            let mut energy_kwh = 0.0;
            let mut cost = 0.0;

            for appliance in appliances {
                let hours = usage_hours(appliance, period, index);
                let energy = kwh(appliance.power_watts, hours * factor);
                energy_kwh += energy;
                cost += energy * price_per_kwh;
            }

            ChartBucket {
                label: period.bucket_label(index),
                energy_kwh: to_fixed(energy_kwh, 2),
                cost: to_fixed(cost, 2),
            }
        })
        .collect()
}

fn usage_hours(appliance: &Appliance, period: ChartPeriod, index: usize) -> f64 {
    match period {
        ChartPeriod::Daily => {
            if (index as f64) < appliance.daily_hours {
                1.0
            } else {
                0.0
            }
        }
        ChartPeriod::Weekly | ChartPeriod::Monthly => appliance.daily_hours,
    }
}
