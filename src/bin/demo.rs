//! Appliance cost calculator - Demo CLI
//!
//! Builds a sample household and walks through every view: list, summary,
//! breakdown, the three chart periods, an edit, a delete, and a country switch.

use appliance_cost_lib::core::{ChartPeriod, Config};
use appliance_cost_lib::i18n::I18n;
use appliance_cost_lib::render;
use appliance_cost_lib::state::AppState;

const HOUSEHOLD: [(&str, &str, &str); 5] = [
    ("Nevera", "150", "24"),
    ("Lavadora", "500", "1"),
    ("Horno", "2000", "1.5"),
    ("Televisor", "100", "4"),
    ("Aire acondicionado", "1200", "6"),
];

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let lang = std::env::args().nth(1).unwrap_or_else(|| "es".to_string());
    let i18n = I18n::new(&lang);
    let mut state = AppState::from_config(&Config::default())?;

    println!("==============================================");
    println!("   {}", i18n.get("app.title"));
    println!("==============================================\n");

    // 1. Fill the appliance list
    println!("[1/5] {}...\n", i18n.get("form.add"));
    for (name, watts, hours) in HOUSEHOLD {
        state.set_form(name, watts, hours);
        let id = state.submit_form()?;
        println!("      {} #{}: {}", i18n.get("form.added"), id, name);
    }
    println!();
    println!("{}", render::render_dashboard(&state, &i18n));
    println!("{}", render::render_breakdown(&state, &i18n));

    // 2. Charts for every period
    println!("[2/5] {}...\n", i18n.get("chart.title"));
    for period in ChartPeriod::ALL {
        state.set_chart_period(period);
        println!("{}", render::render_chart(&state, &i18n));
    }

    // 3. Edit the oven: shorter usage
    println!("[3/5] {}...\n", i18n.get("form.edit"));
    if let Some(oven) = state.appliances().iter().find(|a| a.name == "Horno").map(|a| a.id) {
        state.begin_edit(oven)?;
        print!("{}", render::render_form(&state, &i18n));
        state.set_form("Horno", "2000", "0.5");
        state.submit_form()?;
        println!("      {}\n", i18n.get("form.saved"));
    }

    // 4. Drop the air conditioning
    println!("[4/5] {}...\n", i18n.get("form.deleted"));
    if let Some(ac) = state.appliances().last().map(|a| a.id) {
        let removed = state.delete(ac)?;
        println!("      {}: {}\n", i18n.get("form.deleted"), removed.name);
    }
    println!("{}", render::render_summary(&state, &i18n));

    // 5. Same household priced in every country
    println!("[5/5] {}...\n", i18n.get("region.title"));
    let codes: Vec<String> = state.pricing().countries().iter().map(|c| c.code.clone()).collect();
    for code in codes {
        state.select_country(&code)?;
        let summary = state.summary();
        println!(
            "      {:<3} {:>16}  {}",
            code,
            state.formatter().format(summary.total_cost),
            appliance_cost_lib::format::format_kwh(summary.total_energy_kwh)
        );
    }

    println!("\n==============================================\n");
    Ok(())
}
