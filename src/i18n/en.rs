//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Electricity Consumption Calculator".into());
    t.insert("app.help_hint".into(), "Type 'help' to list the commands".into());
    t.insert("app.goodbye".into(), "Bye".into());
    t.insert("app.error".into(), "Error".into());

    // Regional settings
    t.insert("region.title".into(), "Regional Settings".into());
    t.insert("region.country".into(), "Country".into());
    t.insert("region.currency".into(), "Currency".into());
    t.insert("region.tariff".into(), "Electricity tariff (per kWh)".into());
    t.insert("region.default_tariff".into(), "Average tariff".into());
    t.insert("region.manual".into(), "manual".into());

    // Appliance form
    t.insert("form.add".into(), "Add Appliance".into());
    t.insert("form.edit".into(), "Edit Appliance".into());
    t.insert("form.added".into(), "Appliance added".into());
    t.insert("form.saved".into(), "Changes saved".into());
    t.insert("form.cancelled".into(), "Edit cancelled".into());
    t.insert("form.deleted".into(), "Appliance deleted".into());
    t.insert("form.editing_hint".into(), "Use 'save <name> <watts> <hours>' to store the changes or 'cancel' to discard them".into());

    // Appliance list
    t.insert("list.title".into(), "Appliance List".into());
    t.insert("list.id".into(), "Id".into());
    t.insert("list.name".into(), "Name".into());
    t.insert("list.power".into(), "Power (W)".into());
    t.insert("list.hours".into(), "Daily hours".into());
    t.insert("list.monthly_energy".into(), "Monthly consumption (kWh)".into());
    t.insert("list.monthly_cost".into(), "Monthly cost".into());
    t.insert("list.empty".into(), "No appliances yet".into());

    // Summary
    t.insert("summary.title".into(), "Consumption Summary".into());
    t.insert("summary.total_energy".into(), "Total Monthly Consumption".into());
    t.insert("summary.total_cost".into(), "Estimated Monthly Cost".into());

    // Breakdown
    t.insert("breakdown.title".into(), "Cost Breakdown per Appliance".into());
    t.insert("breakdown.appliance".into(), "Appliance".into());
    t.insert("breakdown.monthly_cost".into(), "Monthly Cost".into());

    // Chart
    t.insert("chart.title".into(), "Consumption and Cost Charts".into());
    t.insert("chart.period".into(), "Period".into());
    t.insert("chart.period.daily".into(), "Daily".into());
    t.insert("chart.period.weekly".into(), "Weekly".into());
    t.insert("chart.period.monthly".into(), "Monthly".into());
    t.insert("chart.energy".into(), "Consumption (kWh)".into());
    t.insert("chart.cost".into(), "Cost".into());

    // Theme
    t.insert("theme.title".into(), "Theme".into());
    t.insert("theme.light".into(), "Light".into());
    t.insert("theme.dark".into(), "Dark".into());

    // Language
    t.insert("lang.title".into(), "Language".into());

    // Help
    t.insert("help.commands".into(), [
        "Commands:",
        "  add <name> <watts> <hours>    Add an appliance",
        "  edit <id>                     Load an appliance into the form",
        "  save <name> <watts> <hours>   Save the appliance being edited",
        "  cancel                        Discard the current edit",
        "  delete <id>                   Remove an appliance",
        "  list                          Show the appliance list",
        "  summary                       Show monthly totals",
        "  breakdown                     Show the cost per appliance",
        "  chart [daily|weekly|monthly]  Draw the consumption chart",
        "  export                        Print the chart series as JSON",
        "  country [<code>]              List countries or select one",
        "  tariff <price>                Set the price per kWh",
        "  theme                         Toggle light/dark theme",
        "  lang <es|en>                  Change language",
        "  quit                          Exit",
    ].join("\n"));

    t
}
