//! Terminal rendering of the calculator views

use crate::core::{ChartBucket, Theme};
use crate::format::{format_kwh, group_thousands, to_fixed, CurrencyFormatter};
use crate::i18n::I18n;
use crate::state::{AppState, FormMode};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use std::fmt::Write;

const CHART_WIDTH: usize = 30;

fn heading(theme: Theme, title: &str) -> String {
    match theme {
        Theme::Light => format!("{}\n{}\n", title, "=".repeat(title.chars().count())),
        Theme::Dark => {
            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
            table.enforce_styling();
            table.set_header(vec![Cell::new(title).add_attribute(Attribute::Bold).fg(Color::White)]);
            format!("{}\n", table)
        }
    }
}

/// Bordered table; the dark theme adds bold cyan headers
fn new_table(theme: Theme, header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    let header: Vec<Cell> = match theme {
        Theme::Light => header.into_iter().map(Cell::new).collect(),
        Theme::Dark => {
            table.enforce_styling();
            header
                .into_iter()
                .map(|title| Cell::new(title).add_attribute(Attribute::Bold).fg(Color::Cyan))
                .collect()
        }
    };
    table.set_header(header);
    table
}

fn number(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).set_alignment(CellAlignment::Right)
}

/// Money column, green in the dark theme
fn money(theme: Theme, formatter: &CurrencyFormatter, value: f64) -> Cell {
    let cell = number(formatter.format(value));
    match theme {
        Theme::Light => cell,
        Theme::Dark => cell.fg(Color::Green),
    }
}

/// Country, currency and tariff
pub fn render_region(state: &AppState, i18n: &I18n) -> String {
    let tariff = state.tariff();
    let country_name = state
        .pricing()
        .current_country()
        .map(|c| c.display_name.clone())
        .unwrap_or_else(|| tariff.country_code.clone());
    let manual = if state.pricing().is_manual_rate() {
        format!(" ({})", i18n.get("region.manual"))
    } else {
        String::new()
    };

    let mut out = heading(state.theme(), &i18n.get("region.title"));
    let _ = writeln!(out, "{}: {} ({})", i18n.get("region.country"), country_name, tariff.country_code);
    let _ = writeln!(out, "{}: {}", i18n.get("region.currency"), tariff.currency_code);
    let _ = writeln!(out, "{}: {}{}", i18n.get("region.tariff"), state.tariff_input(), manual);
    out
}

/// Appliance list with monthly figures
pub fn render_list(state: &AppState, i18n: &I18n) -> String {
    let mut out = heading(state.theme(), &i18n.get("list.title"));
    if state.appliances().is_empty() {
        let _ = writeln!(out, "{}", i18n.get("list.empty"));
        return out;
    }

    let theme = state.theme();
    let formatter = state.formatter();
    let mut table = new_table(
        theme,
        vec![
            i18n.get("list.name"),
            i18n.get("list.id"),
            i18n.get("list.power"),
            i18n.get("list.hours"),
            i18n.get("list.monthly_energy"),
            i18n.get("list.monthly_cost"),
        ],
    );
    for (appliance, line) in state.appliances().iter().zip(state.breakdown()) {
        table.add_row(vec![
            Cell::new(&appliance.name),
            number(appliance.id),
            number(appliance.power_watts),
            number(appliance.daily_hours),
            number(to_fixed(line.monthly_energy_kwh, 2)),
            money(theme, &formatter, line.monthly_cost),
        ]);
    }

    let _ = writeln!(out, "{}", table);
    out
}

/// Pre-filled form while editing
pub fn render_form(state: &AppState, i18n: &I18n) -> String {
    let form = state.form();
    let title = match form.mode {
        FormMode::Idle => i18n.get("form.add"),
        FormMode::Editing(id) => format!("{} #{}", i18n.get("form.edit"), id),
    };

    let mut out = heading(state.theme(), &title);
    let _ = writeln!(out, "{}: {}", i18n.get("list.name"), form.name);
    let _ = writeln!(out, "{}: {}", i18n.get("list.power"), form.power_watts);
    let _ = writeln!(out, "{}: {}", i18n.get("list.hours"), form.daily_hours);
    if matches!(form.mode, FormMode::Editing(_)) {
        let _ = writeln!(out, "{}", i18n.get("form.editing_hint"));
    }
    out
}

/// Monthly totals
pub fn render_summary(state: &AppState, i18n: &I18n) -> String {
    let summary = state.summary();
    let mut out = heading(state.theme(), &i18n.get("summary.title"));
    let _ = writeln!(out, "{}: {}", i18n.get("summary.total_energy"), format_kwh(summary.total_energy_kwh));
    let _ = writeln!(out, "{}: {}", i18n.get("summary.total_cost"), state.formatter().format(summary.total_cost));
    out
}

/// Cost per appliance
pub fn render_breakdown(state: &AppState, i18n: &I18n) -> String {
    let mut out = heading(state.theme(), &i18n.get("breakdown.title"));
    let rows = state.breakdown();
    if rows.is_empty() {
        let _ = writeln!(out, "{}", i18n.get("list.empty"));
        return out;
    }

    let theme = state.theme();
    let formatter = state.formatter();
    let mut table = new_table(theme, vec![i18n.get("breakdown.appliance"), i18n.get("breakdown.monthly_cost")]);
    for row in &rows {
        table.add_row(vec![Cell::new(&row.name), money(theme, &formatter, row.monthly_cost)]);
    }
    let _ = writeln!(out, "{}", table);
    out
}

/// Bar chart of the current period's series
pub fn render_chart(state: &AppState, i18n: &I18n) -> String {
    let period = state.chart_period();
    let title = format!(
        "{} - {}",
        i18n.get("chart.title"),
        i18n.get(&format!("chart.period.{}", period.as_str()))
    );
    let mut out = heading(state.theme(), &title);
    let table = chart_table(&state.chart_series(), state.theme(), &state.formatter(), i18n);
    let _ = writeln!(out, "{}", table);
    out
}

fn chart_table(series: &[ChartBucket], theme: Theme, formatter: &CurrencyFormatter, i18n: &I18n) -> Table {
    let values: Vec<f64> = series
        .iter()
        .map(|b| b.energy_kwh.parse::<f64>().unwrap_or(0.0))
        .collect();
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    let mut table = new_table(
        theme,
        vec![i18n.get("chart.period"), String::new(), i18n.get("chart.energy"), i18n.get("chart.cost")],
    );
    for (bucket, value) in series.iter().zip(values) {
        let len = if max > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = Cell::new("#".repeat(len));
        let bar = match theme {
            Theme::Light => bar,
            Theme::Dark => bar.fg(Color::Yellow),
        };
        // Bucket costs are already rounded to cents
        let cost = bucket.cost.parse::<f64>().unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(&bucket.label),
            bar,
            number(&bucket.energy_kwh),
            money(theme, formatter, cost),
        ]);
    }
    table
}

/// Known countries with their average tariffs
pub fn render_countries(state: &AppState, i18n: &I18n) -> String {
    let theme = state.theme();
    let current = &state.tariff().country_code;
    let mut table = new_table(
        theme,
        vec![
            String::new(),
            i18n.get("region.country"),
            String::new(),
            i18n.get("region.currency"),
            i18n.get("region.default_tariff"),
        ],
    );
    for country in state.pricing().countries().iter() {
        let selected = &country.code == current;
        let code = Cell::new(&country.code);
        let code = match theme {
            Theme::Dark if selected => code.add_attribute(Attribute::Bold),
            _ => code,
        };
        table.add_row(vec![
            Cell::new(if selected { "*" } else { "" }),
            code,
            Cell::new(&country.display_name),
            Cell::new(&country.currency_code),
            number(group_thousands(country.default_tariff, 2)),
        ]);
    }

    let mut out = heading(theme, &i18n.get("region.title"));
    let _ = writeln!(out, "{}", table);
    out
}

/// Everything the main view shows at once
pub fn render_dashboard(state: &AppState, i18n: &I18n) -> String {
    [
        render_region(state, i18n),
        render_list(state, i18n),
        render_summary(state, i18n),
    ]
    .join("\n")
}
