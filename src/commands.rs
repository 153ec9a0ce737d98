//! Command language of the interactive front end
//!
//! Each input line parses into a [`Command`], which is then applied to the
//! [`AppState`]. Executing a command returns the text to show the user.

use crate::core::{ApplianceId, ChartPeriod, Error, Result, Theme};
use crate::i18n::I18n;
use crate::render;
use crate::state::{AppState, FormMode};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill the form and submit it (append, or replace while editing)
    Submit { name: String, power_watts: String, daily_hours: String },
    Edit(ApplianceId),
    Cancel,
    Delete(ApplianceId),
    List,
    Summary,
    Breakdown,
    Chart(Option<ChartPeriod>),
    Export,
    Countries,
    Country(String),
    Tariff(String),
    Theme,
    Language(String),
    Help,
    Quit,
}

/// What the front end should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Output(String),
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or("").to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match keyword.as_str() {
            "add" | "save" => {
                let [name @ .., power_watts, daily_hours] = args.as_slice() else {
                    return Err(Error::invalid_input("command", line.trim(), "expected <name> <watts> <hours>"));
                };
                Command::Submit {
                    name: name.join(" "),
                    power_watts: power_watts.to_string(),
                    daily_hours: daily_hours.to_string(),
                }
            }
            "edit" => Command::Edit(parse_id(&args)?),
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(parse_id(&args)?),
            "list" | "ls" => Command::List,
            "summary" => Command::Summary,
            "breakdown" => Command::Breakdown,
            "chart" => match args.first() {
                Some(period) => Command::Chart(Some(period.parse()?)),
                None => Command::Chart(None),
            },
            "export" => Command::Export,
            "country" => match args.first() {
                Some(code) => Command::Country(code.to_string()),
                None => Command::Countries,
            },
            "tariff" => Command::Tariff(args.join(" ")),
            "theme" => Command::Theme,
            "lang" => match args.first() {
                Some(lang) => Command::Language(lang.to_string()),
                None => return Err(Error::invalid_input("lang", "", "expected es or en")),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(Error::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn parse_id(args: &[&str]) -> Result<ApplianceId> {
    let text = args.first().copied().unwrap_or("");
    text.parse()
        .map_err(|_| Error::invalid_input("id", text, "expected an appliance id"))
}

impl Command {
    /// Apply the command to the state and render its result
    pub fn execute(self, state: &mut AppState, i18n: &mut I18n) -> Result<Outcome> {
        let output = match self {
            Command::Submit { name, power_watts, daily_hours } => {
                let editing = matches!(state.form().mode, FormMode::Editing(_));
                state.set_form(&name, &power_watts, &daily_hours);
                let id = state.submit_form()?;
                let message = if editing { i18n.get("form.saved") } else { i18n.get("form.added") };
                format!("{} (#{})\n\n{}", message, id, render::render_summary(state, i18n))
            }
            Command::Edit(id) => {
                state.begin_edit(id)?;
                render::render_form(state, i18n)
            }
            Command::Cancel => {
                state.cancel_edit();
                i18n.get("form.cancelled")
            }
            Command::Delete(id) => {
                let removed = state.delete(id)?;
                format!(
                    "{}: {}\n\n{}",
                    i18n.get("form.deleted"),
                    removed.name,
                    render::render_summary(state, i18n)
                )
            }
            Command::List => render::render_list(state, i18n),
            Command::Summary => render::render_summary(state, i18n),
            Command::Breakdown => render::render_breakdown(state, i18n),
            Command::Chart(period) => {
                if let Some(period) = period {
                    state.set_chart_period(period);
                }
                render::render_chart(state, i18n)
            }
            Command::Export => serde_json::to_string_pretty(&state.chart_series())
                .map_err(|e| Error::Serialization(e.to_string()))?,
            Command::Countries => render::render_countries(state, i18n),
            Command::Country(code) => {
                state.select_country(&code)?;
                render::render_region(state, i18n)
            }
            Command::Tariff(text) => {
                state.set_tariff_input(&text)?;
                render::render_region(state, i18n)
            }
            Command::Theme => {
                let theme = state.toggle_theme();
                format!("{}: {}", i18n.get("theme.title"), i18n.get(&format!("theme.{}", theme_key(theme))))
            }
            Command::Language(lang) => {
                let supported = I18n::available_languages()
                    .iter()
                    .any(|(code, _)| code.eq_ignore_ascii_case(&lang));
                if !supported {
                    return Err(Error::invalid_input("lang", &lang, "expected es or en"));
                }
                i18n.set_language(&lang);
                format!("{}: {}", i18n.get("lang.title"), i18n.current_language())
            }
            Command::Help => i18n.get("help.commands"),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }
}

fn theme_key(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

/// Parse and execute one input line. Blank lines produce no output.
pub fn run_line(line: &str, state: &mut AppState, i18n: &mut I18n) -> Result<Outcome> {
    if line.trim().is_empty() {
        return Ok(Outcome::Output(String::new()));
    }
    let command: Command = line.parse()?;
    log::debug!("Executing {:?}", command);
    command.execute(state, i18n)
}
