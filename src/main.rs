//! Appliance cost calculator - Main entry point
//!
//! Interactive terminal front end: reads one command per line, applies it to
//! the application state, and prints the refreshed view.

use anyhow::Context;
use appliance_cost_lib::commands::{run_line, Outcome};
use appliance_cost_lib::core::Config;
use appliance_cost_lib::i18n::I18n;
use appliance_cost_lib::render;
use appliance_cost_lib::state::AppState;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    country: Option<String>,
    language: Option<String>,
}

fn print_usage() {
    eprintln!("Usage: appliance-cost [--config <path>] [--country <code>] [--lang <es|en>]");
}

fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut i = 0usize;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("missing value for --config (expected a file path)")?;
                options.config = Some(PathBuf::from(path));
            }
            "--country" => {
                i += 1;
                let code = args.get(i).ok_or("missing value for --country (expected a country code)")?;
                options.country = Some(code.clone());
            }
            "--lang" => {
                i += 1;
                let lang = args.get(i).ok_or("missing value for --lang (expected es or en)")?;
                options.language = Some(lang.clone());
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args_from(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        print_usage();
        std::process::exit(2);
    });

    log::info!("Starting appliance-cost v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        }),
    };
    if let Some(country) = options.country {
        config.general.country = country;
    }
    if let Some(language) = options.language {
        config.general.language = language;
    }

    let mut state = AppState::from_config(&config).context("invalid startup configuration")?;
    let mut i18n = I18n::new(&config.general.language);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", i18n.get("app.title"))?;
    writeln!(out, "{}", render::render_dashboard(&state, &i18n))?;
    writeln!(out, "{}", i18n.get("app.help_hint"))?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match run_line(&line, &mut state, &mut i18n) {
            Ok(Outcome::Output(text)) if text.is_empty() => {}
            Ok(Outcome::Output(text)) => writeln!(out, "{}", text)?,
            Ok(Outcome::Quit) => break,
            Err(e) => writeln!(out, "{}: {}", i18n.get("app.error"), e)?,
        }
    }

    writeln!(out, "{}", i18n.get("app.goodbye"))?;
    Ok(())
}
