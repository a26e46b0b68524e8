// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! cx - cron expression expander

mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::Parser;
use cx_parser::{CronParser, ListPolicy, ParserConfig, Separator};

#[derive(Parser)]
#[command(
    name = "cx",
    version,
    about = "Expand a cron expression into the values each field fires on",
    after_help = "Example:\n  cx \"*/15, 0, 1,15, *, 1-5, /usr/bin/find\""
)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    output: OutputFormat,

    /// Field separator: comma-space or space [env: CX_SEPARATOR]
    #[arg(short = 's', long)]
    separator: Option<Separator>,

    /// Require list elements and single values to be in-domain numbers [env: CX_STRICT=1]
    #[arg(long)]
    strict: bool,

    /// The cron expression; multiple arguments are joined with a space
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Cron error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = resolve_config(&cli)?;
    let expression = cli.expression.join(" ");
    tracing::debug!(%expression, separator = %config.separator, "parsing expression");

    let schedule = CronParser::new(config).parse(&expression)?;
    print!("{}", output::render(&schedule, cli.output)?);
    Ok(())
}

/// Flags win over environment variables, which win over defaults.
fn resolve_config(cli: &Cli) -> Result<ParserConfig> {
    let separator = match cli.separator {
        Some(separator) => separator,
        None => env::separator()?.unwrap_or_default(),
    };
    let list_policy = if cli.strict || env::strict() {
        ListPolicy::Validated
    } else {
        ListPolicy::Literal
    };
    Ok(ParserConfig {
        separator,
        list_policy,
    })
}

/// Log to stderr so stdout carries only the rendered schedule.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
fn cli_command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
