use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use keycalc::keymap::parse_keys;
use keycalc::{Config, DisplayConfig, Session};

/// keycalc - a keypad calculator driven by key names
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Keys to press, e.g. `7+6*2=` or `1 0 + 5 Enter`. Reads stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut session = Session::new();

    if !cli.keys.is_empty() {
        let keys = parse_keys(&cli.keys.join(" ")).context("Invalid key sequence")?;
        if keys.is_empty() {
            anyhow::bail!("No keys given. Pass keys such as `7+6*2=` or omit them to read stdin.");
        }
        session.press_all(keys);
        return print_snapshot(&session, &config.display, cli.json);
    }

    run_interactive(&mut session, &config.display, cli.json)
}

fn run_interactive(session: &mut Session, display: &DisplayConfig, json: bool) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        match parse_keys(trimmed) {
            Ok(keys) => session.press_all(keys),
            Err(err) => {
                warn!(%err, line = trimmed, "skipping line");
                eprintln!("{}", err);
                continue;
            }
        }

        print_snapshot(session, display, json)?;
    }

    Ok(())
}

fn print_snapshot(session: &Session, display: &DisplayConfig, json: bool) -> Result<()> {
    let snapshot = session.snapshot(display);
    let mut stdout = io::stdout().lock();

    if json {
        serde_json::to_writer(&mut stdout, &snapshot).context("Failed to encode snapshot")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", snapshot.to_text())?;
    }

    stdout.flush()?;
    Ok(())
}
