use std::path::PathBuf;

use clap::Parser;
use crashmirror::{build_console, build_sink, pump::pump};
use crashmirror_console::MirroredConsole;
use crashmirror_core::{config::Config, Severity};

#[derive(Parser)]
#[command(
    name = "crashmirror",
    about = "Mirror stdin log values into a crash reporting sink"
)]
struct Cli {
    /// Console method every input line is logged through (error, log, warn, info).
    #[arg(long, short, default_value = "log")]
    method: Severity,
    /// Append tagged lines to this file instead of the configured sink.
    #[arg(long)]
    sink_file: Option<PathBuf>,
    /// Read configuration from this file instead of ~/.config/crashmirror/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write debug logs to /tmp/crashmirror-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/crashmirror-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("crashmirror debug log started — tail -f /tmp/crashmirror-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config unreadable, using defaults");
            Config::defaults()
        }),
    };

    let sink = build_sink(&config, cli.sink_file.as_deref())?;
    let mirror = MirroredConsole::install(build_console(&config), sink)?;

    pump(std::io::stdin().lock(), &mirror, cli.method)?;
    Ok(())
}
