use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use kitchen::backend::ReferenceService;
use kitchen::config::Config;
use kitchen::controller::{Controller, LabelSink, OptionSlot};
use kitchen::kitchen::Kitchen;
use kitchen::logging::init_tracing;

/// Drive the category pipeline from stdin commands.
///
/// Commands: `a`/`1` and `b`/`2` pick an option, `s`/`submit` submits,
/// `q`/`quit` exits.
#[derive(Parser, Debug)]
#[command(name = "kitchen", version)]
struct Args {
    /// Config file (default: ~/.config/kitchen/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the startup load seed.
    #[arg(long)]
    seed: Option<String>,
    /// Override the simulated fetch latency.
    #[arg(long)]
    fetch_latency_ms: Option<u64>,
    /// Override the simulated submit latency.
    #[arg(long)]
    submit_latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select(OptionSlot),
    Submit,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "1" => Some(Command::Select(OptionSlot::A)),
        "b" | "2" => Some(Command::Select(OptionSlot::B)),
        "s" | "submit" => Some(Command::Submit),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

struct StdoutLabel;

impl LabelSink for StdoutLabel {
    fn show(&mut self, text: &str) {
        println!("{}", text);
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(seed) = &args.seed {
        config.startup.seed = seed.clone();
    }
    if let Some(ms) = args.fetch_latency_ms {
        config.backend.fetch_latency_ms = ms;
    }
    if let Some(ms) = args.submit_latency_ms {
        config.backend.submit_latency_ms = ms;
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(&args).context("loading configuration")?;

    let backend = Arc::new(ReferenceService::from(&config.backend));
    let kitchen = Kitchen::new(backend);
    let controller = Controller::start(&kitchen, &config, StdoutLabel);
    tracing::info!(
        option_a = %config.options.option_a_name,
        option_b = %config.options.option_b_name,
        "controller started"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Some(Command::Select(slot)) => controller.select(slot),
                    Some(Command::Submit) => controller.submit(),
                    Some(Command::Quit) => break,
                    None if line.trim().is_empty() => {}
                    None => eprintln!("unknown command: {}", line.trim()),
                }
            }
        }
    }

    controller.shutdown().await;
    Ok(())
}
