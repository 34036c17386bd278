//! sysreport - Host system information report
//!
//! Reports OS, CPU, and GPU identification strings, either on a local
//! single-page web UI or straight to the terminal. GPU detection shells out
//! to `nvidia-smi` and `rocm-smi` with a fixed fallback chain; the report
//! always renders, degrading to placeholder text when tools are missing.

mod api_routes;
mod config;
mod report;
mod server;

use crate::config::Config;
use crate::report::SystemReport;
use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

/// sysreport - Report your host OS, CPU, and GPU
#[derive(Parser)]
#[command(name = "sysreport")]
#[command(version)]
#[command(about = "Report host OS, CPU, and GPU information on a single-page web UI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI (default)
    Ui {
        /// Port to run the server on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not auto-open the browser
        #[arg(long, default_value_t = false)]
        no_open: bool,
    },

    /// Print the system report to the terminal
    Detect {
        /// Emit the report as pretty-printed JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show configuration path and current values
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    match cli.command {
        Some(Commands::Ui { port, no_open }) => {
            let port = port.unwrap_or(config.ui.port);
            let open_browser = config.ui.open_browser && !no_open;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start_server(port, open_browser))?;
        }
        None => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start_server(config.ui.port, config.ui.open_browser))?;
        }
        Some(Commands::Detect { json }) => {
            let report = SystemReport::collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Some(Commands::Config) => {
            // Writes the default file on first run so users have something
            // to edit.
            let config = Config::init()?;
            println!(
                "{} {}",
                "Config file:".bright_cyan(),
                Config::config_path()?.display()
            );
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_report(report: &SystemReport) {
    println!("{}", "System Information".bright_cyan().bold());
    for (title, record) in report.sections() {
        println!("\n{}", title.bright_yellow());
        for entry in record.iter() {
            println!("  {}: {}", entry.label.bold(), entry.value);
        }
    }
}
