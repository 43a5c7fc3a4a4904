use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lowpayout::config::{AppConfig, ConfigManager};
use lowpayout::data::load_tickets;
use lowpayout::engines::search::{ConsoleProgressCallback, Optimizer};
use lowpayout::report::{export_csv, export_json, group_thousands, render_table, Report};

#[derive(Parser)]
#[command(name = "lowpayout", about = "Low-payout 7-number combination optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for combos whose payout stays below the pool's ticket cost
    Run {
        /// Ticket file (.csv or .xlsx), one ticket per row in column A (e.g. "1,2,3,4,5,6,7")
        #[arg(short, long)]
        tickets: PathBuf,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum number of restarts
        #[arg(long)]
        restarts: Option<usize>,

        /// Wall-clock budget in seconds
        #[arg(long)]
        time_budget: Option<u64>,

        /// Number of results to keep
        #[arg(long)]
        top_k: Option<usize>,

        /// Climb restarts in parallel
        #[arg(long)]
        parallel: bool,

        /// Keep each combo only once
        #[arg(long)]
        dedupe: bool,

        /// Write results as CSV
        #[arg(long)]
        csv_out: Option<PathBuf>,

        /// Write the full report as JSON
        #[arg(long)]
        json_out: Option<PathBuf>,
    },

    /// Write the default configuration as TOML
    InitConfig {
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            tickets,
            config,
            seed,
            restarts,
            time_budget,
            top_k,
            parallel,
            dedupe,
            csv_out,
            json_out,
        } => {
            let manager = ConfigManager::new();
            manager
                .load(config.as_deref())
                .context("loading configuration")?;
            manager.update(|c: &mut AppConfig| {
                if seed.is_some() {
                    c.search.seed = seed;
                }
                if let Some(n) = restarts {
                    c.search.restart_budget = n;
                }
                if let Some(s) = time_budget {
                    c.search.time_budget_secs = s;
                }
                if let Some(k) = top_k {
                    c.search.top_k = k;
                }
                c.search.parallel |= parallel;
                c.search.dedupe |= dedupe;
            })?;
            let app_config = manager.get();

            let load = load_tickets(&tickets)
                .with_context(|| format!("reading tickets from {}", tickets.display()))?;
            if load.pool.is_empty() {
                log::warn!(
                    "No valid tickets in {} ({} rows read); nothing can be accepted",
                    tickets.display(),
                    load.rows_read
                );
            }
            println!(
                "Loaded {} valid tickets ({} rejected). Total ticket cost = {} {}",
                load.valid_count(),
                load.rejected.len(),
                group_thousands(load.pool.total_price(app_config.payout.unit_price)),
                app_config.payout.currency
            );

            let currency = app_config.payout.currency.clone();
            let optimizer = Optimizer::new(app_config)?;
            let summary = optimizer.run(&load.pool, ConsoleProgressCallback::default());
            let report = Report::from_summary(&summary, &currency);

            print!("{}", render_table(&report));

            if let Some(path) = csv_out {
                export_csv(&report, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
            if let Some(path) = json_out {
                export_json(&report, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Command::InitConfig { path } => {
            ConfigManager::new()
                .save_to_file(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}
