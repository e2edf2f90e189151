//! lif-tui entrypoint: runs the simulation, prints the report, and optionally
//! hands the voltage trace to a visualizer (terminal chart or CSV).

mod app;
mod cli;
mod ui;
mod visualizer;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{load_config, Cli, Command, PlotMode, RunArgs, SweepArgs};
use lif_sim::{linspace, simulate, sweep_baseline, SimulationConfig};
use visualizer::{CsvWriter, TerminalChart, Visualizer};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(base: SimulationConfig, args: RunArgs) -> Result<()> {
    let mut cfg = base;
    args.model.apply(&mut cfg);

    let result = simulate(&cfg)?;
    info!(spikes = result.spike_count, rate_hz = result.firing_rate_hz, "run complete");

    match args.plot {
        PlotMode::None => println!("{}", result),
        PlotMode::Tui => {
            TerminalChart::new(cfg.threshold).visualize(&result.trace)?;
            println!("{}", result);
        }
        // Keep stdout machine-readable; the report goes to stderr.
        PlotMode::Csv => {
            eprintln!("{}", result);
            CsvWriter::new(io::stdout().lock()).visualize(&result.trace)?;
        }
    }
    Ok(())
}

fn sweep(base: SimulationConfig, args: SweepArgs) -> Result<()> {
    let mut cfg = base;
    args.model.apply(&mut cfg);

    let baselines = linspace(args.from, args.to, args.points);
    let points = sweep_baseline(&cfg, &baselines)?;

    println!("baseline spikes rate_hz");
    for p in points {
        println!("{} {} {}", p.baseline_current, p.spike_count, p.firing_rate_hz);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let base = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Run(args) => run(base, args),
        Command::Sweep(args) => sweep(base, args),
    }
}
