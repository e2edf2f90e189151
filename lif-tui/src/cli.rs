//! Command-line surface: subcommands, model flags, config file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lif_sim::SimulationConfig;

/// Single-neuron leaky integrate-and-fire simulator
#[derive(Parser, Debug)]
#[command(name = "lif-tui", version, about = "Leaky integrate-and-fire neuron driven by noisy current")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with SimulationConfig fields; flags override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate one run and report spike count and firing rate
    Run(RunArgs),
    /// Firing rate across a range of baseline currents
    Sweep(SweepArgs),
}

/// Model parameters. Unset flags keep the config file (or default) value.
#[derive(Args, Debug, Default, Clone)]
pub struct ModelArgs {
    /// Membrane capacitance
    #[arg(long, visible_alias = "C", allow_negative_numbers = true)]
    pub capacitance: Option<f64>,

    /// Leak resistance
    #[arg(long, visible_alias = "R", allow_negative_numbers = true)]
    pub resistance: Option<f64>,

    /// Baseline input current
    #[arg(long, visible_alias = "I0", allow_negative_numbers = true)]
    pub baseline: Option<f64>,

    /// Gaussian noise amplitude added to the current
    #[arg(long, visible_alias = "noiseAmp", allow_negative_numbers = true)]
    pub noise_amp: Option<f64>,

    /// RNG seed
    #[arg(long, env = "LIF_SEED")]
    pub seed: Option<u64>,

    /// Spike threshold
    #[arg(long, visible_alias = "V_th", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Absolute refractory period in steps
    #[arg(long, visible_alias = "abs_ref", allow_negative_numbers = true)]
    pub abs_ref: Option<i64>,

    /// Number of 1 ms steps
    #[arg(long, allow_negative_numbers = true)]
    pub tstop: Option<i64>,
}

impl ModelArgs {
    pub fn apply(&self, cfg: &mut SimulationConfig) {
        if let Some(c) = self.capacitance {
            cfg.capacitance = c;
        }
        if let Some(r) = self.resistance {
            cfg.resistance = r;
        }
        if let Some(i0) = self.baseline {
            cfg.baseline_current = i0;
        }
        if let Some(amp) = self.noise_amp {
            cfg.noise_amp = amp;
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(th) = self.threshold {
            cfg.threshold = th;
        }
        if let Some(abs_ref) = self.abs_ref {
            cfg.abs_ref = abs_ref;
        }
        if let Some(tstop) = self.tstop {
            cfg.tstop = tstop;
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotMode {
    /// Text report only
    #[default]
    None,
    /// Interactive terminal chart of the voltage trace
    Tui,
    /// `step,voltage` rows on stdout
    Csv,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Where to hand the voltage trace after the run
    #[arg(long, value_enum, default_value_t = PlotMode::None)]
    pub plot: PlotMode,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// First baseline current
    #[arg(long, allow_negative_numbers = true)]
    pub from: f64,

    /// Last baseline current (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,

    /// Number of evenly spaced points
    #[arg(long, default_value_t = 11)]
    pub points: usize,
}

/// Read a config file if given, otherwise start from the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing config {}", p.display()))
        }
        None => Ok(SimulationConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn spec_style_aliases_parse() {
        let cli = Cli::try_parse_from([
            "lif-tui", "run", "--C", "2", "--R", "30", "--I0", "0.5", "--noiseAmp", "0",
            "--V_th", "8", "--abs_ref", "3", "--tstop", "50", "--seed", "7",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        let mut cfg = SimulationConfig::default();
        args.model.apply(&mut cfg);
        assert_eq!(
            cfg,
            SimulationConfig {
                capacitance: 2.0,
                resistance: 30.0,
                baseline_current: 0.5,
                noise_amp: 0.0,
                threshold: 8.0,
                abs_ref: 3,
                tstop: 50,
                seed: 7,
            }
        );
        assert_eq!(args.plot, PlotMode::None);
    }

    #[test]
    fn negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["lif-tui", "run", "--tstop", "-5"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.model.tstop, Some(-5));
    }

    #[test]
    fn unset_flags_keep_file_values() {
        let mut cfg = SimulationConfig { resistance: 12.0, ..SimulationConfig::default() };
        ModelArgs { tstop: Some(9), ..ModelArgs::default() }.apply(&mut cfg);
        assert_eq!(cfg.resistance, 12.0);
        assert_eq!(cfg.tstop, 9);
    }
}
