//! Whole-run driver that composes lif-core with seeded noise.
//!
//! Semantics:
//! - validation runs once, before any noise is drawn or any step is taken
//! - the stepping loop itself cannot fail
//! - identical (config, seed) gives a bit-identical RunResult

use std::fmt;

use lif_core::{compose, Integrator};
use log::debug;

use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::noise::{GaussianNoise, NoiseGenerator};

/// Artifacts of one completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Potential after each step; `trace.len() == tstop`.
    pub trace: Vec<f64>,
    /// Step indices of emitted spikes, strictly ascending.
    pub spike_times: Vec<u64>,
    pub spike_count: usize,
    pub firing_rate_hz: f64,
    /// Mean inter-spike interval in steps (ms); `None` with fewer than two spikes.
    pub mean_isi: Option<f64>,
    /// Driving current that produced the trace.
    pub current: Vec<f64>,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "spikes: {}", self.spike_count)?;
        writeln!(f, "rate_hz: {}", self.firing_rate_hz)?;
        match self.mean_isi {
            Some(isi) => write!(f, "mean_isi_ms: {:.3}", isi),
            None => write!(f, "mean_isi_ms: n/a"),
        }
    }
}

/// Run with the config's seeded Gaussian noise.
pub fn simulate(config: &SimulationConfig) -> SimResult<RunResult> {
    let mut noise = GaussianNoise::new(config.seed);
    simulate_with(config, &mut noise)
}

/// Run with an injected noise source. The config's seed is ignored.
pub fn simulate_with<N: NoiseGenerator + ?Sized>(
    config: &SimulationConfig,
    noise: &mut N,
) -> SimResult<RunResult> {
    let cfg = config.validate()?;
    debug!(
        "simulating {} steps (tau={}, threshold={}, seed={})",
        cfg.steps,
        cfg.membrane.tau(),
        cfg.membrane.threshold,
        cfg.seed
    );

    let samples = noise.sample(cfg.steps);
    let current = compose(cfg.baseline_current, &samples, cfg.noise_amp);

    let mut integ = Integrator::with_capacity(cfg.membrane, cfg.steps);
    integ.run(&current);
    let (trace, stats) = integ.finish();

    let firing_rate_hz = stats.firing_rate_hz(cfg.steps)?;
    let mean_isi = stats.mean_isi();
    let spike_count = stats.spike_count();
    debug!("run finished: {} spikes, {} Hz", spike_count, firing_rate_hz);

    Ok(RunResult {
        trace,
        spike_times: stats.into_spike_times(),
        spike_count,
        firing_rate_hz,
        mean_isi,
        current,
    })
}
