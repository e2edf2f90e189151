//! f–I sweeps: one independent run per baseline current.
//!
//! Runs share nothing, so with the "parallel" feature they go to the rayon
//! pool. Output order always matches input order.

use log::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::SimResult;
use crate::simulate::simulate;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    pub baseline_current: f64,
    pub spike_count: usize,
    pub firing_rate_hz: f64,
}

fn run_point(base: &SimulationConfig, baseline_current: f64) -> SimResult<SweepPoint> {
    let cfg = SimulationConfig { baseline_current, ..base.clone() };
    let result = simulate(&cfg)?;
    Ok(SweepPoint {
        baseline_current,
        spike_count: result.spike_count,
        firing_rate_hz: result.firing_rate_hz,
    })
}

/// Simulate `base` once per entry of `baselines`, replacing only the baseline current.
pub fn sweep_baseline(base: &SimulationConfig, baselines: &[f64]) -> SimResult<Vec<SweepPoint>> {
    // Fail fast on the shared parameters before fanning out.
    base.validate()?;

    #[cfg(feature = "parallel")]
    let points: SimResult<Vec<SweepPoint>> =
        baselines.par_iter().map(|&i0| run_point(base, i0)).collect();
    #[cfg(not(feature = "parallel"))]
    let points: SimResult<Vec<SweepPoint>> =
        baselines.iter().map(|&i0| run_point(base, i0)).collect();

    let points = points?;
    info!("sweep finished: {} points", points.len());
    Ok(points)
}

/// `n` evenly spaced values from `from` to `to` inclusive.
pub fn linspace(from: f64, to: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (n - 1) as f64;
            (0..n).map(|k| from + step * k as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn quiet() -> SimulationConfig {
        SimulationConfig { noise_amp: 0.0, tstop: 200, ..SimulationConfig::default() }
    }

    #[test]
    fn rate_grows_with_current() {
        let points = sweep_baseline(&quiet(), &[0.1, 0.2, 1.0, 2.0]).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].spike_count, 0);
        assert_eq!(points[1].spike_count, 0);
        assert!(points[2].spike_count > 0);
        assert!(points[3].firing_rate_hz >= points[2].firing_rate_hz);
    }

    #[test]
    fn preserves_input_order() {
        let baselines = [2.0, 0.1, 1.0];
        let points = sweep_baseline(&quiet(), &baselines).unwrap();
        let got: Vec<f64> = points.iter().map(|p| p.baseline_current).collect();
        assert_eq!(got, baselines);
    }

    #[test]
    fn invalid_base_fails_before_running() {
        let bad = SimulationConfig { tstop: 0, ..quiet() };
        assert!(matches!(sweep_baseline(&bad, &[1.0]), Err(SimError::Configuration(_))));
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
