//! Spike bookkeeping and firing-rate derivation.

use crate::error::{CoreError, CoreResult};

/// Spike times (step indices, strictly ascending) recorded during one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatisticsCollector {
    spike_times: Vec<u64>,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a spike. Only the integrator's spike phase calls this, once per step at most.
    pub(crate) fn record_spike(&mut self, t: u64) {
        debug_assert!(self.spike_times.last().map_or(true, |&last| last < t));
        self.spike_times.push(t);
    }

    #[inline]
    pub fn spike_count(&self) -> usize {
        self.spike_times.len()
    }

    pub fn spike_times(&self) -> &[u64] {
        &self.spike_times
    }

    pub fn into_spike_times(self) -> Vec<u64> {
        self.spike_times
    }

    /// Step distance between consecutive spikes.
    pub fn inter_spike_intervals(&self) -> Vec<u64> {
        self.spike_times.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Mean ISI in steps; `None` with fewer than two spikes.
    pub fn mean_isi(&self) -> Option<f64> {
        let isis = self.inter_spike_intervals();
        if isis.is_empty() {
            return None;
        }
        Some(isis.iter().sum::<u64>() as f64 / isis.len() as f64)
    }

    /// Firing rate over a run of `tstop` one-millisecond steps.
    pub fn firing_rate_hz(&self, tstop: usize) -> CoreResult<f64> {
        compute_rate(tstop, self.spike_count())
    }
}

/// `spike_count / (tstop / 1000)`: steps are milliseconds, result is Hz.
pub fn compute_rate(tstop: usize, spike_count: usize) -> CoreResult<f64> {
    if tstop == 0 {
        return Err(CoreError::Division);
    }
    Ok(spike_count as f64 / (tstop as f64 / 1000.0))
}
