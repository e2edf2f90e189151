//! Fixed-step integrator: owns the neuron state, the voltage trace, and the spike record.
//!
//! Semantics:
//! - step_once() runs update, spike, and trace phases for the current step and
//!   advances the step counter by exactly one.
//! - trace[t] is the potential after both phases of step t.

use crate::neuron::{self, MembraneParams, NeuronState};
use crate::stats::StatisticsCollector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpikeEvent {
    pub time: u64,
}

pub struct Integrator {
    params: MembraneParams,
    state: NeuronState,
    trace: Vec<f64>,
    stats: StatisticsCollector,
    current_time: u64,
}

impl Integrator {
    pub fn new(params: MembraneParams) -> Self {
        Self::with_capacity(params, 0)
    }

    /// Preallocate the trace for a run of known length.
    pub fn with_capacity(params: MembraneParams, steps: usize) -> Self {
        Self {
            params,
            state: NeuronState::new(),
            trace: Vec::with_capacity(steps),
            stats: StatisticsCollector::new(),
            current_time: 0,
        }
    }

    pub fn params(&self) -> &MembraneParams {
        &self.params
    }

    pub fn state(&self) -> NeuronState {
        self.state
    }

    pub fn trace(&self) -> &[f64] {
        &self.trace
    }

    pub fn stats(&self) -> &StatisticsCollector {
        &self.stats
    }

    /// Index of the next step to run.
    pub fn current_time(&self) -> u64 {
        self.current_time
    }

    /// Advance one step driven by `current`. Returns the spike emitted at this step, if any.
    pub fn step_once(&mut self, current: f64) -> Option<SpikeEvent> {
        let t = self.current_time;
        let (next, fired) = neuron::step(&self.params, self.state, current);
        self.state = next;

        let event = if fired {
            self.stats.record_spike(t);
            Some(SpikeEvent { time: t })
        } else {
            None
        };

        self.trace.push(self.state.v);
        self.current_time = t.saturating_add(1);
        event
    }

    /// Step once per element of `currents`. Does not return emitted spikes.
    pub fn run(&mut self, currents: &[f64]) {
        self.trace.reserve(currents.len());
        for &i in currents {
            let _ = self.step_once(i);
        }
    }

    /// Consume the integrator, keeping only the run's artifacts.
    pub fn finish(self) -> (Vec<f64>, StatisticsCollector) {
        (self.trace, self.stats)
    }
}
