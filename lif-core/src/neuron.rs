//! Single-compartment LIF neuron: membrane state and the two-phase step.
//!
//! One step is always `update_phase` followed by `spike_phase`. The spike
//! check runs after either update branch; while refractory the clamped
//! potential sits below a positive threshold, so spikes can only originate
//! from the integrating branch.

/// Potential written on the step a spike is emitted (display value, not integrated).
pub const SPIKE_VOLTAGE: f64 = 50.0;

/// Fraction of the threshold the potential is held at while refractory.
pub const RESET_FRACTION: f64 = 0.2;

/// Physical and threshold parameters of one neuron. Step size is fixed at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MembraneParams {
    pub capacitance: f64,
    pub resistance: f64,
    pub threshold: f64,
    /// Absolute refractory period in steps.
    pub abs_refractory: u32,
}

impl MembraneParams {
    /// Potential held during refraction.
    #[inline]
    pub fn reset_voltage(&self) -> f64 {
        RESET_FRACTION * self.threshold
    }

    /// Membrane time constant `R * C` in steps.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.resistance * self.capacitance
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Integrating,
    Refractory,
}

/// Mutable per-run state. `refractory` never exceeds `abs_refractory`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NeuronState {
    pub v: f64,
    pub refractory: u32,
}

impl NeuronState {
    /// Resting state at t = 0.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.refractory > 0 {
            Phase::Refractory
        } else {
            Phase::Integrating
        }
    }
}

/// Update phase: refractory clamp, or one explicit Euler step of
/// `dV/dt = -V/(RC) + I/C` with h = 1.
#[inline]
pub fn update_phase(params: &MembraneParams, state: NeuronState, current: f64) -> NeuronState {
    match state.phase() {
        Phase::Refractory => NeuronState {
            v: params.reset_voltage(),
            refractory: state.refractory - 1,
        },
        Phase::Integrating => {
            let v = state.v;
            NeuronState {
                v: v - v / (params.resistance * params.capacitance) + current / params.capacitance,
                refractory: 0,
            }
        }
    }
}

/// Spike phase: threshold crossing forces the spike value and (re)arms the
/// refractory counter. Returns whether a spike was emitted.
#[inline]
pub fn spike_phase(params: &MembraneParams, state: NeuronState) -> (NeuronState, bool) {
    if state.v > params.threshold {
        let fired = NeuronState {
            v: SPIKE_VOLTAGE,
            refractory: params.abs_refractory,
        };
        (fired, true)
    } else {
        (state, false)
    }
}

/// Advance one step. Pure: the caller threads the returned state into the next call.
#[inline]
pub fn step(params: &MembraneParams, state: NeuronState, current: f64) -> (NeuronState, bool) {
    let updated = update_phase(params, state, current);
    spike_phase(params, updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> MembraneParams {
        MembraneParams {
            capacitance: 1.0,
            resistance: 40.0,
            threshold: 10.0,
            abs_refractory: 5,
        }
    }

    #[test]
    fn euler_update_from_rest() {
        let p = params();
        let (s, fired) = step(&p, NeuronState::new(), 1.0);
        assert!(!fired);
        assert_eq!(s.v, 1.0);
        let (s, _) = step(&p, s, 1.0);
        assert!((s.v - 1.975).abs() < 1e-12);
    }

    #[test]
    fn refractory_ignores_input() {
        let p = params();
        let s = NeuronState { v: 50.0, refractory: 3 };
        let next = update_phase(&p, s, 1_000.0);
        assert_eq!(next.v, 2.0);
        assert_eq!(next.refractory, 2);
        assert_eq!(next.phase(), Phase::Refractory);
    }

    #[test]
    fn last_refractory_step_returns_to_integrating() {
        let p = params();
        let (s, fired) = step(&p, NeuronState { v: 2.0, refractory: 1 }, 100.0);
        assert!(!fired);
        assert_eq!(s, NeuronState { v: 2.0, refractory: 0 });
        assert_eq!(s.phase(), Phase::Integrating);
    }

    #[test]
    fn crossing_threshold_fires_and_arms_refractory() {
        let p = params();
        let (s, fired) = step(&p, NeuronState { v: 9.9, refractory: 0 }, 1.0);
        assert!(fired);
        assert_eq!(s.v, SPIKE_VOLTAGE);
        assert_eq!(s.refractory, 5);
    }

    #[test]
    fn equal_to_threshold_does_not_fire() {
        let p = params();
        let (s, fired) = spike_phase(&p, NeuronState { v: 10.0, refractory: 0 });
        assert!(!fired);
        assert_eq!(s.v, 10.0);
    }

    #[test]
    fn zero_refractory_period_can_fire_on_consecutive_steps() {
        let p = MembraneParams { abs_refractory: 0, ..params() };
        let (s, fired) = step(&p, NeuronState::new(), 20.0);
        assert!(fired);
        assert_eq!(s.refractory, 0);
        let (_, fired_again) = step(&p, s, 20.0);
        assert!(fired_again);
    }

    #[test]
    fn negative_threshold_refires_from_clamp() {
        // 0.2 * V_th lies above a negative threshold, so the spike phase fires again.
        let p = MembraneParams { threshold: -5.0, ..params() };
        let (s, fired) = step(&p, NeuronState { v: 50.0, refractory: 2 }, 0.0);
        assert!(fired);
        assert_eq!(s.refractory, 5);
    }
}
