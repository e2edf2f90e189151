//! Run configuration and fail-fast validation.

use lif_core::MembraneParams;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Parameters of one run, as supplied by a caller or a TOML file.
///
/// Integer fields are signed so that negative values reach validation and
/// are reported as configuration errors instead of parse failures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Membrane capacitance (nF)
    #[serde(alias = "C")]
    pub capacitance: f64,
    /// Leak resistance (MΩ)
    #[serde(alias = "R")]
    pub resistance: f64,
    /// Baseline input current (nA)
    #[serde(alias = "I0")]
    pub baseline_current: f64,
    /// Amplitude of the Gaussian noise added to the baseline
    #[serde(alias = "noiseAmp")]
    pub noise_amp: f64,
    /// Spike threshold
    #[serde(alias = "V_th")]
    pub threshold: f64,
    /// Absolute refractory period in steps
    pub abs_ref: i64,
    /// Number of 1 ms steps
    pub tstop: i64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacitance: 1.0,
            resistance: 40.0,
            baseline_current: 1.0,
            noise_amp: 2.0,
            threshold: 10.0,
            abs_ref: 5,
            tstop: 400,
            seed: 42,
        }
    }
}

/// A configuration that passed validation; step counts are unsigned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedConfig {
    pub membrane: MembraneParams,
    pub baseline_current: f64,
    pub noise_amp: f64,
    pub steps: usize,
    pub seed: u64,
}

impl SimulationConfig {
    pub fn validate(&self) -> SimResult<ValidatedConfig> {
        let reals = [
            self.capacitance,
            self.resistance,
            self.baseline_current,
            self.noise_amp,
            self.threshold,
        ];
        if reals.iter().any(|x| !x.is_finite()) {
            return Err(SimError::config("non-finite parameter"));
        }
        if self.resistance <= 0.0 || self.capacitance <= 0.0 {
            return Err(SimError::config("non-positive physical parameter"));
        }
        if self.tstop <= 0 {
            return Err(SimError::config("non-positive duration"));
        }
        if self.abs_ref < 0 {
            return Err(SimError::config("negative refractory duration"));
        }
        if self.noise_amp < 0.0 {
            return Err(SimError::config("negative noise amplitude"));
        }

        let abs_refractory = u32::try_from(self.abs_ref)
            .map_err(|_| SimError::config("refractory duration out of range"))?;
        let steps = usize::try_from(self.tstop)
            .map_err(|_| SimError::config("duration out of range"))?;

        if self.threshold <= 0.0 {
            warn!(
                "threshold {} is not positive; refractory clamp {} no longer sits below it",
                self.threshold,
                lif_core::RESET_FRACTION * self.threshold
            );
        }

        Ok(ValidatedConfig {
            membrane: MembraneParams {
                capacitance: self.capacitance,
                resistance: self.resistance,
                threshold: self.threshold,
                abs_refractory,
            },
            baseline_current: self.baseline_current,
            noise_amp: self.noise_amp,
            steps,
            seed: self.seed,
        })
    }
}
