//! lif-core: Zero-dependency leaky integrate-and-fire integrator (embeddable)
//!
//! Fixed unit step, explicit Euler. Large `1/(R*C)` can over- or undershoot;
//! no adaptive correction is applied.

pub mod current;
pub mod error;
pub mod integrator;
pub mod neuron;
pub mod stats;

// Re-exports
pub use current::compose;
pub use error::{CoreError, CoreResult};
pub use integrator::{Integrator, SpikeEvent};
pub use neuron::{step, MembraneParams, NeuronState, Phase, RESET_FRACTION, SPIKE_VOLTAGE};
pub use stats::{compute_rate, StatisticsCollector};
