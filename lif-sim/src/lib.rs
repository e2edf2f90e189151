//! lif-sim: Seeded simulation runs atop lif-core (keeps lif-core dependency-free)
//!
//! Additions:
//! - Validated run configuration (serde, TOML-friendly short names)
//! - Injectable, seedable Gaussian noise
//! - `simulate(config) -> RunResult`, deterministic per seed
//! - Baseline-current sweeps, parallel behind feature "parallel"

pub mod config;
pub mod error;
pub mod noise;
pub mod simulate;
pub mod sweep;

// Re-exports
pub use config::{SimulationConfig, ValidatedConfig};
pub use error::{SimError, SimResult};
pub use noise::{GaussianNoise, NoiseGenerator, Silent};
pub use simulate::{simulate, simulate_with, RunResult};
pub use sweep::{linspace, sweep_baseline, SweepPoint};
