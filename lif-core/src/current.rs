//! Driving current: constant baseline plus scaled noise.

/// `baseline + amplitude * noise[i]` for every sample; output length equals `noise.len()`.
pub fn compose(baseline: f64, noise: &[f64], amplitude: f64) -> Vec<f64> {
    noise.iter().map(|&n| baseline + amplitude * n).collect()
}
