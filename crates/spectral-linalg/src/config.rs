use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Machine epsilon for `f64`, the default convergence threshold of the QL iteration.
pub const EPS: f64 = f64::EPSILON;

/// Tuning knobs for the iterative decompositions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Relative threshold below which an off-diagonal element counts as zero.
    pub eps: f64,
    /// QL steps allowed per eigenvalue before giving up.
    pub max_iterations: usize,
    /// Largest `|a[i][j] - a[j][i]|` still treated as symmetric.
    pub symmetry_tolerance: f64,
}

impl SolverConfig {
    pub fn new(eps: f64, max_iterations: usize, symmetry_tolerance: f64) -> Self {
        Self {
            eps,
            max_iterations,
            symmetry_tolerance,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            eps: EPS,
            max_iterations: 1000,
            symmetry_tolerance: 0.0,
        }
    }
}

/// Load a solver configuration from a JSON file. Missing fields keep their defaults.
pub fn load_solver_config<P: AsRef<Path>>(path: P) -> Result<SolverConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SolverConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
