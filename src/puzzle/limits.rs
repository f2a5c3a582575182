use serde::{Deserialize, Serialize};

/// Bounds on a single solve. Both are always enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverLimits {
    pub max_solutions: usize,
    pub max_states: u32,
}

impl Default for SolverLimits {
    fn default() -> SolverLimits {
        SolverLimits {
            max_solutions: 1,
            max_states: 50_000,
        }
    }
}
