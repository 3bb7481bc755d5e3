use serde::{Deserialize, Serialize};

/// Latest attention value and its delta against the previous sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttentionScore {
    pub score: f64,
    pub change: f64,
}
