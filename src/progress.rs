//! Crack collection progress
//!
//! Drives the progress bar under the egg viewer.

use serde::{Deserialize, Serialize};

/// Cracks collected versus cracks needed to hatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggProgress {
    pub cracks: usize,
    pub needed: usize,
}

impl EggProgress {
    pub fn new(cracks: usize, needed: usize) -> Self {
        Self { cracks, needed }
    }

    /// Filled fraction in [0, 1]
    pub fn fraction(&self) -> f32 {
        if self.needed == 0 {
            return 1.0;
        }
        (self.cracks as f32 / self.needed as f32).min(1.0)
    }

    /// Filled percentage in [0, 100]
    pub fn percent(&self) -> f32 {
        self.fraction() * 100.0
    }

    /// Enough cracks to hatch (bar turns red)
    pub fn is_full(&self) -> bool {
        self.cracks >= self.needed
    }

    /// Cracks still missing
    pub fn remaining(&self) -> usize {
        self.needed.saturating_sub(self.cracks)
    }
}
