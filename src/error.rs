//! Engine error type
//!
//! Every variant is a caller contract violation or a config problem. Nothing
//! here is fatal to the application; the caller decides whether to surface it.

/// Error type for engine calls and settings loading.
#[derive(Debug, thiserror::Error)]
pub enum HatchError {
    #[error("Frame delta must be non-negative, got {0}")]
    NegativeDelta(f32),

    #[error("Frame delta must be finite")]
    NonFiniteDelta,

    #[error("Crack set holds {count} cracks but the egg only has {max} slots")]
    TooManyCracks { count: usize, max: usize },

    #[error("Decal slot {index} out of range for {total} slots")]
    SlotOutOfRange { index: usize, total: usize },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject negative or non-finite frame deltas
pub fn check_delta(dt: f32) -> Result<(), HatchError> {
    if !dt.is_finite() {
        return Err(HatchError::NonFiniteDelta);
    }
    if dt < 0.0 {
        return Err(HatchError::NegativeDelta(dt));
    }
    Ok(())
}
