//! Engine tunables
//!
//! Loaded from JSON when the host provides a file, otherwise defaults from
//! `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::HatchError;
use crate::sim::Timeline;

/// Crack threshold presets seen across egg revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HatchPreset {
    /// Six cracks, matching a freshly seeded egg
    #[default]
    Compact,
    /// Ten cracks
    Classic,
}

impl HatchPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            HatchPreset::Compact => "Compact",
            HatchPreset::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" | "6" => Some(HatchPreset::Compact),
            "classic" | "10" => Some(HatchPreset::Classic),
            _ => None,
        }
    }

    /// Crack slots on the egg for this preset
    pub fn max_cracks(&self) -> usize {
        match self {
            HatchPreset::Compact => 6,
            HatchPreset::Classic => 10,
        }
    }
}

/// Hatch engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchSettings {
    /// Crack count needed before a tap starts the hatch
    pub max_cracks: usize,

    // === Timeline ===
    /// Overall transition length (seconds)
    pub animation_duration: f32,
    /// Model swap point as a fraction of the duration (0.0 - 1.0)
    pub hatch_time_fraction: f32,
    /// Resting glow level
    pub base_bloom: f32,
    /// Peak glow added during the transition
    pub pulse_amplitude: f32,
    /// Peak vertical rise during the transition
    pub target_float_height: f32,

    // === Decals ===
    /// Uniform decal scale
    pub decal_scale: f32,
}

impl Default for HatchSettings {
    fn default() -> Self {
        Self {
            max_cracks: MAX_CRACKS,

            animation_duration: ANIMATION_DURATION,
            hatch_time_fraction: HATCH_TIME_FRACTION,
            base_bloom: BASE_BLOOM,
            pulse_amplitude: PULSE_AMPLITUDE,
            target_float_height: TARGET_FLOAT_HEIGHT,

            decal_scale: DECAL_SCALE,
        }
    }
}

impl HatchSettings {
    /// Create settings from a preset (other tunables at defaults)
    pub fn from_preset(preset: HatchPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a preset (updates the crack threshold)
    pub fn apply_preset(&mut self, preset: HatchPreset) {
        self.max_cracks = preset.max_cracks();
    }

    /// Timeline curve parameters
    pub fn timeline(&self) -> Timeline {
        Timeline {
            duration: self.animation_duration,
            base_bloom: self.base_bloom,
            pulse_amplitude: self.pulse_amplitude,
            target_height: self.target_float_height,
        }
    }

    /// Check every tunable is usable
    pub fn validate(&self) -> Result<(), HatchError> {
        if self.max_cracks == 0 {
            return Err(HatchError::InvalidSettings("max_cracks must be at least 1".into()));
        }
        if !self.animation_duration.is_finite() || self.animation_duration <= 0.0 {
            return Err(HatchError::InvalidSettings(format!(
                "animation_duration must be positive, got {}",
                self.animation_duration
            )));
        }
        if !(0.0..=1.0).contains(&self.hatch_time_fraction) {
            return Err(HatchError::InvalidSettings(format!(
                "hatch_time_fraction must be within [0, 1], got {}",
                self.hatch_time_fraction
            )));
        }

        let tunables = [
            ("base_bloom", self.base_bloom),
            ("pulse_amplitude", self.pulse_amplitude),
            ("target_float_height", self.target_float_height),
            ("decal_scale", self.decal_scale),
        ];
        for (name, value) in tunables {
            if !value.is_finite() || value < 0.0 {
                return Err(HatchError::InvalidSettings(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, HatchError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, HatchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HatchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
