//! Hatch timeline curves
//!
//! Pure functions of phase-elapsed time `t` in `[0, duration]`. Both curves are
//! zero-offset at the ends of the transition and peak at its midpoint.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables shaping the hatch transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Overall transition length (seconds)
    pub duration: f32,
    /// Resting glow level
    pub base_bloom: f32,
    /// Peak glow added during the transition
    pub pulse_amplitude: f32,
    /// Peak vertical rise
    pub target_height: f32,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            duration: ANIMATION_DURATION,
            base_bloom: BASE_BLOOM,
            pulse_amplitude: PULSE_AMPLITUDE,
            target_height: TARGET_FLOAT_HEIGHT,
        }
    }
}

impl Timeline {
    /// Clamp a phase time into the curve domain
    #[inline]
    pub fn clamp_time(&self, t: f32) -> f32 {
        t.clamp(0.0, self.duration)
    }

    /// Half-period sine over the transition: 0 at both ends, 1 at the middle
    #[inline]
    fn arch(&self, t: f32) -> f32 {
        debug_assert!(
            (0.0..=self.duration).contains(&t),
            "timeline sampled outside [0, {}]: {}",
            self.duration,
            t
        );
        (PI * t / self.duration).sin()
    }

    /// Glow intensity: `base + amplitude * sin(πt/D)`
    pub fn bloom_intensity(&self, t: f32) -> f32 {
        self.base_bloom + self.pulse_amplitude * self.arch(t)
    }

    /// Vertical offset: `height * sin(πt/D)²`
    pub fn float_height(&self, t: f32) -> f32 {
        let s = self.arch(t);
        self.target_height * s * s
    }

    /// Glow outside the transition
    #[inline]
    pub fn resting_bloom(&self) -> f32 {
        self.bloom_intensity(0.0)
    }
}
