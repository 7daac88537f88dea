//! Egg Hatch - crack decal placement and hatch animation engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (decal placement, timeline curves, hatch state machine)
//! - `engine`: Per-frame facade producing render-ready snapshots
//! - `settings`: Data-driven tunables
//! - `progress`: Crack collection progress for the UI

pub mod engine;
pub mod error;
pub mod progress;
pub mod settings;
pub mod sim;

pub use engine::{DecalInstance, DecalTransform, FrameSnapshot, HatchEngine, RenderTarget};
pub use error::HatchError;
pub use progress::EggProgress;
pub use settings::{HatchPreset, HatchSettings};

use glam::Vec3;

/// Engine configuration constants (defaults for `HatchSettings`)
pub mod consts {
    /// Crack count needed before the egg accepts a hatch trigger
    pub const MAX_CRACKS: usize = 6;

    /// Length of the hatch transition in simulated seconds
    pub const ANIMATION_DURATION: f32 = 2.0;
    /// Point in the transition where the model swaps (fraction of duration)
    pub const HATCH_TIME_FRACTION: f32 = 1.0;

    /// Resting glow level
    pub const BASE_BLOOM: f32 = 0.0;
    /// Peak glow added at the middle of the transition
    pub const PULSE_AMPLITUDE: f32 = 2.5;
    /// Peak vertical rise of the egg during the transition
    pub const TARGET_FLOAT_HEIGHT: f32 = 0.5;

    /// Uniform decal scale
    pub const DECAL_SCALE: f32 = 0.5;

    /// Egg surface: horizontal semi-axis
    pub const EGG_RADIUS_XZ: f32 = 1.0;
    /// Egg surface: vertical semi-axis (taller than wide)
    pub const EGG_RADIUS_Y: f32 = 1.3;

    /// Frame delta used by the headless demo (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Semi-axes of the egg ovoid
#[inline]
pub fn egg_radii() -> Vec3 {
    Vec3::new(consts::EGG_RADIUS_XZ, consts::EGG_RADIUS_Y, consts::EGG_RADIUS_XZ)
}

/// Scale a direction so it lands on the egg surface
///
/// The ovoid is an axis-aligned ellipsoid centred at the origin, so the point
/// along `dir` at parameter `s` lies on it when `|dir * s / radii| == 1`.
#[inline]
pub fn project_to_surface(dir: Vec3) -> Vec3 {
    let scaled = dir / egg_radii();
    dir / scaled.length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_to_surface_axes() {
        let up = project_to_surface(Vec3::Y * 3.0);
        assert!((up - Vec3::new(0.0, consts::EGG_RADIUS_Y, 0.0)).length() < 1e-5);

        let side = project_to_surface(Vec3::new(0.2, 0.0, 0.0));
        assert!((side.x - consts::EGG_RADIUS_XZ).abs() < 1e-5);
    }

    #[test]
    fn test_project_to_surface_on_ellipsoid() {
        let p = project_to_surface(Vec3::new(0.3, -0.7, 0.5));
        let implicit = (p / egg_radii()).length_squared();
        assert!((implicit - 1.0).abs() < 1e-5);
    }
}
