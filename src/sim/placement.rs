//! Decal slot placement on the egg surface
//!
//! Slot `i` of `n` sits on a curve that wraps the egg once around the vertical
//! axis while oscillating 1.5 times front to back, so neighbouring slots do
//! not cluster. The curve point is then pushed onto the ovoid surface.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::HatchError;
use crate::project_to_surface;

/// Forward axis of a decal projector in its local space
pub const DECAL_FORWARD: Vec3 = Vec3::Z;

/// Fixed position and face-outward orientation for one crack slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecalSlot {
    pub position: Vec3,
    pub rotation: Quat,
}

impl DecalSlot {
    /// Outward surface normal at this slot (decal forward axis in world space)
    pub fn normal(&self) -> Vec3 {
        self.rotation * DECAL_FORWARD
    }
}

/// Compute the slot for crack `index` out of `total` slots
///
/// Out-of-range input is rejected, never clamped.
pub fn compute_slot(index: usize, total: usize) -> Result<DecalSlot, HatchError> {
    if total == 0 || index >= total {
        return Err(HatchError::SlotOutOfRange { index, total });
    }

    let theta = index as f32 / total as f32 * TAU;
    // xy is always a unit vector, so the direction never degenerates and
    // distinct indices never share a direction
    let raw = Vec3::new(theta.sin(), theta.cos(), (theta * 1.5).sin());
    let position = project_to_surface(raw);

    Ok(DecalSlot {
        position,
        rotation: face_outward(position),
    })
}

/// Rotation taking the decal forward axis onto the direction from the egg
/// center through `position`
pub fn face_outward(position: Vec3) -> Quat {
    let normal = position.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(DECAL_FORWARD, normal)
}
