//! Per-frame facade
//!
//! The renderer calls `HatchEngine::advance` once per frame with the measured
//! delta, the current crack set and whether the egg was tapped. The returned
//! snapshot says which model to draw, where the crack decals go and how much
//! the egg glows and floats.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};
use serde::Serialize;

use crate::error::{HatchError, check_delta};
use crate::progress::EggProgress;
use crate::settings::HatchSettings;
use crate::sim::{CrackId, CrackSet, HatchMachine, HatchPhase, HatchRules, TickInput, Timeline, compute_slot};

/// Placement of one crack decal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecalTransform {
    /// Slot index (index into the crack set)
    pub slot: usize,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl DecalTransform {
    /// Model matrix for the decal projector
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }

    /// GPU instance data
    pub fn to_instance(&self) -> DecalInstance {
        DecalInstance {
            model: self.matrix().to_cols_array_2d(),
            slot: self.slot as u32,
            _pad: [0; 3],
        }
    }
}

/// Per-decal instance data for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct DecalInstance {
    /// Column-major model matrix
    pub model: [[f32; 4]; 4],
    /// Crack slot (selects the texture layer)
    pub slot: u32,
    pub _pad: [u32; 3],
}

/// Which model the renderer should draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderTarget {
    /// Egg mesh with crack decals
    Egg { decals: Vec<DecalTransform> },
    /// Hatched creature model (no decals)
    Creature,
}

/// Render-ready state for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: HatchPhase,
    pub target: RenderTarget,
    pub bloom_intensity: f32,
    pub float_height: f32,
    /// True only on the frame the creature is revealed
    pub hatched_triggered: bool,
    /// Crack collection progress in [0, 1]
    pub progress: f32,
}

impl FrameSnapshot {
    /// Decals to draw this frame (empty once the egg starts hatching)
    pub fn decal_transforms(&self) -> &[DecalTransform] {
        match &self.target {
            RenderTarget::Egg { decals } => decals,
            RenderTarget::Creature => &[],
        }
    }

    /// Pair each decal with the crack texture it shows
    pub fn bindings<'a>(
        &'a self,
        cracks: &'a CrackSet,
    ) -> impl Iterator<Item = (&'a CrackId, &'a DecalTransform)> + 'a {
        self.decal_transforms()
            .iter()
            .filter_map(move |d| cracks.get(d.slot).map(|id| (id, d)))
    }

    /// Instance buffer contents for the decals
    pub fn decal_instances(&self) -> Vec<DecalInstance> {
        self.decal_transforms().iter().map(DecalTransform::to_instance).collect()
    }

    pub fn shows_creature(&self) -> bool {
        matches!(self.target, RenderTarget::Creature)
    }
}

/// Hatch engine for one egg session
///
/// Re-create the engine to start a new egg; there is no reset.
#[derive(Debug, Clone)]
pub struct HatchEngine {
    machine: HatchMachine,
    timeline: Timeline,
    settings: HatchSettings,
}

impl HatchEngine {
    /// Build an engine from validated settings
    pub fn new(settings: HatchSettings) -> Result<Self, HatchError> {
        settings.validate()?;
        log::info!(
            "Hatch engine ready: {} crack slots, {:.2}s transition",
            settings.max_cracks,
            settings.animation_duration
        );
        Ok(Self {
            machine: HatchMachine::new(HatchRules::from_settings(&settings)),
            timeline: settings.timeline(),
            settings,
        })
    }

    pub fn settings(&self) -> &HatchSettings {
        &self.settings
    }

    pub fn phase(&self) -> HatchPhase {
        self.machine.phase()
    }

    /// Time spent hatching so far
    pub fn elapsed(&self) -> f32 {
        self.machine.elapsed()
    }

    /// Advance one frame and produce its snapshot
    ///
    /// Invalid input is rejected before the state machine is touched.
    pub fn advance(&mut self, dt: f32, cracks: &CrackSet, trigger: bool) -> Result<FrameSnapshot, HatchError> {
        check_delta(dt)?;
        let max = self.settings.max_cracks;
        if cracks.len() > max {
            return Err(HatchError::TooManyCracks {
                count: cracks.len(),
                max,
            });
        }

        let input = TickInput {
            crack_count: cracks.len(),
            trigger,
        };
        let outcome = self.machine.tick(&input, dt)?;
        let phase = self.machine.phase();

        let (target, bloom_intensity, float_height) = match phase {
            HatchPhase::Idle | HatchPhase::Cracking => {
                let decals = (0..cracks.len())
                    .map(|slot| -> Result<DecalTransform, HatchError> {
                        let placed = compute_slot(slot, max)?;
                        Ok(DecalTransform {
                            slot,
                            position: placed.position,
                            rotation: placed.rotation,
                            scale: self.settings.decal_scale,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (RenderTarget::Egg { decals }, self.timeline.resting_bloom(), 0.0)
            }
            HatchPhase::Hatching => {
                let t = self.timeline.clamp_time(self.machine.elapsed());
                (
                    RenderTarget::Creature,
                    self.timeline.bloom_intensity(t),
                    self.timeline.float_height(t),
                )
            }
            HatchPhase::Hatched => (RenderTarget::Creature, self.timeline.resting_bloom(), 0.0),
        };

        Ok(FrameSnapshot {
            phase,
            target,
            bloom_intensity,
            float_height,
            hatched_triggered: outcome.hatched_triggered,
            progress: EggProgress::new(cracks.len(), max).fraction(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    const EPS: f32 = 1e-5;

    fn cracks(n: usize) -> CrackSet {
        (1..=n).map(|i| format!("/cracks/transparent-{}.png", i)).collect()
    }

    fn engine() -> HatchEngine {
        HatchEngine::new(HatchSettings::default()).unwrap()
    }

    #[test]
    fn test_idle_frame_places_decals() {
        let mut engine = engine();
        let set = cracks(3);
        let snap = engine.advance(FRAME_DT, &set, false).unwrap();

        assert_eq!(snap.phase, HatchPhase::Idle);
        assert_eq!(snap.decal_transforms().len(), 3);
        assert!((snap.bloom_intensity - BASE_BLOOM).abs() < EPS);
        assert_eq!(snap.float_height, 0.0);
        assert!(!snap.hatched_triggered);
        assert!((snap.progress - 0.5).abs() < EPS);

        for (i, decal) in snap.decal_transforms().iter().enumerate() {
            let slot = compute_slot(i, MAX_CRACKS).unwrap();
            assert_eq!(decal.slot, i);
            assert_eq!(decal.position, slot.position);
            assert_eq!(decal.rotation, slot.rotation);
            assert_eq!(decal.scale, DECAL_SCALE);
        }
    }

    #[test]
    fn test_slots_stable_as_cracks_arrive() {
        let mut engine = engine();
        let first = engine.advance(FRAME_DT, &cracks(2), false).unwrap();
        let later = engine.advance(FRAME_DT, &cracks(5), false).unwrap();
        assert_eq!(first.decal_transforms(), &later.decal_transforms()[..2]);
    }

    #[test]
    fn test_bindings_follow_insertion_order() {
        let mut engine = engine();
        let set = cracks(4);
        let snap = engine.advance(0.0, &set, false).unwrap();
        let bound: Vec<&str> = snap.bindings(&set).map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            bound,
            [
                "/cracks/transparent-1.png",
                "/cracks/transparent-2.png",
                "/cracks/transparent-3.png",
                "/cracks/transparent-4.png"
            ]
        );
    }

    #[test]
    fn test_premature_tap_is_noop() {
        let mut engine = engine();
        let snap = engine.advance(FRAME_DT, &cracks(5), true).unwrap();
        assert_eq!(snap.phase, HatchPhase::Idle);
        assert!(!snap.shows_creature());
    }

    #[test]
    fn test_threshold_tap_starts_hatch() {
        let mut engine = engine();
        let set = cracks(6);
        let waiting = engine.advance(FRAME_DT, &set, false).unwrap();
        assert_eq!(waiting.phase, HatchPhase::Cracking);
        assert_eq!(waiting.decal_transforms().len(), 6);

        let snap = engine.advance(0.0, &set, true).unwrap();
        assert_eq!(snap.phase, HatchPhase::Hatching);
        assert_eq!(engine.elapsed(), 0.0);
        assert!(snap.decal_transforms().is_empty());
        assert!(snap.shows_creature());
        assert!((snap.bloom_intensity - BASE_BLOOM).abs() < EPS);
        assert!(snap.float_height.abs() < EPS);
    }

    #[test]
    fn test_hatch_curves_and_one_shot_flag() {
        let mut engine = engine();
        let set = cracks(6);
        engine.advance(0.0, &set, true).unwrap();

        let d = ANIMATION_DURATION;
        let mid = engine.advance(d / 2.0, &set, false).unwrap();
        assert_eq!(mid.phase, HatchPhase::Hatching);
        assert!((mid.bloom_intensity - (BASE_BLOOM + PULSE_AMPLITUDE)).abs() < EPS);
        assert!((mid.float_height - TARGET_FLOAT_HEIGHT).abs() < EPS);

        let done = engine.advance(d / 2.0, &set, false).unwrap();
        assert_eq!(done.phase, HatchPhase::Hatched);
        assert!(done.hatched_triggered);
        assert!(done.shows_creature());
        assert!((done.bloom_intensity - BASE_BLOOM).abs() < EPS);
        assert_eq!(done.float_height, 0.0);

        for (dt, tap) in [(0.0, true), (1.0, false), (10.0, true)] {
            let snap = engine.advance(dt, &set, tap).unwrap();
            assert_eq!(snap.phase, HatchPhase::Hatched);
            assert!(!snap.hatched_triggered);
            assert!(snap.decal_transforms().is_empty());
        }
    }

    #[test]
    fn test_invalid_input_rejected_without_mutation() {
        let mut engine = engine();
        let set = cracks(6);
        engine.advance(0.0, &set, true).unwrap();
        engine.advance(0.5, &set, false).unwrap();

        assert!(matches!(
            engine.advance(-FRAME_DT, &set, false),
            Err(HatchError::NegativeDelta(_))
        ));
        assert!(matches!(
            engine.advance(FRAME_DT, &cracks(7), false),
            Err(HatchError::TooManyCracks { count: 7, max: 6 })
        ));
        assert_eq!(engine.phase(), HatchPhase::Hatching);
        assert!((engine.elapsed() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = HatchSettings {
            max_cracks: 0,
            ..Default::default()
        };
        assert!(matches!(HatchEngine::new(settings), Err(HatchError::InvalidSettings(_))));
    }

    #[test]
    fn test_decal_instances() {
        let mut engine = engine();
        let snap = engine.advance(0.0, &cracks(2), false).unwrap();
        let instances = snap.decal_instances();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].slot, 1);

        // Translation lives in the last column
        let pos = snap.decal_transforms()[1].position;
        assert_eq!(instances[1].model[3][0], pos.x);
        assert_eq!(instances[1].model[3][1], pos.y);
        assert_eq!(instances[1].model[3][2], pos.z);

        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<DecalInstance>());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = engine();
        let snap = engine.advance(0.0, &cracks(1), false).unwrap();
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["phase"], "Idle");
        assert_eq!(json["target"]["Egg"]["decals"].as_array().map(Vec::len), Some(1));
    }
}
