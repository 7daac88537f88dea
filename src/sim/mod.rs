//! Deterministic simulation module
//!
//! All hatch logic lives here. This module must be pure and deterministic:
//! - Time advances only through `HatchMachine::tick`
//! - Slot placement depends only on slot index and slot count
//! - No rendering or platform dependencies

pub mod curves;
pub mod placement;
pub mod state;
pub mod tick;

pub use curves::Timeline;
pub use placement::{DECAL_FORWARD, DecalSlot, compute_slot, face_outward};
pub use state::{AnimationState, CrackId, CrackSet, HatchPhase};
pub use tick::{HatchMachine, HatchRules, TickInput, TickOutcome};
