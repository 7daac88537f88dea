//! Hatch state and core simulation types

use serde::{Deserialize, Serialize};

/// Current phase of the egg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HatchPhase {
    /// Collecting cracks, below the hatch threshold
    Idle,
    /// All crack slots filled, waiting for the hatch tap
    Cracking,
    /// Timed transition to the creature model
    Hatching,
    /// Creature revealed (terminal)
    Hatched,
}

impl HatchPhase {
    /// Resting phase for a given crack count
    pub fn resting(cracks: usize, max_cracks: usize) -> Self {
        if cracks >= max_cracks {
            HatchPhase::Cracking
        } else {
            HatchPhase::Idle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HatchPhase::Idle => "Idle",
            HatchPhase::Cracking => "Cracking",
            HatchPhase::Hatching => "Hatching",
            HatchPhase::Hatched => "Hatched",
        }
    }

    /// Line shown under the egg viewer
    pub fn status_message(&self) -> &'static str {
        match self {
            HatchPhase::Idle => "Report more cracks to fill the egg",
            HatchPhase::Cracking => "The egg is full of cracks. Tap it!",
            HatchPhase::Hatching => "Something is coming out...",
            HatchPhase::Hatched => "Your egg hatched!",
        }
    }
}

/// Animation state owned by the state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub phase: HatchPhase,
    /// Time spent in the current phase (only advances while hatching)
    pub elapsed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            phase: HatchPhase::Idle,
            elapsed: 0.0,
        }
    }
}

/// Opaque crack identifier (texture resource key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrackId(pub String);

impl CrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CrackId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for CrackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Cracks reported so far, in insertion order (slot = index)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrackSet {
    ids: Vec<CrackId>,
}

impl CrackSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Append a crack; it takes the next free slot
    pub fn push(&mut self, id: impl Into<CrackId>) {
        self.ids.push(id.into());
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&CrackId> {
        self.ids.get(slot)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CrackId> {
        self.ids.iter()
    }
}

impl<T: Into<CrackId>> FromIterator<T> for CrackSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resting_phase_threshold() {
        assert_eq!(HatchPhase::resting(0, 6), HatchPhase::Idle);
        assert_eq!(HatchPhase::resting(5, 6), HatchPhase::Idle);
        assert_eq!(HatchPhase::resting(6, 6), HatchPhase::Cracking);
    }

    #[test]
    fn test_crack_set_order() {
        let mut cracks: CrackSet = ["/cracks/transparent-1.png", "/cracks/transparent-2.png"]
            .into_iter()
            .collect();
        cracks.push("/cracks/transparent-3.png");

        assert_eq!(cracks.len(), 3);
        assert_eq!(cracks.get(0).map(CrackId::as_str), Some("/cracks/transparent-1.png"));
        assert_eq!(cracks.get(2).map(CrackId::as_str), Some("/cracks/transparent-3.png"));
        assert!(cracks.get(3).is_none());
    }

    #[test]
    fn test_crack_set_serializes_as_list() {
        let cracks: CrackSet = ["a", "b"].into_iter().collect();
        assert_eq!(serde_json::to_string(&cracks).unwrap(), r#"["a","b"]"#);
    }
}
