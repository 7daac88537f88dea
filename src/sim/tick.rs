//! Hatch state machine
//!
//! Advances the egg one rendered frame at a time. Nothing moves unless `tick`
//! is called; the caller supplies the measured frame delta.

use super::state::{AnimationState, HatchPhase};
use crate::error::{HatchError, check_delta};
use crate::settings::HatchSettings;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Cracks currently on the egg
    pub crack_count: usize,
    /// User tapped/clicked the egg this frame
    pub trigger: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A trigger started the hatch this frame
    pub hatch_started: bool,
    /// The creature was revealed this frame (true on exactly one frame)
    pub hatched_triggered: bool,
}

/// Transition rules derived from settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatchRules {
    pub max_cracks: usize,
    pub duration: f32,
    /// Elapsed time at which the model swaps
    pub hatch_time: f32,
}

impl HatchRules {
    pub fn from_settings(settings: &HatchSettings) -> Self {
        Self {
            max_cracks: settings.max_cracks,
            duration: settings.animation_duration,
            hatch_time: settings.hatch_time_fraction * settings.animation_duration,
        }
    }
}

/// Owns the phase and phase-elapsed time
#[derive(Debug, Clone)]
pub struct HatchMachine {
    state: AnimationState,
    rules: HatchRules,
}

impl HatchMachine {
    pub fn new(rules: HatchRules) -> Self {
        Self {
            state: AnimationState::new(),
            rules,
        }
    }

    pub fn phase(&self) -> HatchPhase {
        self.state.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.state.elapsed
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn rules(&self) -> &HatchRules {
        &self.rules
    }

    /// Advance by one frame
    ///
    /// A negative or non-finite `dt` is rejected before any state changes.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Result<TickOutcome, HatchError> {
        check_delta(dt)?;

        let mut outcome = TickOutcome::default();

        match self.state.phase {
            HatchPhase::Idle | HatchPhase::Cracking => {
                let ready = input.crack_count >= self.rules.max_cracks;
                if input.trigger && ready {
                    log::info!(
                        "Hatch started with {} cracks (duration {:.2}s)",
                        input.crack_count,
                        self.rules.duration
                    );
                    self.state.phase = HatchPhase::Hatching;
                    self.state.elapsed = 0.0;
                    outcome.hatch_started = true;
                } else {
                    if input.trigger {
                        log::debug!(
                            "Ignoring tap: {}/{} cracks",
                            input.crack_count,
                            self.rules.max_cracks
                        );
                    }
                    self.state.phase = HatchPhase::resting(input.crack_count, self.rules.max_cracks);
                }
            }
            HatchPhase::Hatching => {
                // Taps during the transition are ignored; it cannot be cancelled
                self.state.elapsed = (self.state.elapsed + dt).min(self.rules.duration);
            }
            HatchPhase::Hatched => return Ok(outcome),
        }

        if self.state.phase == HatchPhase::Hatching
            && (self.state.elapsed >= self.rules.hatch_time
                || self.state.elapsed >= self.rules.duration)
        {
            log::info!("Egg hatched at {:.3}s", self.state.elapsed);
            self.state.phase = HatchPhase::Hatched;
            outcome.hatched_triggered = true;
        }

        Ok(outcome)
    }
}
