//! Sprint HUD View Model
//!
//! What a stamina bar should show, derived from read-only state. Drawing it
//! is the presentation layer's job.

use serde::{Serialize, Deserialize};

use crate::game::state::LocomotionState;

/// Bar tint while sprinting (light blue).
pub const SPRINT_TINT: [f32; 3] = [0.2, 0.6, 1.0];

/// Bar tint during cooldown.
pub const COOLDOWN_TINT: [f32; 3] = [0.5, 0.5, 0.5];

/// Dimming applied to the sprint tint when idle and ready.
pub const READY_DIM: f32 = 0.8;

/// Which state the bar is presenting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SprintMode {
    /// Sprint granted
    Sprinting,
    /// Locked out
    Cooldown,
    /// Available, not sprinting
    Ready,
}

/// Snapshot for a stamina bar widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SprintStatus {
    /// Fill amount in [0, 1]
    pub fill: f32,
    /// Presentation mode
    pub mode: SprintMode,
    /// Short label: stamina while sprinting, seconds left in cooldown, or "Ready"
    pub label: String,
}

impl SprintStatus {
    /// Derive the bar state.
    pub fn from_state(state: &LocomotionState) -> Self {
        let fill = state.stamina_fraction().clamp(0.0, 1.0);

        let (mode, label) = if state.is_sprinting() {
            (SprintMode::Sprinting, format!("{}", state.stamina().ceil() as i32))
        } else if !state.sprint_available() {
            (SprintMode::Cooldown, format!("{}", state.sprint_cooldown_timer().ceil() as i32))
        } else {
            (SprintMode::Ready, "Ready".to_string())
        };

        Self { fill, mode, label }
    }

    /// RGB tint for the bar.
    pub fn tint(&self) -> [f32; 3] {
        match self.mode {
            SprintMode::Sprinting => SPRINT_TINT,
            SprintMode::Cooldown => COOLDOWN_TINT,
            SprintMode::Ready => SPRINT_TINT.map(|c| c * READY_DIM),
        }
    }
}
