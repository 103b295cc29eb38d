//! Headless Replay
//!
//! Drives a controller from a recorded input stream against a flat ground
//! plane. Identical recordings must end in identical state hashes.

use tracing::info;

use crate::core::hash::StateHash;
use crate::core::vec::Vec3;
use crate::game::config::{ConfigError, LocomotionConfig};
use crate::game::controller::LocomotionController;
use crate::game::events::LocomotionEvent;
use crate::game::input::InputRecording;
use crate::game::kinematics::{Facing, Mover};
use crate::game::state::LocomotionState;

/// Minimal movement primitive: free space above an infinite plane.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatGround {
    position: Vec3,
    ground_height: f32,
    grounded: bool,
}

impl FlatGround {
    /// Actor standing on a plane at `ground_height`.
    pub fn new(ground_height: f32) -> Self {
        Self {
            position: Vec3::vertical(ground_height),
            ground_height,
            grounded: true,
        }
    }

    /// Current actor position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl Default for FlatGround {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Mover for FlatGround {
    fn move_by(&mut self, delta: Vec3) {
        self.position = self.position + delta;

        if self.position.y <= self.ground_height {
            self.position.y = self.ground_height;
            self.grounded = true;
        } else if delta.y != 0.0 {
            self.grounded = false;
        }
    }

    fn is_grounded(&self) -> Option<bool> {
        Some(self.grounded)
    }
}

/// Everything a replay produced.
#[derive(Debug)]
pub struct ReplayOutcome {
    /// State after the last tick
    pub final_state: LocomotionState,
    /// Every event, in tick order
    pub events: Vec<LocomotionEvent>,
    /// Hash of the final state
    pub final_hash: StateHash,
    /// Final actor position
    pub position: Vec3,
    /// Ticks simulated
    pub ticks: u32,
}

/// Replay a recording from a fresh controller.
pub fn replay(
    config: LocomotionConfig,
    recording: &InputRecording,
    facing: Option<&dyn Facing>,
) -> Result<ReplayOutcome, ConfigError> {
    let mut controller = LocomotionController::new(config)?;
    let mut ground = FlatGround::default();
    let mut events = Vec::new();

    for (_, frame) in recording.replay_iter() {
        let result = controller.tick(&frame, recording.dt, facing, &mut ground);
        events.extend(result.events);
    }

    let final_state = controller.state().clone();
    let final_hash = final_state.compute_hash(controller.tick_count());

    info!(
        ticks = controller.tick_count(),
        events = events.len(),
        hash = %hex::encode(final_hash),
        "replay finished"
    );

    Ok(ReplayOutcome {
        final_state,
        events,
        final_hash,
        position: ground.position(),
        ticks: controller.tick_count(),
    })
}
