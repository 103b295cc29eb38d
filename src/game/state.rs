//! Actor Locomotion State
//!
//! Everything the controller carries between ticks. Mutated only by
//! `LocomotionController::tick`; everything else sees read-only accessors.

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, compute_state_hash};
use crate::game::config::LocomotionConfig;
use crate::game::kinematics::KinematicBody;
use crate::game::stamina::SprintStamina;

/// Per-actor locomotion state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    pub(crate) sprint: SprintStamina,
    pub(crate) body: KinematicBody,
    /// Last sampled ground contact (owned by the collision primitive)
    pub(crate) is_grounded: bool,
}

impl LocomotionState {
    /// Fresh state for a newly activated actor.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            sprint: SprintStamina::new(config),
            body: KinematicBody::new(),
            is_grounded: false,
        }
    }

    /// Sprint and stamina view.
    #[inline]
    pub fn sprint(&self) -> &SprintStamina {
        &self.sprint
    }

    /// Current stamina.
    #[inline]
    pub fn stamina(&self) -> f32 {
        self.sprint.stamina()
    }

    /// Stamina capacity.
    #[inline]
    pub fn stamina_max(&self) -> f32 {
        self.sprint.stamina_max()
    }

    /// `stamina / stamina_max`, 0 when the capacity is not positive.
    #[inline]
    pub fn stamina_fraction(&self) -> f32 {
        self.sprint.stamina_fraction()
    }

    /// Sprint granted on the last tick.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprint.is_sprinting()
    }

    /// False while serving a cooldown.
    #[inline]
    pub fn sprint_available(&self) -> bool {
        self.sprint.sprint_available()
    }

    /// Remaining cooldown.
    #[inline]
    pub fn sprint_cooldown_timer(&self) -> f32 {
        self.sprint.sprint_cooldown_timer()
    }

    /// Continuous sprint duration.
    #[inline]
    pub fn sprint_timer(&self) -> f32 {
        self.sprint.sprint_timer()
    }

    /// Remaining regen delay.
    #[inline]
    pub fn regen_delay_remaining(&self) -> f32 {
        self.sprint.regen_delay_remaining()
    }

    /// Vertical velocity carried across ticks.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.body.vertical_velocity()
    }

    /// Ground contact sampled at the start of the last tick.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    /// Hash this state for replay verification.
    pub fn compute_hash(&self, tick: u32) -> StateHash {
        compute_state_hash(tick, |hasher| {
            hasher.update_f32(self.sprint.stamina());
            hasher.update_f32(self.sprint.stamina_max());
            hasher.update_bool(self.sprint.is_sprinting());
            hasher.update_bool(self.sprint.sprint_available());
            hasher.update_f32(self.sprint.sprint_cooldown_timer());
            hasher.update_f32(self.sprint.sprint_timer());
            hasher.update_f32(self.sprint.regen_delay_remaining());
            hasher.update_f32(self.body.vertical_velocity());
            hasher.update_bool(self.is_grounded);
        })
    }
}
