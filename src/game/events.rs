//! Locomotion Events
//!
//! Edges produced by the controller, returned with each tick for presentation
//! (HUD flashes, audio cues) and replay comparison.

use serde::{Serialize, Deserialize};

use crate::game::stamina::{SprintTransition, StopReason};

/// Event payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LocomotionEventData {
    /// Sprint was granted after not being active
    SprintStarted {
        stamina: f32,
    },

    /// Sprint ended
    SprintStopped {
        reason: StopReason,
        stamina: f32,
        /// Lockout engaged by a forced stop (0 for a plain release)
        cooldown: f32,
    },

    /// Cooldown finished, sprint available again
    CooldownExpired,

    /// Regen delay elapsed, stamina will refill
    RegenResumed {
        stamina: f32,
    },

    /// Stamina back at max
    StaminaRefilled,

    /// Grounded jump fired
    Jumped {
        velocity: f32,
    },
}

/// An event with the tick it occurred on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocomotionEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub data: LocomotionEventData,
}

impl LocomotionEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: LocomotionEventData) -> Self {
        Self { tick, data }
    }

    /// Create jumped event.
    pub fn jumped(tick: u32, velocity: f32) -> Self {
        Self::new(tick, LocomotionEventData::Jumped { velocity })
    }

    /// Expand a state machine transition into events, in step order.
    ///
    /// `stamina` is the value after the update.
    pub fn from_transition(tick: u32, transition: &SprintTransition, stamina: f32) -> Vec<Self> {
        let mut events = Vec::new();

        if transition.started {
            events.push(Self::new(tick, LocomotionEventData::SprintStarted { stamina }));
        }
        if let Some(reason) = transition.stopped {
            events.push(Self::new(
                tick,
                LocomotionEventData::SprintStopped {
                    reason,
                    stamina,
                    cooldown: transition.cooldown_engaged,
                },
            ));
        }
        if transition.cooldown_expired {
            events.push(Self::new(tick, LocomotionEventData::CooldownExpired));
        }
        if transition.regen_resumed {
            events.push(Self::new(tick, LocomotionEventData::RegenResumed { stamina }));
        }
        if transition.refilled {
            events.push(Self::new(tick, LocomotionEventData::StaminaRefilled));
        }

        events
    }
}
