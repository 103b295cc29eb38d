//! Locomotion Controller
//!
//! The single per-tick entry point. Each tick runs, in order:
//!
//! 1. Sample ground contact (once, before any movement)
//! 2. Sprint/stamina state machine
//! 3. Jump edge
//! 4. Speed resolver
//! 5. Kinematic integration, submitted to the `Mover`

use tracing::debug;

use crate::game::config::{ConfigError, LocomotionConfig};
use crate::game::events::LocomotionEvent;
use crate::game::input::InputFrame;
use crate::game::kinematics::{Displacement, Facing, Mover};
use crate::game::speed::effective_speed;
use crate::game::stamina::sanitize_dt;
use crate::game::state::LocomotionState;

/// Result of a tick.
#[derive(Debug, Default)]
pub struct TickResult {
    /// Displacement submitted to the mover
    pub displacement: Displacement,
    /// Horizontal speed used this tick
    pub speed: f32,
    /// Whether a jump fired this tick
    pub jumped: bool,
    /// Events generated this tick
    pub events: Vec<LocomotionEvent>,
}

/// Owns one actor's locomotion config and state.
#[derive(Clone, Debug)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
    tick: u32,
}

impl LocomotionController {
    /// Create a controller, rejecting invalid tuning.
    pub fn new(config: LocomotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: LocomotionState::new(&config),
            config,
            tick: 0,
        })
    }

    /// Tuning in use.
    #[inline]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Read-only state.
    #[inline]
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Number of ticks advanced so far (zero-duration ticks excluded).
    #[inline]
    pub fn tick_count(&self) -> u32 {
        self.tick
    }

    /// Run one simulation tick.
    ///
    /// A zero (or invalid) `dt` does nothing, and any input on that call is
    /// dropped: a jump pressed on a zero-length tick never fires. A missing
    /// `facing` keeps input in local space; a missing ground signal counts as
    /// airborne.
    pub fn tick(
        &mut self,
        input: &InputFrame,
        dt: f32,
        facing: Option<&dyn Facing>,
        mover: &mut dyn Mover,
    ) -> TickResult {
        let mut result = TickResult::default();

        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return result;
        }

        let input = input.sanitized();
        let grounded = mover.is_grounded().unwrap_or(false);
        self.state.is_grounded = grounded;
        self.tick += 1;

        let transition = self.state.sprint.update(&self.config, dt, input.sprint_held());
        result.events = LocomotionEvent::from_transition(
            self.tick,
            &transition,
            self.state.sprint.stamina(),
        );

        if input.jump_pressed() && self.state.body.jump(&self.config, grounded) {
            let velocity = self.state.body.vertical_velocity();
            debug!(tick = self.tick, velocity, "jump");
            result.jumped = true;
            result.events.push(LocomotionEvent::jumped(self.tick, velocity));
        }

        result.speed = effective_speed(
            self.config.move_speed,
            self.config.sprint_multiplier,
            self.state.sprint.is_sprinting(),
        );

        result.displacement = self.state.body.integrate(
            &self.config,
            result.speed,
            dt,
            input.move_axes,
            facing,
            grounded,
        );
        result.displacement.submit(mover);

        #[cfg(feature = "debug-tracing")]
        tracing::trace!(
            tick = self.tick,
            grounded,
            speed = result.speed,
            displacement = %result.displacement.total(),
            "locomotion tick"
        );

        result
    }
}
