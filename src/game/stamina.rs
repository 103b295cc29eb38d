//! Sprint / Stamina State Machine
//!
//! Decides once per tick whether sprint is granted, and advances the stamina,
//! cooldown and regen-delay timers. Step order is load-bearing:
//!
//! 1. Grant sprint if requested, available, and stamina remains
//! 2. While sprinting: drain, then check exhaustion, then the duration cap
//! 3. Otherwise: handle the release edge, reset the idle sprint timer
//! 4. Count the cooldown down (every tick sprint is unavailable, except the
//!    tick that engaged it)
//! 5. Regenerate (only on ticks that ended without sprint)

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::game::config::LocomotionConfig;

/// Why a sprint ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Sprint request released by the player
    Released,
    /// Stamina ran out (forces cooldown)
    Exhausted,
    /// Continuous-sprint cap reached (forces cooldown)
    MaxDuration,
}

impl StopReason {
    /// Forced stops lock sprint out for the cooldown period.
    #[inline]
    pub fn is_forced(self) -> bool {
        !matches!(self, StopReason::Released)
    }
}

/// Edges observed during one [`SprintStamina::update`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SprintTransition {
    /// Sprint became active this tick
    pub started: bool,
    /// Sprint ended this tick, and why
    pub stopped: Option<StopReason>,
    /// Cooldown engaged by this tick's stop (0 when none)
    pub cooldown_engaged: f32,
    /// Cooldown finished this tick, sprint is available again
    pub cooldown_expired: bool,
    /// Regen delay ran out this tick with stamina below max
    pub regen_resumed: bool,
    /// Stamina reached max this tick
    pub refilled: bool,
}

impl SprintTransition {
    /// True when nothing notable happened.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        *self == Self::default()
    }
}

/// Sprint and stamina runtime state for one actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SprintStamina {
    stamina: f32,
    stamina_max: f32,
    is_sprinting: bool,
    sprint_available: bool,
    sprint_cooldown_timer: f32,
    sprint_timer: f32,
    regen_delay_timer: f32,
}

impl SprintStamina {
    /// Fresh state: full stamina, sprint available, all timers zero.
    pub fn new(config: &LocomotionConfig) -> Self {
        let stamina_max = config.stamina_max.max(0.0);
        Self {
            stamina: stamina_max,
            stamina_max,
            is_sprinting: false,
            sprint_available: true,
            sprint_cooldown_timer: 0.0,
            sprint_timer: 0.0,
            regen_delay_timer: 0.0,
        }
    }

    // =========================================================================
    // Read-only accessors
    // =========================================================================

    /// Current stamina.
    #[inline]
    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    /// Stamina capacity.
    #[inline]
    pub fn stamina_max(&self) -> f32 {
        self.stamina_max
    }

    /// `stamina / stamina_max`, or 0 when the capacity is not positive.
    #[inline]
    pub fn stamina_fraction(&self) -> f32 {
        if self.stamina_max > 0.0 {
            self.stamina / self.stamina_max
        } else {
            0.0
        }
    }

    /// Sprint granted this tick.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    /// False while serving a cooldown.
    #[inline]
    pub fn sprint_available(&self) -> bool {
        self.sprint_available
    }

    /// Remaining cooldown.
    #[inline]
    pub fn sprint_cooldown_timer(&self) -> f32 {
        self.sprint_cooldown_timer
    }

    /// Continuous sprint duration so far.
    #[inline]
    pub fn sprint_timer(&self) -> f32 {
        self.sprint_timer
    }

    /// Remaining delay before stamina regenerates.
    #[inline]
    pub fn regen_delay_remaining(&self) -> f32 {
        self.regen_delay_timer
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Advance the state machine by `dt` seconds.
    ///
    /// A zero `dt` changes nothing. Negative or non-finite `dt` is treated as
    /// zero.
    pub fn update(
        &mut self,
        config: &LocomotionConfig,
        dt: f32,
        sprint_requested: bool,
    ) -> SprintTransition {
        let mut transition = SprintTransition::default();

        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return transition;
        }

        let was_sprinting = self.is_sprinting;
        let regen_delay_before = self.regen_delay_timer;
        let stamina_before = self.stamina;

        self.is_sprinting =
            sprint_requested && self.sprint_available && self.stamina > 0.0;

        if self.is_sprinting {
            if !was_sprinting {
                transition.started = true;
                debug!(stamina = self.stamina, "sprint started");
            }

            self.stamina =
                (self.stamina - config.stamina_drain_rate * dt).clamp(0.0, self.stamina_max);
            if self.stamina <= 0.0 {
                self.force_stop(config);
                transition.stopped = Some(StopReason::Exhausted);
                transition.cooldown_engaged = self.sprint_cooldown_timer;
                debug!(cooldown = self.sprint_cooldown_timer, "sprint stopped: exhausted");
            } else {
                self.sprint_timer += dt;
                if self.sprint_timer >= config.sprint_max_duration {
                    self.force_stop(config);
                    transition.stopped = Some(StopReason::MaxDuration);
                    transition.cooldown_engaged = self.sprint_cooldown_timer;
                    debug!(
                        stamina = self.stamina,
                        cooldown = self.sprint_cooldown_timer,
                        "sprint stopped: max duration reached"
                    );
                }
            }

            // Continuous sprinting keeps deferring regen.
            self.regen_delay_timer = config.stamina_regen_delay.max(0.0);
        } else {
            if was_sprinting {
                let forced = if self.stamina <= 0.0 {
                    Some(StopReason::Exhausted)
                } else if self.sprint_timer >= config.sprint_max_duration {
                    Some(StopReason::MaxDuration)
                } else {
                    None
                };

                if forced.is_some() {
                    self.sprint_available = false;
                    self.sprint_cooldown_timer = config.sprint_cooldown.max(0.0);
                    transition.cooldown_engaged = self.sprint_cooldown_timer;
                }
                self.regen_delay_timer = config.stamina_regen_delay.max(0.0);

                let reason = forced.unwrap_or(StopReason::Released);
                transition.stopped = Some(reason);
                debug!(?reason, stamina = self.stamina, "sprint stopped");
            } else {
                self.sprint_timer = 0.0;
            }
        }

        // A lockout engaged this tick starts counting down on the next one.
        let lockout_engaged = transition.stopped.is_some_and(StopReason::is_forced)
            && self.sprint_cooldown_timer > 0.0;
        if !self.sprint_available && !lockout_engaged {
            self.sprint_cooldown_timer -= dt;
            if self.sprint_cooldown_timer <= 0.0 {
                self.sprint_available = true;
                self.sprint_cooldown_timer = 0.0;
                transition.cooldown_expired = true;
                debug!("sprint cooldown expired");
            }
        }

        if !self.is_sprinting {
            if self.regen_delay_timer > 0.0 {
                self.regen_delay_timer = (self.regen_delay_timer - dt).max(0.0);
                if self.regen_delay_timer == 0.0 && self.stamina < self.stamina_max {
                    transition.regen_resumed = true;
                }
            } else if self.stamina < self.stamina_max {
                self.stamina =
                    (self.stamina + config.stamina_regen_rate * dt).clamp(0.0, self.stamina_max);
                if regen_delay_before > 0.0 {
                    transition.regen_resumed = true;
                }
                if self.stamina >= self.stamina_max && stamina_before < self.stamina_max {
                    transition.refilled = true;
                }
            }
        }

        #[cfg(feature = "debug-tracing")]
        tracing::trace!(
            dt,
            stamina = self.stamina,
            sprinting = self.is_sprinting,
            available = self.sprint_available,
            cooldown = self.sprint_cooldown_timer,
            sprint_timer = self.sprint_timer,
            regen_delay = self.regen_delay_timer,
            "sprint state"
        );

        transition
    }

    /// Shared side effects of exhaustion and the duration cap.
    fn force_stop(&mut self, config: &LocomotionConfig) {
        self.is_sprinting = false;
        self.sprint_available = false;
        self.sprint_cooldown_timer = config.sprint_cooldown.max(0.0);
        self.sprint_timer = 0.0;
        self.regen_delay_timer = config.stamina_regen_delay.max(0.0);
    }
}

/// Clamp a tick duration into the defined domain.
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!(dt, "invalid tick duration, treating as zero");
        0.0
    }
}
