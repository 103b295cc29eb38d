//! Kinematic Integrator
//!
//! Turns the resolved speed and input axes into a displacement, and keeps the
//! vertical velocity (gravity accumulator) between ticks. Collision is not
//! resolved here: displacement is handed to an external [`Mover`].

use serde::{Serialize, Deserialize};

use crate::core::vec::{Vec2, Vec3};
use crate::game::config::LocomotionConfig;

/// Downward velocity held while grounded, so ground contact keeps reporting
/// "grounded" instead of flickering between ticks.
pub const GROUNDED_STICK_VELOCITY: f32 = -2.0;

// =============================================================================
// COLLABORATOR INTERFACES
// =============================================================================

/// Collision/physics primitive that owns the actor's body.
pub trait Mover {
    /// Displace the actor, resolving collisions internally.
    fn move_by(&mut self, delta: Vec3);

    /// Ground contact, or `None` when no signal is available.
    fn is_grounded(&self) -> Option<bool>;
}

/// Orientation used to map local input into world space.
pub trait Facing {
    /// Rotate a local-space direction into world space.
    fn transform_direction(&self, local: Vec3) -> Vec3;
}

/// Rotation about the up axis, in degrees.
///
/// Positive yaw turns clockwise seen from above: a yaw of 90 maps local
/// forward (+Z) onto world right (+X).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Yaw {
    degrees: f32,
    sin: f32,
    cos: f32,
}

impl Yaw {
    /// No rotation.
    pub const IDENTITY: Self = Self { degrees: 0.0, sin: 0.0, cos: 1.0 };

    /// Create from an angle in degrees.
    pub fn from_degrees(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { degrees, sin, cos }
    }

    /// Angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.degrees
    }
}

impl Default for Yaw {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Facing for Yaw {
    #[inline]
    fn transform_direction(&self, local: Vec3) -> Vec3 {
        Vec3::new(
            local.x * self.cos + local.z * self.sin,
            local.y,
            -local.x * self.sin + local.z * self.cos,
        )
    }
}

// =============================================================================
// DISPLACEMENT
// =============================================================================

/// Movement produced by one tick, submitted as two separate moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    /// Planar movement in world space
    pub horizontal: Vec3,
    /// Vertical movement (only Y is non-zero)
    pub vertical: Vec3,
}

impl Displacement {
    /// Combined displacement.
    #[inline]
    pub fn total(&self) -> Vec3 {
        self.horizontal + self.vertical
    }

    /// Submit to the movement primitive: horizontal first, then vertical.
    pub fn submit(&self, mover: &mut dyn Mover) {
        mover.move_by(self.horizontal);
        mover.move_by(self.vertical);
    }
}

// =============================================================================
// BODY
// =============================================================================

/// Vertical motion carried across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    vertical_velocity: f32,
}

impl KinematicBody {
    /// Body at rest.
    pub const fn new() -> Self {
        Self { vertical_velocity: 0.0 }
    }

    /// Current vertical velocity.
    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Edge-triggered jump. Sets the launch velocity only when grounded.
    ///
    /// Returns whether the jump fired.
    pub fn jump(&mut self, config: &LocomotionConfig, grounded: bool) -> bool {
        if !grounded {
            return false;
        }
        self.vertical_velocity = config.jump_velocity();
        true
    }

    /// Integrate one tick.
    ///
    /// `speed` is the resolved horizontal speed. A missing `facing` leaves the
    /// input in local space. `grounded` must be the value sampled before any
    /// movement this tick.
    pub fn integrate(
        &mut self,
        config: &LocomotionConfig,
        speed: f32,
        dt: f32,
        move_axes: Vec2,
        facing: Option<&dyn Facing>,
        grounded: bool,
    ) -> Displacement {
        let local = Vec3::from_planar(move_axes.finite_or_zero());
        let world = match facing {
            Some(facing) => facing.transform_direction(local),
            None => local,
        };
        let horizontal = world.scale(speed * dt);

        self.vertical_velocity += config.gravity * dt;
        if grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = GROUNDED_STICK_VELOCITY;
        }
        let vertical = Vec3::vertical(self.vertical_velocity * dt);

        Displacement { horizontal, vertical }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[derive(Default)]
    struct RecordingMover {
        moves: Vec<Vec3>,
    }

    impl Mover for RecordingMover {
        fn move_by(&mut self, delta: Vec3) {
            self.moves.push(delta);
        }

        fn is_grounded(&self) -> Option<bool> {
            None
        }
    }

    #[test]
    fn test_yaw_identity() {
        let v = Vec3::new(0.3, 0.0, -0.7);
        assert_eq!(Yaw::IDENTITY.transform_direction(v), v);
        assert!(close(Yaw::from_degrees(0.0).transform_direction(v), v));
    }

    #[test]
    fn test_yaw_quarter_turn_maps_forward_to_right() {
        let yaw = Yaw::from_degrees(90.0);
        assert!(close(yaw.transform_direction(Vec3::FORWARD), Vec3::RIGHT));
        assert!(close(yaw.transform_direction(Vec3::RIGHT), -Vec3::FORWARD));
    }

    #[test]
    fn test_horizontal_scaled_by_speed_and_dt() {
        let config = LocomotionConfig::controller();
        let mut body = KinematicBody::new();
        let d = body.integrate(&config, 5.0, 0.5, Vec2::new(0.0, 1.0), None, true);
        assert!(close(d.horizontal, Vec3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn test_horizontal_follows_facing() {
        let config = LocomotionConfig::controller();
        let mut body = KinematicBody::new();
        let yaw = Yaw::from_degrees(90.0);
        let d = body.integrate(&config, 2.0, 1.0, Vec2::new(0.0, 1.0), Some(&yaw), true);
        assert!(close(d.horizontal, Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_non_finite_axes_ignored() {
        let config = LocomotionConfig::controller();
        let mut body = KinematicBody::new();
        let d = body.integrate(&config, 5.0, 1.0, Vec2::new(f32::NAN, 1.0), None, true);
        assert!(close(d.horizontal, Vec3::new(0.0, 0.0, 5.0)));
    }

    #[test]
    fn test_gravity_accumulates_in_air() {
        let config = LocomotionConfig { gravity: -10.0, ..LocomotionConfig::controller() };
        let mut body = KinematicBody::new();

        let d = body.integrate(&config, 0.0, 0.5, Vec2::ZERO, None, false);
        assert_eq!(body.vertical_velocity(), -5.0);
        assert_eq!(d.vertical, Vec3::vertical(-2.5));

        body.integrate(&config, 0.0, 0.5, Vec2::ZERO, None, false);
        assert_eq!(body.vertical_velocity(), -10.0);
    }

    #[test]
    fn test_grounded_clamps_to_stick_velocity() {
        let config = LocomotionConfig { gravity: -10.0, ..LocomotionConfig::controller() };
        let mut body = KinematicBody::new();
        let d = body.integrate(&config, 0.0, 0.1, Vec2::ZERO, None, true);
        assert_eq!(body.vertical_velocity(), GROUNDED_STICK_VELOCITY);
        assert!(close(d.vertical, Vec3::vertical(-0.2)));
    }

    #[test]
    fn test_jump_requires_ground() {
        let config = LocomotionConfig::controller();
        let mut body = KinematicBody::new();
        assert!(!body.jump(&config, false));
        assert_eq!(body.vertical_velocity(), 0.0);

        assert!(body.jump(&config, true));
        // sqrt(1.2 * 3.0 * 9.8)
        assert!((body.vertical_velocity() - 35.28f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_jump_survives_grounded_clamp() {
        let config = LocomotionConfig::controller();
        let mut body = KinematicBody::new();
        body.jump(&config, true);
        let launch = body.vertical_velocity();

        body.integrate(&config, 0.0, 0.02, Vec2::ZERO, None, true);
        assert!(body.vertical_velocity() > 0.0);
        assert!((body.vertical_velocity() - (launch + config.gravity * 0.02)).abs() < 1e-5);
    }

    #[test]
    fn test_motor_preset_jumps_lower() {
        let mut controller_body = KinematicBody::new();
        let mut motor_body = KinematicBody::new();
        let motor = LocomotionConfig { jump_height: 1.2, gravity: -9.8, ..LocomotionConfig::motor() };

        controller_body.jump(&LocomotionConfig::controller(), true);
        motor_body.jump(&motor, true);
        assert!(motor_body.vertical_velocity() < controller_body.vertical_velocity());
    }

    #[test]
    fn test_submit_order() {
        let d = Displacement {
            horizontal: Vec3::new(1.0, 0.0, 0.0),
            vertical: Vec3::vertical(-0.5),
        };
        let mut mover = RecordingMover::default();
        d.submit(&mut mover);
        assert_eq!(mover.moves, vec![d.horizontal, d.vertical]);
        assert_eq!(d.total(), Vec3::new(1.0, -0.5, 0.0));
    }
}
