//! Speed Resolver

/// Horizontal speed for this tick: `base_speed`, scaled by
/// `sprint_multiplier` only while sprint is granted.
#[inline]
pub fn effective_speed(base_speed: f32, sprint_multiplier: f32, is_sprinting: bool) -> f32 {
    base_speed * if is_sprinting { sprint_multiplier } else { 1.0 }
}
