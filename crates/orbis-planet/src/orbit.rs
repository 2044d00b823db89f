//! Circular orbit around a star system combined with independent spin.

use glam::Vec2;

/// Point at `radius` along `angle` (radians) from the origin.
///
/// `sin`/`cos` reduce their argument internally, so unbounded angles are fine.
#[inline]
pub fn polar(angle: f32, radius: f32) -> Vec2 {
    Vec2::from_angle(angle) * radius
}

/// Two independent angular motions: revolution around the system centre and
/// rotation around the body's own axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalState {
    /// Angle around the system centre in radians.
    pub orbit_angle: f32,
    /// Radians per second around the system centre.
    pub orbit_speed: f32,
    /// Distance from the system centre.
    pub orbit_radius: f32,
    /// The body's own rotation in radians.
    pub spin_angle: f32,
    /// Radians per second around the body's own axis.
    pub spin_speed: f32,
}

impl OrbitalState {
    /// Advance both angles by `dt` seconds. Angles are never wrapped.
    pub fn advance(&mut self, dt: f32) {
        self.orbit_angle += self.orbit_speed * dt;
        self.spin_angle += self.spin_speed * dt;
    }

    /// Offset of the body from its system centre.
    pub fn offset(&self) -> Vec2 {
        polar(self.orbit_angle, self.orbit_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    fn state() -> OrbitalState {
        OrbitalState {
            orbit_angle: 0.0,
            orbit_speed: 0.5,
            orbit_radius: 300.0,
            spin_angle: 1.0,
            spin_speed: -2.0,
        }
    }

    #[test]
    fn test_polar_cardinal_directions() {
        assert!((polar(0.0, 10.0) - Vec2::new(10.0, 0.0)).length() < 1e-4);
        assert!((polar(FRAC_PI_2, 10.0) - Vec2::new(0.0, 10.0)).length() < 1e-4);
        assert!((polar(PI, 10.0) - Vec2::new(-10.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_polar_tolerates_large_angles() {
        let wrapped = polar(1.0, 50.0);
        let unwrapped = polar(1.0 + 100.0 * TAU, 50.0);
        assert!(
            (wrapped - unwrapped).length() < 0.05,
            "{wrapped:?} vs {unwrapped:?}"
        );
        assert!((unwrapped.length() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_advance_moves_both_angles_independently() {
        let mut orbit = state();
        orbit.advance(2.0);
        assert!((orbit.orbit_angle - 1.0).abs() < 1e-6);
        assert!((orbit.spin_angle - (-3.0)).abs() < 1e-6);
        assert_eq!(orbit.orbit_radius, 300.0);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut orbit = state();
        orbit.advance(0.0);
        assert_eq!(orbit, state());
    }

    #[test]
    fn test_offset_keeps_constant_radius() {
        let mut orbit = state();
        for _ in 0..100 {
            orbit.advance(0.37);
            assert!((orbit.offset().length() - 300.0).abs() < 1e-2);
        }
    }
}
