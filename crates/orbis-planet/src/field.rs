//! Gravity and atmospheric drag around a planet.
//!
//! The field has three regimes by distance `d` from the planet centre:
//! outside the atmosphere (no effect), inside the atmosphere (input velocity
//! damped toward the surface plus an inverse-square pull) and below the
//! ground radius (constant-magnitude pull, input velocity discarded). The two
//! pull terms agree at `d == ground_radius`.

use glam::Vec2;

/// Multiplier applied to the gravity constant for the pull term.
pub const PULL_FACTOR: f32 = 1.2;

/// Fraction of the atmosphere height that still counts as "near ground".
pub const NEAR_GROUND_FRACTION: f32 = 0.25;

/// Radii and strength describing a planet's influence field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldModel {
    /// Radius of the solid surface.
    pub ground_radius: f32,
    /// Thickness of the atmosphere band above the ground.
    pub atmosphere_height: f32,
    /// Surface gravity factor times `ground_radius²`.
    pub gravity_constant: f32,
}

impl FieldModel {
    /// Outer edge of the influence field.
    #[inline]
    pub fn full_height(&self) -> f32 {
        self.ground_radius + self.atmosphere_height
    }

    /// Velocity of an object at `point` after gravity and drag from a planet
    /// centred at `center` have been applied to `velocity`.
    pub fn adjusted_effect_velocity(&self, center: Vec2, point: Vec2, velocity: Vec2) -> Vec2 {
        let to_center = center - point;
        let dst = to_center.length();
        if dst == 0.0 || dst >= self.full_height() {
            return velocity;
        }

        let pull = PULL_FACTOR * self.gravity_constant;
        if dst < self.ground_radius {
            return to_center * (pull / dst / (self.ground_radius * self.ground_radius));
        }

        let drag = (dst - self.ground_radius) / self.atmosphere_height;
        velocity * drag + to_center * (pull / (dst * dst * dst))
    }

    /// Whether `point` lies strictly inside the influence field.
    pub fn contains(&self, center: Vec2, point: Vec2) -> bool {
        center.distance(point) < self.full_height()
    }

    /// Whether `point` is within a quarter of the atmosphere of the ground.
    pub fn is_near_ground(&self, center: Vec2, point: Vec2) -> bool {
        center.distance(point) - self.ground_radius
            < NEAR_GROUND_FRACTION * self.atmosphere_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f32 = 5_000.0;

    fn model() -> FieldModel {
        FieldModel {
            ground_radius: 100.0,
            atmosphere_height: 40.0,
            gravity_constant: G,
        }
    }

    fn at(d: f32) -> Vec2 {
        Vec2::new(d, 0.0)
    }

    #[test]
    fn test_center_is_identity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(model().adjusted_effect_velocity(Vec2::ZERO, Vec2::ZERO, v), v);
    }

    #[test]
    fn test_outside_influence_is_identity() {
        let field = model();
        let velocities = [Vec2::ZERO, Vec2::new(1.0, 2.0), Vec2::new(-500.0, 7.5)];
        for v in velocities {
            for d in [140.0, 140.001, 500.0, 1e6] {
                assert_eq!(field.adjusted_effect_velocity(Vec2::ZERO, at(d), v), v);
            }
        }
    }

    #[test]
    fn test_below_ground_ignores_input_velocity() {
        let field = model();
        let a = field.adjusted_effect_velocity(Vec2::ZERO, at(50.0), Vec2::new(99.0, 99.0));
        let b = field.adjusted_effect_velocity(Vec2::ZERO, at(50.0), Vec2::ZERO);
        assert_eq!(a, b);
    }

    #[test]
    fn test_below_ground_pull_points_to_center_with_constant_magnitude() {
        let field = model();
        let expected = PULL_FACTOR * G / (100.0 * 100.0);
        for d in [1.0, 25.0, 50.0, 99.0] {
            let r = field.adjusted_effect_velocity(Vec2::ZERO, at(d), Vec2::ZERO);
            assert!(r.x < 0.0, "pull must point toward the centre at d={d}");
            assert!(r.y.abs() < 1e-6);
            assert!(
                (r.length() - expected).abs() < expected * 1e-4,
                "d={d}: {} vs {expected}",
                r.length()
            );
        }
    }

    #[test]
    fn test_atmosphere_pull_is_inverse_square() {
        let field = model();
        for d in [100.0, 110.0, 125.0, 139.0] {
            let r = field.adjusted_effect_velocity(Vec2::ZERO, at(d), Vec2::ZERO);
            let expected = PULL_FACTOR * G / (d * d);
            assert!((r.length() - expected).abs() < expected * 1e-4);
            assert!(r.x < 0.0);
        }
    }

    #[test]
    fn test_atmosphere_drag_scales_velocity_by_altitude() {
        let field = FieldModel {
            gravity_constant: 0.0,
            ..model()
        };
        let v = Vec2::new(0.0, 10.0);
        let surface = field.adjusted_effect_velocity(Vec2::ZERO, at(100.0), v);
        let middle = field.adjusted_effect_velocity(Vec2::ZERO, at(120.0), v);
        let edge = field.adjusted_effect_velocity(Vec2::ZERO, at(139.0), v);
        assert!(surface.length() < 1e-6);
        assert!((middle.y - 5.0).abs() < 1e-4);
        assert!((edge.y - 9.75).abs() < 1e-4);
    }

    #[test]
    fn test_continuous_at_ground_radius() {
        let field = model();
        let eps = 1e-3;
        let below = field.adjusted_effect_velocity(Vec2::ZERO, at(100.0 - eps), Vec2::ZERO);
        let above = field.adjusted_effect_velocity(Vec2::ZERO, at(100.0 + eps), Vec2::ZERO);
        let exact = field.adjusted_effect_velocity(Vec2::ZERO, at(100.0), Vec2::ZERO);
        let magnitude = PULL_FACTOR * G / (100.0 * 100.0);
        assert!((below - above).length() < magnitude * 1e-3, "{below:?} vs {above:?}");
        assert!((exact - below).length() < magnitude * 1e-3);

        // drag term vanishes at the surface, so input velocity barely matters
        let v = Vec2::new(30.0, -20.0);
        let above_moving = field.adjusted_effect_velocity(Vec2::ZERO, at(100.0 + eps), v);
        assert!((above_moving - below).length() < magnitude * 1e-2 + v.length() * eps / 40.0);
    }

    #[test]
    fn test_offset_center() {
        let field = model();
        let center = Vec2::new(1_000.0, -2_000.0);
        let point = center + Vec2::new(0.0, 120.0);
        let r = field.adjusted_effect_velocity(center, point, Vec2::ZERO);
        assert!(r.y < 0.0);
        assert!(r.x.abs() < 1e-4);
    }

    #[test]
    fn test_full_height_and_near_ground() {
        let field = model();
        assert_eq!(field.full_height(), 140.0);
        assert!(field.is_near_ground(Vec2::ZERO, at(105.0)));
        assert!(field.is_near_ground(Vec2::ZERO, at(50.0)));
        assert!(!field.is_near_ground(Vec2::ZERO, at(110.0)));
        assert!(!field.is_near_ground(Vec2::ZERO, at(120.0)));
    }

    #[test]
    fn test_contains() {
        let field = model();
        assert!(field.contains(Vec2::ZERO, at(139.9)));
        assert!(!field.contains(Vec2::ZERO, at(140.0)));
    }
}
