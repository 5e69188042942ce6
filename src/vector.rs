/*
 * Vector Module
 *
 * 2D vector helpers used by the force model and integrator. Addition,
 * subtraction, scaling and length come straight from glam's Vec2; this
 * module adds the two magnitude operations the flocking rules rely on.
 */

pub use glam::Vec2;

// Magnitude helpers for Vec2
pub trait VectorExt: Sized {
    // Rescale to length `k`, keeping direction. The zero vector is returned as-is.
    fn normalize_to(self, k: f32) -> Self;

    // Clamp the length to `max`; shorter vectors are returned unchanged.
    fn truncate_to(self, max: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn normalize_to(self, k: f32) -> Self {
        let length = self.length();
        if length > 0.0 {
            self * (k / length)
        } else {
            self
        }
    }

    #[inline]
    fn truncate_to(self, max: f32) -> Self {
        if self.length() > max {
            self.normalize_to(max)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn normalize_to_rescales_length() {
        let v = Vec2::new(3.0, 4.0).normalize_to(10.0);
        assert!((v.length() - 10.0).abs() < EPS);
        assert!((v.x - 6.0).abs() < EPS);
        assert!((v.y - 8.0).abs() < EPS);
    }

    #[test]
    fn normalize_to_leaves_zero_vector_alone() {
        for k in [0.0, 1.0, -3.5, 1000.0] {
            assert_eq!(Vec2::ZERO.normalize_to(k), Vec2::ZERO);
        }
    }

    #[test]
    fn normalize_to_negative_magnitude_flips_direction() {
        let v = Vec2::new(2.0, 0.0).normalize_to(-0.5);
        assert!((v.x + 0.5).abs() < EPS);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn truncate_to_clamps_long_vectors() {
        let samples = [
            Vec2::new(10.0, -3.0),
            Vec2::new(-0.01, 0.02),
            Vec2::new(1e4, 1e4),
            Vec2::new(0.0, -7.0),
        ];
        for v in samples {
            for max in [0.0, 0.02, 1.0, 2.0, 50.0] {
                assert!(v.truncate_to(max).length() <= max + EPS);
            }
        }
    }

    #[test]
    fn truncate_to_is_noop_on_short_vectors() {
        let v = Vec2::new(0.3, -0.4);
        assert_eq!(v.truncate_to(0.5), v);
        assert_eq!(v.truncate_to(2.0), v);
        let clamped = Vec2::new(30.0, 40.0).truncate_to(5.0);
        assert_eq!(clamped.truncate_to(5.0 + EPS), clamped);
    }
}
