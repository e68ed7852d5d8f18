//! Math utilities and types
//!
//! Provides fundamental math types for collision testing, backed by nalgebra.

pub use nalgebra::{
    Vector2, Vector3,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Rigid transform type (rotation and translation, no scale or shear)
pub type Isometry3 = nalgebra::Isometry3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }

    /// Minimum of two floats with full IEEE-754 semantics
    ///
    /// Unlike `f32::min`, a NaN operand makes the result NaN. Negative
    /// infinity wins over any finite value, and `min(+0.0, -0.0)` is `-0.0`.
    /// Ray/box slab tests depend on these rules: a zero direction component
    /// produces ±infinity slab distances that must order correctly.
    pub fn min(a: f32, b: f32) -> f32 {
        if a.is_nan() || b.is_nan() {
            return f32::NAN;
        }
        if a == b {
            // Distinguish the signed zeros, which compare equal
            return if a.is_sign_negative() { a } else { b };
        }
        if a < b { a } else { b }
    }

    /// Maximum of two floats with full IEEE-754 semantics
    ///
    /// Unlike `f32::max`, a NaN operand makes the result NaN. Positive
    /// infinity wins over any finite value, and `max(+0.0, -0.0)` is `+0.0`.
    pub fn max(a: f32, b: f32) -> f32 {
        if a.is_nan() || b.is_nan() {
            return f32::NAN;
        }
        if a == b {
            return if a.is_sign_positive() { a } else { b };
        }
        if a > b { a } else { b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_min_max_ordinary_values() {
        assert_eq!(utils::min(1.0, 2.0), 1.0);
        assert_eq!(utils::min(2.0, 1.0), 1.0);
        assert_eq!(utils::max(1.0, 2.0), 2.0);
        assert_eq!(utils::max(2.0, 1.0), 2.0);
        assert_eq!(utils::max(-3.0, -5.0), -3.0);
        assert_eq!(utils::min(-3.0, -5.0), -5.0);
    }

    #[test]
    fn test_min_max_nan_propagates() {
        assert!(utils::min(f32::NAN, 1.0).is_nan());
        assert!(utils::min(1.0, f32::NAN).is_nan());
        assert!(utils::max(f32::NAN, 1.0).is_nan());
        assert!(utils::max(1.0, f32::NAN).is_nan());
        // NaN wins even against infinity
        assert!(utils::max(f32::NAN, f32::INFINITY).is_nan());
        assert!(utils::min(f32::NAN, f32::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_min_max_infinities() {
        assert_eq!(utils::max(f32::INFINITY, 1.0e30), f32::INFINITY);
        assert_eq!(utils::max(f32::NEG_INFINITY, 1.0), 1.0);
        assert_eq!(utils::min(f32::NEG_INFINITY, -1.0e30), f32::NEG_INFINITY);
        assert_eq!(utils::min(f32::INFINITY, 1.0), 1.0);
        assert_eq!(utils::min(f32::INFINITY, f32::NEG_INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_min_max_signed_zeros() {
        // +0.0 and -0.0 compare equal, so the sign has to break the tie
        assert!(utils::max(0.0, -0.0).is_sign_positive());
        assert!(utils::max(-0.0, 0.0).is_sign_positive());
        assert!(utils::min(0.0, -0.0).is_sign_negative());
        assert!(utils::min(-0.0, 0.0).is_sign_negative());
    }

    #[test]
    fn test_clamp() {
        assert_eq!(utils::clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(utils::clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(utils::clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = EPSILON);
    }
}
