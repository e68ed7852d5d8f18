//! Oriented bounding boxes
//!
//! Boxes with a quaternion orientation and a cached rigid transform. Sphere
//! tests bring the sphere into the box's local frame and clamp, following
//! Real-Time Collision Detection (Ericson), Chapter 5.

use crate::foundation::math::{utils, Isometry3, Point3, Quat, Vec3};
use nalgebra::Translation3;
use std::collections::HashSet;

use super::classification::Classification;
use super::sphere::Sphere;

/// Oriented bounding box positioned by an offset and a quaternion
///
/// The pose fields are private so the cached transform can never go stale:
/// [`set_offset`](Self::set_offset) and
/// [`set_orientation`](Self::set_orientation) rebuild it in the same call.
/// The cache is an isometry (rotation plus translation), which is exactly
/// the class of transform the local-frame inverse is valid for; scale and
/// shear are unrepresentable.
#[derive(Debug, Clone)]
pub struct OrientedBox {
    /// Half extents of the box along its local axes
    pub half_size: Vec3,
    offset: Vec3,
    orientation: Quat,
    transform: Isometry3,
    /// Free-form labels for this piece of geometry
    pub tags: HashSet<String>,
}

impl OrientedBox {
    /// Create an axis-aligned box at the origin with the given half extents
    pub fn new(half_size: Vec3) -> Self {
        Self {
            half_size,
            offset: Vec3::zeros(),
            orientation: Quat::identity(),
            transform: Isometry3::identity(),
            tags: HashSet::new(),
        }
    }

    /// Create a box with the given half extents, offset, and orientation
    pub fn from_parts(half_size: Vec3, offset: Vec3, orientation: Quat) -> Self {
        Self {
            half_size,
            offset,
            orientation,
            transform: Self::pose_transform(offset, orientation),
            tags: HashSet::new(),
        }
    }

    fn pose_transform(offset: Vec3, orientation: Quat) -> Isometry3 {
        Isometry3::from_parts(Translation3::from(offset), orientation)
    }

    /// Move the box, refreshing the cached transform
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
        self.transform = Self::pose_transform(offset, self.orientation);
    }

    /// Rotate the box, refreshing the cached transform
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
        self.transform = Self::pose_transform(self.offset, orientation);
    }

    /// World-space position of the box center
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Orientation of the box
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// The cached local-to-world transform
    pub fn transform(&self) -> &Isometry3 {
        &self.transform
    }

    /// Classify this box against a sphere
    ///
    /// The sphere center moves into the box's local frame, where the box is
    /// axis-aligned around the origin: reject early when the center clears
    /// the slab on any axis, otherwise clamp for the closest-point overlap
    /// decision. `Inside` when even the farthest corner stays strictly
    /// within the sphere.
    pub fn classify_sphere(&self, sphere: &Sphere) -> Classification {
        let local = self
            .transform
            .inverse_transform_point(&Point3::from(sphere.world_center()))
            .coords;
        let r = sphere.radius;

        if local.x.abs() - r > self.half_size.x
            || local.y.abs() - r > self.half_size.y
            || local.z.abs() - r > self.half_size.z
        {
            return Classification::Outside;
        }

        let closest = Vec3::new(
            utils::clamp(local.x, -self.half_size.x, self.half_size.x),
            utils::clamp(local.y, -self.half_size.y, self.half_size.y),
            utils::clamp(local.z, -self.half_size.z, self.half_size.z),
        );
        let r_sq = r * r;
        if (closest - local).magnitude_squared() > r_sq {
            return Classification::Outside;
        }

        let dx = local.x.abs() + self.half_size.x;
        let dy = local.y.abs() + self.half_size.y;
        let dz = local.z.abs() + self.half_size.z;
        if dx * dx + dy * dy + dz * dz < r_sq {
            return Classification::Inside;
        }

        Classification::Intersect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    fn rotated_45_z(half_size: Vec3) -> OrientedBox {
        let mut obb = OrientedBox::new(half_size);
        obb.set_orientation(Quat::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(45.0)));
        obb
    }

    #[test]
    fn test_axis_aligned_sphere_tests() {
        let obb = OrientedBox::new(Vec3::new(1.0, 1.0, 1.0));

        let centered = Sphere::new(Vec3::zeros(), 1.0);
        let beside = Sphere::new(Vec3::new(2.1, 0.0, 0.0), 1.0);
        let above = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0);

        assert_eq!(obb.classify_sphere(&centered), Classification::Intersect);
        assert_eq!(obb.classify_sphere(&beside), Classification::Outside);
        assert_eq!(obb.classify_sphere(&above), Classification::Outside);
    }

    #[test]
    fn test_rotation_extends_reach() {
        // Rotated 45° about Z, the corner reaches sqrt(2) along x, so the
        // sphere that missed the axis-aligned box now overlaps
        let obb = rotated_45_z(Vec3::new(1.0, 1.0, 1.0));

        let near = Sphere::new(Vec3::new(2.1, 0.0, 0.0), 1.0);
        let far = Sphere::new(Vec3::new(2.5, 0.0, 0.0), 1.0);

        assert_eq!(obb.classify_sphere(&near), Classification::Intersect);
        assert_eq!(obb.classify_sphere(&far), Classification::Outside);
    }

    #[test]
    fn test_box_inside_sphere() {
        let obb = OrientedBox::new(Vec3::new(1.0, 1.0, 1.0));
        let engulfing = Sphere::new(Vec3::zeros(), 10.0);

        assert_eq!(obb.classify_sphere(&engulfing), Classification::Inside);
    }

    #[test]
    fn test_offset_moves_the_box() {
        let mut obb = OrientedBox::new(Vec3::new(1.0, 1.0, 1.0));
        obb.set_offset(Vec3::new(10.0, 0.0, 0.0));

        let near = Sphere::new(Vec3::new(11.5, 0.0, 0.0), 1.0);
        let far = Sphere::new(Vec3::new(13.0, 0.0, 0.0), 1.0);
        let at_old_position = Sphere::new(Vec3::zeros(), 1.0);

        assert_eq!(obb.classify_sphere(&near), Classification::Intersect);
        assert_eq!(obb.classify_sphere(&far), Classification::Outside);
        assert_eq!(obb.classify_sphere(&at_old_position), Classification::Outside);
    }

    #[test]
    fn test_offset_and_rotation_combine() {
        let mut obb = rotated_45_z(Vec3::new(1.0, 1.0, 1.0));
        obb.set_offset(Vec3::new(10.0, 0.0, 0.0));

        let near = Sphere::new(Vec3::new(12.1, 0.0, 0.0), 1.0);
        let far = Sphere::new(Vec3::new(12.5, 0.0, 0.0), 1.0);

        assert_eq!(obb.classify_sphere(&near), Classification::Intersect);
        assert_eq!(obb.classify_sphere(&far), Classification::Outside);
    }

    #[test]
    fn test_setters_keep_cached_transform_fresh() {
        let mut obb = OrientedBox::new(Vec3::new(1.0, 1.0, 1.0));
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(45.0));
        let position = Vec3::new(3.0, -2.0, 1.0);

        obb.set_orientation(rotation);
        obb.set_offset(position);

        assert_eq!(obb.offset(), position);
        assert_eq!(obb.transform().translation.vector, position);
        assert_relative_eq!(obb.transform().rotation, rotation, epsilon = EPSILON);

        let built = OrientedBox::from_parts(Vec3::new(1.0, 1.0, 1.0), position, rotation);
        assert_relative_eq!(built.transform().rotation, obb.transform().rotation, epsilon = EPSILON);
    }

    #[test]
    fn test_tags_label_geometry() {
        let mut obb = OrientedBox::new(Vec3::new(1.0, 1.0, 1.0));
        assert!(obb.tags.is_empty());

        obb.tags.insert("cover".to_string());
        assert!(obb.tags.contains("cover"));
        assert!(!obb.tags.contains("water"));
    }
}
