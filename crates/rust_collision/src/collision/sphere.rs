//! Spheres with a query-time world offset

use crate::foundation::math::{utils, Point3, Vec3};
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::classification::Classification;
use super::obb::OrientedBox;
use super::plane::Plane;
use super::ray::Ray;

/// A sphere positioned by a center plus world-space offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere around its local origin
    pub center: Vec3,
    /// World-space translation applied during tests
    #[serde(default = "Vec3::zeros")]
    pub offset: Vec3,
    /// Radius of the sphere
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius, and no offset
    pub fn new(center: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "sphere radius must be non-negative");
        Self {
            center,
            offset: Vec3::zeros(),
            radius,
        }
    }

    /// Center of the sphere in world space (`center + offset`)
    pub fn world_center(&self) -> Vec3 {
        self.center + self.offset
    }

    /// Classify this sphere against another sphere
    ///
    /// `Outside` when the centers are farther apart than the radii sum
    /// (external tangency still intersects), `Inside` when this sphere is
    /// strictly within the other, `Intersect` otherwise.
    pub fn classify_sphere(&self, other: &Sphere) -> Classification {
        let dist_sq = (other.world_center() - self.world_center()).magnitude_squared();

        let radius_sum = self.radius + other.radius;
        if dist_sq > radius_sum * radius_sum {
            return Classification::Outside;
        }

        let radius_gap = other.radius - self.radius;
        if radius_gap > 0.0 && dist_sq < radius_gap * radius_gap {
            return Classification::Inside;
        }

        Classification::Intersect
    }

    /// Classify this sphere against an axis-aligned box
    ///
    /// The overlap decision reuses the box's closest-point kernel, so this
    /// always agrees with [`Aabb::classify_sphere`] on contact; only the
    /// containment direction differs. `Inside` means the sphere sits
    /// strictly within the box.
    pub fn classify_aabb(&self, aabb: &Aabb) -> Classification {
        let center = self.world_center();

        let closest = aabb.closest_point(center);
        if (closest - center).magnitude_squared() > self.radius * self.radius {
            return Classification::Outside;
        }

        let wmin = aabb.world_min();
        let wmax = aabb.world_max();
        if center.x - self.radius > wmin.x && center.x + self.radius < wmax.x
            && center.y - self.radius > wmin.y && center.y + self.radius < wmax.y
            && center.z - self.radius > wmin.z && center.z + self.radius < wmax.z
        {
            return Classification::Inside;
        }

        Classification::Intersect
    }

    /// Classify this sphere against an oriented box
    ///
    /// Works in the box's local frame: clamp the local center to the half
    /// extents for the overlap decision, then check whether the sphere fits
    /// strictly inside the extents for containment.
    pub fn classify_oriented_box(&self, obb: &OrientedBox) -> Classification {
        let local = obb
            .transform()
            .inverse_transform_point(&Point3::from(self.world_center()))
            .coords;
        let half = obb.half_size;

        let closest = Vec3::new(
            utils::clamp(local.x, -half.x, half.x),
            utils::clamp(local.y, -half.y, half.y),
            utils::clamp(local.z, -half.z, half.z),
        );
        if (closest - local).magnitude_squared() > self.radius * self.radius {
            return Classification::Outside;
        }

        if local.x.abs() + self.radius < half.x
            && local.y.abs() + self.radius < half.y
            && local.z.abs() + self.radius < half.z
        {
            return Classification::Inside;
        }

        Classification::Intersect
    }

    /// Classify this sphere against a plane
    ///
    /// Compares the signed center distance against ±radius: `Inside` when
    /// wholly in the positive half-space, `Outside` when wholly behind,
    /// `Intersect` when the plane cuts or touches the sphere. Assumes a
    /// unit plane normal.
    pub fn classify_plane(&self, plane: &Plane) -> Classification {
        let dist = plane.distance_to_point(self.world_center());

        if dist > self.radius {
            return Classification::Inside;
        }
        if dist < -self.radius {
            return Classification::Outside;
        }
        Classification::Intersect
    }

    /// Test ray intersection with this sphere
    ///
    /// Returns the entry distance: `0.0` when the ray origin is already
    /// inside, the distance to the surface otherwise (tangent rays
    /// included). `None` when the sphere is behind the origin or the ray
    /// passes it by.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let r_sq = self.radius * self.radius;

        let w = self.world_center() - ray.origin;
        let w_sq = w.magnitude_squared();
        if w_sq < r_sq {
            return Some(0.0);
        }

        // Sphere center behind the origin
        let proj = w.dot(&ray.direction());
        if proj < 0.0 {
            return None;
        }

        // Squared perpendicular distance from the center to the ray
        let perp_sq = w_sq - proj * proj;
        if perp_sq > r_sq {
            return None;
        }

        Some(proj - (r_sq - perp_sq).sqrt())
    }
}
