//! Axis-aligned bounding boxes in 3D and 2D
//!
//! Boxes store their extremes around a local origin plus a world-space
//! offset applied at query time. The ray test uses the slab method from
//! "An Efficient and Robust Ray-Box Intersection Algorithm" (Williams et
//! al.); the plane test classifies the positive and negative corners as in
//! Real-Time Collision Detection (Ericson), Chapter 5.

use crate::foundation::math::{utils, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::classification::Classification;
use super::plane::Plane;
use super::ray::Ray;
use super::sphere::Sphere;

/// Axis-aligned bounding box with a query-time world offset
///
/// `min` and `max` describe the box around its local origin; `offset`
/// translates it in world space. Every predicate works on
/// `min + offset` / `max + offset` and leaves the stored fields untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
    /// World-space translation applied during tests
    #[serde(default = "Vec3::zeros")]
    pub offset: Vec3,
    /// Free-form labels for this piece of geometry (e.g. "wall")
    #[serde(default)]
    pub tags: HashSet<String>,
}

impl Aabb {
    /// Create a new box from min and max corners, with no offset or tags
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "box min must not exceed max"
        );
        Self {
            min,
            max,
            offset: Vec3::zeros(),
            tags: HashSet::new(),
        }
    }

    /// Create a box centered at a point with given extents (half-sizes)
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self::new(center - extents, center + extents)
    }

    /// Get the center of the box, before the offset is applied
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the box
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Minimum corner in world space (`min + offset`)
    pub fn world_min(&self) -> Vec3 {
        self.min + self.offset
    }

    /// Maximum corner in world space (`max + offset`)
    pub fn world_max(&self) -> Vec3 {
        self.max + self.offset
    }

    /// Check if this box contains a world-space point, boundary included
    pub fn contains_point(&self, point: Vec3) -> bool {
        let wmin = self.world_min();
        let wmax = self.world_max();
        point.x >= wmin.x && point.x <= wmax.x &&
        point.y >= wmin.y && point.y <= wmax.y &&
        point.z >= wmin.z && point.z <= wmax.z
    }

    /// Check if this box intersects another box, touching faces included
    pub fn intersects(&self, other: &Aabb) -> bool {
        let amin = self.world_min();
        let amax = self.world_max();
        let bmin = other.world_min();
        let bmax = other.world_max();
        amin.x <= bmax.x && amax.x >= bmin.x &&
        amin.y <= bmax.y && amax.y >= bmin.y &&
        amin.z <= bmax.z && amax.z >= bmin.z
    }

    /// Test ray intersection using the slab method
    ///
    /// Returns the entry distance along the ray, which is negative or zero
    /// when the ray origin is inside the box. Returns `None` when the box
    /// is missed or lies entirely behind the origin. A ray that grazes a
    /// face it runs parallel to still hits, though the reported distance is
    /// NaN in that case.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let wmin = self.world_min();
        let wmax = self.world_max();
        let inv = ray.inv_direction();

        // IEEE min/max so the ±infinity (and 0 * inf NaN) values from
        // axis-parallel rays resolve per the documented policy
        let t1 = (wmin.x - ray.origin.x) * inv.x;
        let t2 = (wmax.x - ray.origin.x) * inv.x;
        let t3 = (wmin.y - ray.origin.y) * inv.y;
        let t4 = (wmax.y - ray.origin.y) * inv.y;
        let t5 = (wmin.z - ray.origin.z) * inv.z;
        let t6 = (wmax.z - ray.origin.z) * inv.z;

        let tmin = utils::max(
            utils::max(utils::min(t1, t2), utils::min(t3, t4)),
            utils::min(t5, t6),
        );
        let tmax = utils::min(
            utils::min(utils::max(t1, t2), utils::max(t3, t4)),
            utils::max(t5, t6),
        );

        // Box entirely behind the ray
        if tmax < 0.0 {
            return None;
        }
        // Slab intervals never overlap
        if tmin > tmax {
            return None;
        }
        Some(tmin)
    }

    /// Classify this box against a plane
    ///
    /// Picks the corner farthest along the plane normal and the corner
    /// farthest against it: if the positive corner is behind the plane the
    /// whole box is, and if the negative corner is not strictly in front
    /// the box straddles or touches the plane.
    pub fn classify_plane(&self, plane: &Plane) -> Classification {
        let wmin = self.world_min();
        let wmax = self.world_max();

        let mut pos = wmin;
        let mut neg = wmax;
        if plane.normal.x >= 0.0 {
            pos.x = wmax.x;
            neg.x = wmin.x;
        }
        if plane.normal.y >= 0.0 {
            pos.y = wmax.y;
            neg.y = wmin.y;
        }
        if plane.normal.z >= 0.0 {
            pos.z = wmax.z;
            neg.z = wmin.z;
        }

        if plane.distance_to_point(pos) < 0.0 {
            return Classification::Outside;
        }
        if plane.distance_to_point(neg) <= 0.0 {
            return Classification::Intersect;
        }
        Classification::Inside
    }

    /// Classify this box against a sphere
    ///
    /// `Outside` when the sphere clears the closest point on the box,
    /// `Inside` when even the farthest corner of the box is strictly within
    /// the sphere, `Intersect` otherwise (touching included).
    pub fn classify_sphere(&self, sphere: &Sphere) -> Classification {
        let center = sphere.world_center();
        let r_sq = sphere.radius * sphere.radius;

        let closest = self.closest_point(center);
        if (closest - center).magnitude_squared() > r_sq {
            return Classification::Outside;
        }

        let wmin = self.world_min();
        let wmax = self.world_max();
        let dx = (center.x - wmin.x).abs().max((center.x - wmax.x).abs());
        let dy = (center.y - wmin.y).abs().max((center.y - wmax.y).abs());
        let dz = (center.z - wmin.z).abs().max((center.z - wmax.z).abs());
        if dx * dx + dy * dy + dz * dz < r_sq {
            return Classification::Inside;
        }

        Classification::Intersect
    }

    /// Closest point on this box to a world-space point
    ///
    /// Points already inside the box map to themselves.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let wmin = self.world_min();
        let wmax = self.world_max();
        Vec3::new(
            utils::clamp(point.x, wmin.x, wmax.x),
            utils::clamp(point.y, wmin.y, wmax.y),
            utils::clamp(point.z, wmin.z, wmax.z),
        )
    }

    /// Approximate contact point for a sphere touching this box
    ///
    /// Returns the closest point on the box to the sphere center when the
    /// shapes are in contact, `None` otherwise. This is an approximation:
    /// for a sphere center inside the box it is the center itself.
    pub fn sphere_contact_point(&self, sphere: &Sphere) -> Option<Vec3> {
        let center = sphere.world_center();
        let closest = self.closest_point(center);
        if (closest - center).magnitude_squared() <= sphere.radius * sphere.radius {
            Some(closest)
        } else {
            None
        }
    }
}

/// Axis-aligned rectangle, the 2D analog of [`Aabb`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aabb2d {
    /// Minimum corner of the rectangle
    pub min: Vec2,
    /// Maximum corner of the rectangle
    pub max: Vec2,
    /// World-space translation applied during tests
    #[serde(default = "Vec2::zeros")]
    pub offset: Vec2,
    /// Free-form labels for this piece of geometry
    #[serde(default)]
    pub tags: HashSet<String>,
}

impl Aabb2d {
    /// Create a new rectangle from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "rectangle min must not exceed max"
        );
        Self {
            min,
            max,
            offset: Vec2::zeros(),
            tags: HashSet::new(),
        }
    }

    /// Check if this rectangle contains a point, boundary included
    pub fn contains_point(&self, point: Vec2) -> bool {
        let wmin = self.min + self.offset;
        let wmax = self.max + self.offset;
        point.x >= wmin.x && point.x <= wmax.x &&
        point.y >= wmin.y && point.y <= wmax.y
    }

    /// Check if this rectangle intersects another, touching edges included
    pub fn intersects(&self, other: &Aabb2d) -> bool {
        let amin = self.min + self.offset;
        let amax = self.max + self.offset;
        let bmin = other.min + other.offset;
        let bmax = other.max + other.offset;
        amin.x <= bmax.x && amax.x >= bmin.x &&
        amin.y <= bmax.y && amax.y >= bmin.y
    }
}
