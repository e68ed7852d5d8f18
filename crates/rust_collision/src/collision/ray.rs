//! Rays for ray casting and picking
//!
//! Rays keep their direction normalized and cache the componentwise inverse
//! direction for slab tests against boxes.

use crate::foundation::math::Vec3;

/// A ray with a cached inverse direction
///
/// The direction is private so that the cache can never go stale: every
/// write goes through [`set_direction`](Self::set_direction), which
/// normalizes and recomputes the inverse in the same call. Zero direction
/// components make the matching inverse components ±infinity, which the
/// box slab test relies on.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// The direction is normalized; it must be non-zero.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let mut ray = Self {
            origin,
            direction: Vec3::zeros(),
            inv_direction: Vec3::zeros(),
        };
        ray.set_direction(direction);
        ray
    }

    /// Replace the direction, renormalizing and refreshing the cached inverse
    pub fn set_direction(&mut self, direction: Vec3) {
        debug_assert!(
            direction.magnitude_squared() > 0.0,
            "ray direction must be non-zero"
        );
        self.direction = direction.normalize();
        self.inv_direction = Vec3::new(
            1.0 / self.direction.x,
            1.0 / self.direction.y,
            1.0 / self.direction.z,
        );
    }

    /// The unit direction of the ray
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Componentwise inverse of the direction (±infinity on zero components)
    pub fn inv_direction(&self) -> Vec3 {
        self.inv_direction
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Möller-Trumbore ray-triangle intersection
    ///
    /// Returns the distance to the hit point, or `None` when the ray is
    /// near-parallel to the triangle plane, misses the triangle, or would
    /// hit behind the origin.
    ///
    /// See: "Fast, Minimum Storage Ray/Triangle Intersection" by Möller & Trumbore
    pub fn intersect_triangle(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
        // Wider than the usual 1e-6: degenerate skinny triangles otherwise
        // produce huge hit distances from tiny determinants
        const PARALLEL_EPSILON: f32 = 1e-4;

        // Calculate edges from v0
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        // Calculate determinant
        let h = self.direction.cross(&edge2);
        let det = edge1.dot(&h);

        // Ray parallel to triangle?
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let s = self.origin - v0;
        let u = f * s.dot(&h);

        // Hit outside triangle on u axis?
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * self.direction.dot(&q);

        // Hit outside triangle on v axis?
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        // Calculate t (distance along ray)
        let t = f * edge2.dot(&q);

        // Accept any non-negative distance, reject hits behind the origin
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }
}
