//! Infinite planes with signed distance queries

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Plane defined by a normal and a distance from the origin
///
/// Points satisfy `normal · p + distance = 0`. The stored normal is used
/// exactly as supplied and is not normalized; signed distances are metric
/// only when the caller provides a unit normal. Classification predicates
/// consume only the sign, so any consistent normal length classifies
/// correctly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector, pointing into the positive half-space
    pub normal: Vec3,
    /// Distance term `d` of the plane equation
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from a normal and the plane equation's `d` term
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create a plane passing through a point with the given normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            distance: -normal.dot(&point),
        }
    }

    /// Signed distance from the plane to a point
    ///
    /// Positive on the side the normal points into, negative behind the
    /// plane, zero on the plane.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }
}
