//! High-level collision shape dispatch
//!
//! Wraps the concrete shapes in one enum so heterogeneous geometry can be
//! classified pairwise without the caller matching on kinds itself.

use log::debug;

use super::aabb::Aabb;
use super::classification::Classification;
use super::obb::OrientedBox;
use super::sphere::Sphere;

/// A collision shape of any supported kind
#[derive(Debug, Clone)]
pub enum CollisionShape {
    /// An axis-aligned bounding box
    Aabb(Aabb),
    /// A bounding sphere
    Sphere(Sphere),
    /// An oriented bounding box
    OrientedBox(OrientedBox),
}

impl CollisionShape {
    /// Classify this shape against another
    ///
    /// Dispatches on the kind pair. The result reads from this shape's point
    /// of view: `Inside` means this shape sits strictly within `other`.
    /// Pairs with no narrow-phase routine yet report `Outside` and log at
    /// debug level.
    pub fn classify(&self, other: &Self) -> Classification {
        match (self, other) {
            // Box-box classification collapses to the overlap test: the
            // routine does not distinguish containment
            (Self::Aabb(a), Self::Aabb(b)) => {
                if a.intersects(b) {
                    Classification::Intersect
                } else {
                    Classification::Outside
                }
            }

            (Self::Aabb(aabb), Self::Sphere(sphere)) => aabb.classify_sphere(sphere),
            (Self::Sphere(sphere), Self::Aabb(aabb)) => sphere.classify_aabb(aabb),

            (Self::Sphere(a), Self::Sphere(b)) => a.classify_sphere(b),

            (Self::Sphere(sphere), Self::OrientedBox(obb)) => sphere.classify_oriented_box(obb),
            (Self::OrientedBox(obb), Self::Sphere(sphere)) => obb.classify_sphere(sphere),

            // No oriented-box-vs-box routine yet; treat as separated
            (Self::Aabb(_), Self::OrientedBox(_))
            | (Self::OrientedBox(_), Self::Aabb(_))
            | (Self::OrientedBox(_), Self::OrientedBox(_)) => {
                debug!(
                    "no classification routine for {} vs {}, reporting Outside",
                    self.kind_name(),
                    other.kind_name()
                );
                Classification::Outside
            }
        }
    }

    /// Test whether this shape touches another at all
    pub fn intersects(&self, other: &Self) -> bool {
        self.classify(other).is_hit()
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Aabb(_) => "Aabb",
            Self::Sphere(_) => "Sphere",
            Self::OrientedBox(_) => "OrientedBox",
        }
    }
}
