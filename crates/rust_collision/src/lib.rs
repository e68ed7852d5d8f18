//! # Rust Collision
//!
//! A small library of collision testing primitives for games and simulations.
//!
//! ## Features
//!
//! - **Axis-Aligned Boxes**: 3D boxes and 2D rectangles with point, box,
//!   ray, plane, and sphere tests
//! - **Spheres**: sphere, box, oriented box, plane, and ray tests
//! - **Oriented Boxes**: quaternion-oriented boxes with sphere tests
//! - **Ray Casting**: slab-method box tests and Möller-Trumbore triangle tests
//! - **Query-Time Offsets**: shapes carry a world-space offset that is applied
//!   additively during tests, never baked into the stored geometry
//! - **Tri-State Results**: classification predicates report
//!   Outside / Inside / Intersect; boundary contact always counts as a hit
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_collision::prelude::*;
//!
//! let ground = Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0));
//! let ball = Sphere::new(Vec3::new(0.0, 0.25, 0.0), 0.5);
//!
//! assert_eq!(ground.classify_sphere(&ball), Classification::Intersect);
//!
//! let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
//! assert_eq!(ground.intersect_ray(&ray), Some(5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod collision;

/// Common imports for library users
pub mod prelude {
    pub use crate::collision::{
        Aabb, Aabb2d, Classification, CollisionShape, OrientedBox, Plane, Ray, Sphere,
    };
    pub use crate::foundation::math::{Quat, Vec2, Vec3};
}
