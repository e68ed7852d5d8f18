//! Collision testing primitives
//!
//! Narrow-phase intersection and containment tests between rays, planes,
//! axis-aligned boxes, spheres, and oriented boxes.
//!
//! # Architecture
//!
//! - **Query-Time Offsets**: shapes store their geometry around a local
//!   origin plus a world-space offset; every test applies the offset on the
//!   fly and never bakes it into the stored fields
//! - **Uniform Result Domains**: classification predicates return the
//!   tri-state [`Classification`]; ray predicates return `Option<f32>` with
//!   the entry distance
//! - **Inclusive Boundaries**: shapes that merely touch always count as
//!   intersecting
//!
//! # Module Organization
//!
//! - [`classification`] - Tri-state test result
//! - [`plane`] - Infinite planes with signed distance
//! - [`ray`] - Rays with cached inverse direction and triangle tests
//! - [`aabb`] - Axis-aligned boxes in 3D and 2D
//! - [`sphere`] - Spheres
//! - [`obb`] - Oriented boxes
//! - [`shape`] - Shape enum dispatching tests over runtime pairs
//!
//! # Key Types
//!
//! - [`CollisionShape`] - Enum over the testable shapes for runtime dispatch
//! - [`Classification`] - Outside / Inside / Intersect result
//! - [`Ray`], [`Plane`], [`Aabb`], [`Sphere`], [`OrientedBox`] - Primitive types

pub mod classification;
pub mod plane;
pub mod ray;
pub mod aabb;
pub mod sphere;
pub mod obb;
pub mod shape;

// Re-export commonly used types
pub use classification::Classification;
pub use plane::Plane;
pub use ray::Ray;
pub use aabb::{Aabb, Aabb2d};
pub use sphere::Sphere;
pub use obb::OrientedBox;
pub use shape::CollisionShape;
