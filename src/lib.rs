//! A crate which exports rays and closed-form ray intersection tests for
//! analytic primitives: spheres, triangles, finite cylinders, finite cones,
//! discs and planes.
//!
//! ## About
//!
//! Every test answers one question: how far along the ray does it first
//! hit this primitive, if at all? The answer is an [`Option`] holding the
//! distance `t` at which `ray.origin + t * ray.direction` lies on the
//! surface, minus a small bias ([`KernelValue::T_CORRECTION`]) that keeps
//! secondary rays spawned at the hit point from re-hitting the same
//! surface. Only hits with `0 < t < ray.max_distance` are reported.
//!
//! The tests are pure functions of their inputs. They hold no state, so
//! any number of them may run concurrently. Choosing which primitives
//! to test and keeping the closest hit is left to the caller, typically
//! an acceleration structure such as a BVH.
//!
//! ## Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use raykernel::ray::Ray;
//! use raykernel::shapes::{Disc, IntersectsRay, Primitive, Sphere};
//!
//! let ray: Ray<f64> = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
//!
//! let scene = [
//!     Primitive::Sphere(Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0)),
//!     Primitive::Disc(Disc::new(Point3::new(0.0, 0.0, 2.0), Vector3::z(), 0.5)),
//! ];
//!
//! // Keep the closest hit by narrowing the ray after every accepted hit.
//! let mut best = ray;
//! let mut closest = None;
//! for (index, shape) in scene.iter().enumerate() {
//!     if let Some(t) = shape.intersects_ray(&best) {
//!         best = best.shortened(t);
//!         closest = Some(index);
//!     }
//! }
//!
//! assert_eq!(closest, Some(1));
//! assert!((best.max_distance - 3.0).abs() < 1e-4);
//! ```
//!
//! ## Features
//!
//! - `rayon` (default **enabled**) - evaluates [`batch::intersect_all`] in parallel
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations
//!   for rays and shapes
//!

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign, Scalar};
use num_traits::Float;

/// Bias subtracted from every accepted hit distance, as an `f64`.
///
/// The per-type value used by the intersection routines is
/// [`KernelValue::T_CORRECTION`].
pub const T_CORRECTION: f64 = 0.00001;

/// Scalar type accepted by the intersection kernel.
///
/// Implemented for `f32` and `f64`.
pub trait KernelValue:
    Scalar
    + Copy
    + Float
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + std::fmt::Display
    + Send
    + Sync
{
    /// Distance subtracted from every accepted hit, pulling the reported
    /// hit point slightly back towards the ray origin.
    const T_CORRECTION: Self;
}

impl KernelValue for f32 {
    const T_CORRECTION: f32 = T_CORRECTION as f32;
}

impl KernelValue for f64 {
    const T_CORRECTION: f64 = T_CORRECTION;
}

pub mod batch;
pub mod error;
pub mod ray;
pub mod shapes;
pub mod vector;

#[cfg(test)]
mod testbase;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
