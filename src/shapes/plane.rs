//! This module defines an unbounded Plane and the ray/plane solve shared
//! with triangles and discs.

use nalgebra::{Point3, Vector3};

use super::IntersectsRay;
use crate::error::{Result, ShapeError};
use crate::ray::Ray;
use crate::vector::{dot, normalized};
use crate::KernelValue;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: KernelValue> {
    /// Any point on the plane
    pub point: Point3<T>,
    /// Unit normal of the plane
    pub normal: Vector3<T>,
}

impl<T: KernelValue> Plane<T> {
    /// Creates a plane. `normal` is expected to be of unit length.
    pub fn new(point: Point3<T>, normal: Vector3<T>) -> Plane<T> {
        Plane { point, normal }
    }

    /// Creates a plane, normalizing `normal`.
    pub fn try_new(point: Point3<T>, normal: Vector3<T>) -> Result<Plane<T>> {
        let normal = normalized(&normal).ok_or_else(|| {
            log::debug!("rejecting plane with normal {normal}");
            ShapeError::ZeroVector { what: "normal" }
        })?;
        Ok(Plane { point, normal })
    }
}

impl<T: KernelValue> IntersectsRay<T> for Plane<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_plane(ray, self)
    }
}

/// Intersects `ray` with an unbounded `plane`.
///
/// Both sides of the plane are hit. A ray exactly parallel to the plane
/// misses, even if it lies inside it.
pub fn intersect_plane<T: KernelValue>(ray: &Ray<T>, plane: &Plane<T>) -> Option<T> {
    plane_distance(ray, &plane.point, &plane.normal).map(|t| t - T::T_CORRECTION)
}

/// Solves `(point - origin)·normal = t·(direction·normal)` for `t`.
///
/// Returns the unbiased distance when the ray is not parallel to the
/// plane and `t` lies inside the ray's accepted range.
pub(crate) fn plane_distance<T: KernelValue>(
    ray: &Ray<T>,
    point: &Point3<T>,
    normal: &Vector3<T>,
) -> Option<T> {
    let dn = dot(&ray.direction, normal);
    if dn == T::zero() {
        return None;
    }

    let t = dot(&(point - ray.origin), normal) / dn;
    if ray.accepts(t) {
        Some(t)
    } else {
        None
    }
}
