//! This module defines a Disc (a bounded circle in 3D) and its intersection
//! algorithm

use nalgebra::{Point3, Vector3};

use super::plane::plane_distance;
use super::IntersectsRay;
use crate::error::{require_positive, Result, ShapeError};
use crate::ray::Ray;
use crate::vector::{length, normalized};
use crate::KernelValue;

/// A flat, filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disc<T: KernelValue> {
    /// Center of the disc
    pub center: Point3<T>,
    /// Unit normal of the disc's plane
    pub normal: Vector3<T>,
    /// Radius of the disc
    pub radius: T,
}

impl<T: KernelValue> Disc<T> {
    /// Creates a disc. `normal` is expected to be of unit length.
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius is negative.
    pub fn new(center: Point3<T>, normal: Vector3<T>, radius: T) -> Disc<T> {
        debug_assert!(radius >= T::zero());
        Disc {
            center,
            normal,
            radius,
        }
    }

    /// Creates a disc, normalizing `normal` and checking `radius`.
    pub fn try_new(center: Point3<T>, normal: Vector3<T>, radius: T) -> Result<Disc<T>> {
        require_positive("radius", radius)?;
        let normal = normalized(&normal).ok_or_else(|| {
            log::debug!("rejecting disc with normal {normal}");
            ShapeError::ZeroVector { what: "normal" }
        })?;
        Ok(Disc {
            center,
            normal,
            radius,
        })
    }
}

impl<T: KernelValue> IntersectsRay<T> for Disc<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_disc(ray, self)
    }
}

/// Intersects `ray` with `disc`.
///
/// The plane hit is kept when it lies within `radius` of the center. The
/// radius test is exact, no tolerance widens the rim.
pub fn intersect_disc<T: KernelValue>(ray: &Ray<T>, disc: &Disc<T>) -> Option<T> {
    let t = plane_distance(ray, &disc.center, &disc.normal)?;

    let p = ray.at(t);
    if length(&(p - disc.center)) > disc.radius {
        return None;
    }
    Some(t - T::T_CORRECTION)
}
