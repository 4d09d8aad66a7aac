//! This module defines a Sphere and its intersection algorithm

use nalgebra::Point3;

use super::IntersectsRay;
use crate::error::{require_positive, Result};
use crate::ray::Ray;
use crate::vector::dot;
use crate::KernelValue;

/// A representation of a Sphere
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<T: KernelValue> {
    /// Center of the sphere
    pub center: Point3<T>,
    /// Radius of the sphere
    pub radius: T,
}

impl<T: KernelValue> Sphere<T> {
    /// Creates a sphere centered on a given point with a radius
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius is negative.
    pub fn new(center: Point3<T>, radius: T) -> Sphere<T> {
        debug_assert!(radius >= T::zero());
        Sphere { center, radius }
    }

    /// Creates a sphere, failing if `radius` is not a positive finite number.
    pub fn try_new(center: Point3<T>, radius: T) -> Result<Sphere<T>> {
        require_positive("radius", radius)?;
        Ok(Sphere { center, radius })
    }
}

impl<T: KernelValue> IntersectsRay<T> for Sphere<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_sphere(ray, self)
    }
}

/// Intersects `ray` with `sphere`.
///
/// Solves `|co + t·d|² = r²` with `co = origin - center` using the
/// coefficients `b = 2·(co·d)`, `c = co·co - r²` and the discriminant
/// `b² - 4c`. The leading coefficient `d·d` is taken to be one, so the
/// reported distance is only exact for unit length directions.
///
/// Of the two roots the smallest one with `0 < t < ray.max_distance` is
/// returned, minus [`KernelValue::T_CORRECTION`]. A tangent ray yields a
/// double root and counts as a hit. A ray with a zero direction misses.
pub fn intersect_sphere<T: KernelValue>(ray: &Ray<T>, sphere: &Sphere<T>) -> Option<T> {
    if dot(&ray.direction, &ray.direction) == T::zero() {
        return None;
    }

    let two = T::one() + T::one();
    let four = two + two;

    let co = ray.origin - sphere.center;
    let b = two * dot(&co, &ray.direction);
    let c = dot(&co, &co) - sphere.radius * sphere.radius;
    let delta = b * b - four * c;
    if delta < T::zero() {
        return None;
    }

    let sqrt_delta = delta.sqrt();
    let t1 = (-b + sqrt_delta) / two;
    let t2 = (-b - sqrt_delta) / two;

    let mut toi = None;
    for t in [t1, t2] {
        if ray.accepts(t) && toi.map_or(true, |best| t < best) {
            toi = Some(t);
        }
    }
    toi.map(|t| t - T::T_CORRECTION)
}
