//! This module defines a finite, open Cylinder and its intersection algorithm

use nalgebra::{Point3, Vector3};

use super::IntersectsRay;
use crate::error::{require_positive, Result, ShapeError};
use crate::ray::Ray;
use crate::vector::{dot, length, multiply_add};
use crate::KernelValue;

/// An open tube of `radius` around the segment from `base` to
/// `base + height * axis`. It has no end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder<T: KernelValue> {
    /// Center of the bottom rim
    pub base: Point3<T>,
    /// Unit direction from the bottom rim to the top rim
    pub axis: Vector3<T>,
    /// Radius of the tube
    pub radius: T,
    /// Length of the tube along `axis`
    pub height: T,
}

impl<T: KernelValue> Cylinder<T> {
    /// Creates a cylinder. `axis` is expected to be of unit length.
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius or the height is negative.
    pub fn new(base: Point3<T>, axis: Vector3<T>, radius: T, height: T) -> Cylinder<T> {
        debug_assert!(radius >= T::zero());
        debug_assert!(height >= T::zero());
        Cylinder {
            base,
            axis,
            radius,
            height,
        }
    }

    /// Creates the cylinder whose rims are centered on `base` and `top`.
    ///
    /// # Examples
    /// ```
    /// use raykernel::shapes::Cylinder;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let cylinder = Cylinder::between(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 3.0, 0.0), 0.5)
    ///     .unwrap();
    ///
    /// assert_eq!(cylinder.axis, Vector3::new(0.0, 1.0, 0.0));
    /// assert_eq!(cylinder.height, 3.0);
    /// ```
    pub fn between(base: Point3<T>, top: Point3<T>, radius: T) -> Result<Cylinder<T>> {
        require_positive("radius", radius)?;
        let line = top - base;
        let height = length(&line);
        if !(height > T::zero() && height.is_finite()) {
            log::debug!("rejecting cylinder with coincident rims at {base}");
            return Err(ShapeError::ZeroVector { what: "axis" });
        }
        Ok(Cylinder {
            base,
            axis: line / height,
            radius,
            height,
        })
    }
}

impl<T: KernelValue> IntersectsRay<T> for Cylinder<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_cylinder(ray, self)
    }
}

/// Intersects `ray` with `cylinder`.
///
/// Origin offset and direction are projected onto the plane perpendicular
/// to the axis, `v = po - axis·(po·axis)` and `w = d - axis·(d·axis)`, and
/// the circle equation `|v + t·w|² = r²` is solved with `a = w·w`,
/// `b = v·w`, `c = v·v - r²`. A ray parallel to the axis (`a == 0`)
/// misses.
///
/// A root only counts if its point lies within the height band, i.e. its
/// projection onto the axis measured from `base` is in `[0, height]`, and
/// if `0 < t < ray.max_distance`. The smallest such root is returned,
/// minus [`KernelValue::T_CORRECTION`]. Since the tube is open, a ray
/// entering through a rim sees the inside wall. A zero-length axis
/// misses.
pub fn intersect_cylinder<T: KernelValue>(ray: &Ray<T>, cylinder: &Cylinder<T>) -> Option<T> {
    let axis = &cylinder.axis;
    if dot(axis, axis) == T::zero() {
        return None;
    }
    let po = ray.origin - cylinder.base;
    let v = multiply_add(&po, axis, -dot(&po, axis));
    let w = multiply_add(&ray.direction, axis, -dot(&ray.direction, axis));

    let a = dot(&w, &w);
    if a == T::zero() {
        return None;
    }
    let b = dot(&v, &w);
    let c = dot(&v, &v) - cylinder.radius * cylinder.radius;
    let delta = b * b - a * c;
    if delta < T::zero() {
        return None;
    }

    let sqrt_delta = delta.sqrt();
    let t1 = (-b - sqrt_delta) / a;
    let t2 = (-b + sqrt_delta) / a;

    nearest_in_band(ray, [t1, t2], &cylinder.base, axis, cylinder.height)
        .map(|t| t - T::T_CORRECTION)
}

/// Picks the smallest root accepted by `ray` whose point projects onto
/// `axis`, measured from `anchor`, inside `[0, height]`.
pub(super) fn nearest_in_band<T: KernelValue>(
    ray: &Ray<T>,
    roots: [T; 2],
    anchor: &Point3<T>,
    axis: &Vector3<T>,
    height: T,
) -> Option<T> {
    let mut toi = None;
    for t in roots {
        if !ray.accepts(t) {
            continue;
        }
        let along = dot(&(ray.at(t) - anchor), axis);
        if along < T::zero() || along > height {
            continue;
        }
        if toi.map_or(true, |best| t < best) {
            toi = Some(t);
        }
    }
    toi
}
