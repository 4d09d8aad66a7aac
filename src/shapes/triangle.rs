//! This module defines a Triangle and its intersection algorithm

use nalgebra::{Point3, Vector3};

use super::plane::plane_distance;
use super::IntersectsRay;
use crate::error::{Result, ShapeError};
use crate::ray::Ray;
use crate::vector::{cross, dot, length};
use crate::KernelValue;

/// A triangle together with the plane data its intersection test needs.
///
/// `normal` and `area` must follow the winding of `a`, `b`, `c`:
/// `normal = normalize(cross(b - a, c - a))` and
/// `area = |cross(b - a, c - a)|`, i.e. twice the geometric area.
/// [`Triangle::from_vertices`] computes both.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<T: KernelValue> {
    /// Any point on the triangle's plane, usually `a`
    pub plane_point: Point3<T>,
    /// Unit normal of the triangle's plane
    pub normal: Vector3<T>,
    /// First point on the triangle
    pub a: Point3<T>,
    /// Second point on the triangle
    pub b: Point3<T>,
    /// Third point on the triangle
    pub c: Point3<T>,
    /// Twice the triangle's area
    pub area: T,
}

impl<T: KernelValue> Triangle<T> {
    /// Creates a new triangle given a counter clockwise set of points,
    /// deriving its normal and area.
    ///
    /// # Examples
    /// ```
    /// use raykernel::shapes::Triangle;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let triangle = Triangle::from_vertices(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(triangle.normal, Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(triangle.area, 4.0);
    /// ```
    pub fn from_vertices(a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Result<Triangle<T>> {
        let scaled_normal = cross(&(b - a), &(c - a));
        let area = length(&scaled_normal);
        if !(area > T::zero() && area.is_finite()) {
            log::debug!("rejecting collinear triangle {a} {b} {c}");
            return Err(ShapeError::DegenerateTriangle);
        }
        Ok(Triangle {
            plane_point: a,
            normal: scaled_normal / area,
            a,
            b,
            c,
            area,
        })
    }
}

impl<T: KernelValue> IntersectsRay<T> for Triangle<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_triangle(ray, self)
    }
}

/// Intersects `ray` with `triangle`.
///
/// The ray is first intersected with the triangle's plane. A ray parallel
/// to the plane misses. The hit point `p` is then weighted against the
/// vertices with `c1 = ((a - p) × (b - p))·n / area`,
/// `c2 = ((c - p) × (a - p))·n / area` and `c3 = 1 - c1 - c2`. The point
/// is inside when all three weights are at least `-T_CORRECTION`, which
/// keeps hits exactly on an edge from slipping through. A triangle with
/// zero area misses.
pub fn intersect_triangle<T: KernelValue>(ray: &Ray<T>, triangle: &Triangle<T>) -> Option<T> {
    if triangle.area == T::zero() {
        return None;
    }
    let t = plane_distance(ray, &triangle.plane_point, &triangle.normal)?;

    let p = ray.at(t);
    let ap = triangle.a - p;
    let bp = triangle.b - p;
    let cp = triangle.c - p;

    let c1 = dot(&cross(&ap, &bp), &triangle.normal) / triangle.area;
    let c2 = dot(&cross(&cp, &ap), &triangle.normal) / triangle.area;
    let c3 = T::one() - c1 - c2;

    let tolerance = -T::T_CORRECTION;
    if c1 >= tolerance && c2 >= tolerance && c3 >= tolerance {
        Some(t - T::T_CORRECTION)
    } else {
        None
    }
}
