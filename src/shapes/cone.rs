//! This module defines a finite, open Cone and its intersection algorithm

use nalgebra::{Point3, Vector3};

use super::cylinder::nearest_in_band;
use super::IntersectsRay;
use crate::error::{require_positive, Result, ShapeError};
use crate::ray::Ray;
use crate::vector::{dot, normalized};
use crate::KernelValue;

/// A cone surface opening from `apex` along `axis`, cut off at `height`.
/// It has no base cap.
///
/// The opening is given by `cos_squared_half_angle`, the squared cosine of
/// the angle between the axis and the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cone<T: KernelValue> {
    /// Tip of the cone
    pub apex: Point3<T>,
    /// Unit direction from the apex towards the open end
    pub axis: Vector3<T>,
    /// `cos²` of the half angle, in `(0, 1)`
    pub cos_squared_half_angle: T,
    /// Length of the cone along `axis`
    pub height: T,
}

impl<T: KernelValue> Cone<T> {
    /// Creates a cone. `axis` is expected to be of unit length.
    pub fn new(apex: Point3<T>, axis: Vector3<T>, cos_squared_half_angle: T, height: T) -> Cone<T> {
        debug_assert!(height >= T::zero());
        debug_assert!(cos_squared_half_angle > T::zero() && cos_squared_half_angle < T::one());
        Cone {
            apex,
            axis,
            cos_squared_half_angle,
            height,
        }
    }

    /// Creates the cone of the given `height` whose open end has `radius`.
    ///
    /// # Examples
    /// ```
    /// use raykernel::shapes::Cone;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// // A 45 degree cone: as wide as it is tall.
    /// let cone: Cone<f64> = Cone::from_height_radius(Point3::origin(), Vector3::new(0.0, 0.0, 2.0), 1.0, 1.0)
    ///     .unwrap();
    ///
    /// assert_eq!(cone.axis, Vector3::new(0.0, 0.0, 1.0));
    /// assert!((cone.cos_squared_half_angle - 0.5).abs() < 1e-12);
    /// ```
    pub fn from_height_radius(
        apex: Point3<T>,
        axis: Vector3<T>,
        height: T,
        radius: T,
    ) -> Result<Cone<T>> {
        require_positive("height", height)?;
        require_positive("radius", radius)?;
        let axis = unit_axis(&axis)?;
        let height_squared = height * height;
        Ok(Cone {
            apex,
            axis,
            cos_squared_half_angle: height_squared / (height_squared + radius * radius),
            height,
        })
    }

    /// Creates a cone from its half angle in radians, which must lie in `(0, pi/2)`.
    pub fn from_half_angle(
        apex: Point3<T>,
        axis: Vector3<T>,
        half_angle: T,
        height: T,
    ) -> Result<Cone<T>> {
        require_positive("height", height)?;
        let cos = half_angle.cos();
        if !(half_angle > T::zero() && cos > T::zero()) {
            let value = half_angle.to_f64().unwrap_or(f64::NAN);
            log::debug!("rejecting cone half angle {value}");
            return Err(ShapeError::HalfAngleOutOfRange { value });
        }
        let axis = unit_axis(&axis)?;
        Ok(Cone {
            apex,
            axis,
            cos_squared_half_angle: cos * cos,
            height,
        })
    }
}

fn unit_axis<T: KernelValue>(axis: &Vector3<T>) -> Result<Vector3<T>> {
    normalized(axis).ok_or_else(|| {
        log::debug!("rejecting cone with axis {axis}");
        ShapeError::ZeroVector { what: "axis" }
    })
}

impl<T: KernelValue> IntersectsRay<T> for Cone<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        intersect_cone(ray, self)
    }
}

/// Intersects `ray` with `cone`.
///
/// With `v = apex - origin`, `dn = d·axis` and `vn = v·axis` the implicit
/// surface `((p - apex)·axis)² = |p - apex|²·cos²` becomes
/// `a·t² + 2b·t + c = 0` with `a = dn² - (d·d)·cos²`,
/// `b = (v·d)·cos² - vn·dn` and `c = vn² - (v·v)·cos²`. A ray parallel to
/// a generatrix (`a == 0`) misses.
///
/// The implicit surface includes the mirrored nappe behind the apex.
/// Its roots are removed by the height band alone: a root counts only if
/// its point projects onto the axis, measured from the apex, inside
/// `[0, height]`. Root selection is otherwise the same as for
/// [`super::intersect_cylinder`]. A zero-length axis misses.
pub fn intersect_cone<T: KernelValue>(ray: &Ray<T>, cone: &Cone<T>) -> Option<T> {
    let d = &ray.direction;
    let axis = &cone.axis;
    if dot(axis, axis) == T::zero() {
        return None;
    }
    let cos2 = cone.cos_squared_half_angle;

    let v = cone.apex - ray.origin;
    let dn = dot(d, axis);
    let vn = dot(&v, axis);

    let a = dn * dn - dot(d, d) * cos2;
    if a == T::zero() {
        return None;
    }
    let b = dot(&v, d) * cos2 - vn * dn;
    let c = vn * vn - dot(&v, &v) * cos2;
    let delta = b * b - a * c;
    if delta < T::zero() {
        return None;
    }

    let sqrt_delta = delta.sqrt();
    let t1 = (-b - sqrt_delta) / a;
    let t2 = (-b + sqrt_delta) / a;

    nearest_in_band(ray, [t1, t2], &cone.apex, axis, cone.height).map(|t| t - T::T_CORRECTION)
}
