//! This module defines a Ray structure: an origin, a direction and the
//! distance bound within which hits are accepted.

use nalgebra::{Point3, Vector3};

use crate::vector::multiply_add;
use crate::KernelValue;

/// A ray together with the current upper bound on accepted hit distances.
///
/// The direction is used exactly as given. It does not have to be of
/// unit length, in which case hit distances are measured in multiples of
/// its length.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<T: KernelValue> {
    /// The ray origin.
    pub origin: Point3<T>,

    /// The ray direction.
    pub direction: Vector3<T>,

    /// Hits at or beyond this distance are rejected. A traversal layer
    /// keeps its closest hit so far here.
    pub max_distance: T,
}

impl<T: KernelValue> Ray<T> {
    /// Creates a new [`Ray`] from an `origin` and a `direction`, accepting
    /// hits at any positive distance.
    ///
    /// # Examples
    /// ```
    /// use raykernel::ray::Ray;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let origin = Point3::new(0.0, 0.0, 0.0);
    /// let direction = Vector3::new(2.0, 0.0, 0.0);
    /// let ray = Ray::new(origin, direction);
    ///
    /// assert_eq!(ray.origin, origin);
    /// assert_eq!(ray.direction, direction);
    /// assert_eq!(ray.max_distance, f64::INFINITY);
    /// ```
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Ray<T> {
        Ray::with_max_distance(origin, direction, T::infinity())
    }

    /// Creates a new [`Ray`] which only accepts hits closer than `max_distance`.
    pub fn with_max_distance(origin: Point3<T>, direction: Vector3<T>, max_distance: T) -> Ray<T> {
        Ray {
            origin,
            direction,
            max_distance,
        }
    }

    /// Returns the point `origin + t * direction`.
    ///
    /// # Examples
    /// ```
    /// use raykernel::ray::Ray;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
    /// assert_eq!(ray.at(1.5), Point3::new(1.0, 3.0, 0.0));
    /// ```
    #[inline]
    pub fn at(&self, t: T) -> Point3<T> {
        Point3::from(multiply_add(&self.origin.coords, &self.direction, t))
    }

    /// Returns a copy of this ray with its bound lowered to `max_distance`.
    ///
    /// Used after an accepted hit so that later tests only report closer hits.
    #[must_use]
    pub fn shortened(&self, max_distance: T) -> Ray<T> {
        Ray {
            max_distance,
            ..*self
        }
    }

    /// Returns `true` if `t` lies strictly between zero and the ray's bound.
    #[inline]
    pub(crate) fn accepts(&self, t: T) -> bool {
        T::zero() < t && t < self.max_distance
    }
}
