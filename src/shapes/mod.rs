//! Analytic primitives and their ray intersection tests.
//!
//! Every primitive is a plain value type implementing [`IntersectsRay`].
//! [`Primitive`] closes the set so a caller can store mixed shapes in one
//! collection and dispatch without dynamic dispatch.

mod cone;
mod cylinder;
mod disc;
mod plane;
mod sphere;
mod triangle;

pub use self::cone::{intersect_cone, Cone};
pub use self::cylinder::{intersect_cylinder, Cylinder};
pub use self::disc::{intersect_disc, Disc};
pub use self::plane::{intersect_plane, Plane};
pub use self::sphere::{intersect_sphere, Sphere};
pub use self::triangle::{intersect_triangle, Triangle};

use crate::ray::Ray;
use crate::KernelValue;

/// A trait implemented by shapes that a [`Ray`] can hit.
pub trait IntersectsRay<T: KernelValue> {
    /// Returns the bias-corrected distance to the closest hit with
    /// `0 < t < ray.max_distance`, or `None` if there is no such hit.
    ///
    /// # Examples
    /// ```
    /// use raykernel::ray::Ray;
    /// use raykernel::shapes::{IntersectsRay, Sphere};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let sphere = Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0);
    /// let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
    ///
    /// let t: f64 = sphere.intersects_ray(&ray).unwrap();
    /// assert!((t - (4.0 - 1e-5)).abs() < 1e-12);
    /// ```
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T>;
}

/// The closed set of primitives supported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive<T: KernelValue> {
    /// See [`Sphere`].
    Sphere(Sphere<T>),
    /// See [`Triangle`].
    Triangle(Triangle<T>),
    /// See [`Cylinder`].
    Cylinder(Cylinder<T>),
    /// See [`Cone`].
    Cone(Cone<T>),
    /// See [`Disc`].
    Disc(Disc<T>),
    /// See [`Plane`].
    Plane(Plane<T>),
}

impl<T: KernelValue> IntersectsRay<T> for Primitive<T> {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        match self {
            Primitive::Sphere(sphere) => intersect_sphere(ray, sphere),
            Primitive::Triangle(triangle) => intersect_triangle(ray, triangle),
            Primitive::Cylinder(cylinder) => intersect_cylinder(ray, cylinder),
            Primitive::Cone(cone) => intersect_cone(ray, cone),
            Primitive::Disc(disc) => intersect_disc(ray, disc),
            Primitive::Plane(plane) => intersect_plane(ray, plane),
        }
    }
}

impl<T: KernelValue, S: IntersectsRay<T> + ?Sized> IntersectsRay<T> for &S {
    fn intersects_ray(&self, ray: &Ray<T>) -> Option<T> {
        (**self).intersects_ray(ray)
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident),*) => {
        $(
            impl<T: KernelValue> From<$shape<T>> for Primitive<T> {
                fn from(shape: $shape<T>) -> Self {
                    Primitive::$shape(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Sphere, Triangle, Cylinder, Cone, Disc, Plane);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{IntersectsRay, Primitive, Sphere};
    use crate::testbase::{
        direction_strategy, generate_unit_scene, generate_unit_scene_with_plane, tuple_to_point,
        tuple_to_vector, tuplevec_small_strategy, TPoint3, TRay3, TVector3,
    };

    #[test]
    fn dispatch_matches_direct_call() {
        let sphere = Sphere::new(TPoint3::origin(), 1.0);
        let ray = TRay3::new(TPoint3::new(0.0, 0.0, 5.0), TVector3::new(0.0, 0.0, -1.0));
        let primitive: Primitive<f64> = sphere.into();
        assert_eq!(primitive.intersects_ray(&ray), sphere.intersects_ray(&ray));
        assert_eq!((&primitive).intersects_ray(&ray), sphere.intersects_ray(&ray));
    }

    #[test]
    fn closest_hit_by_narrowing() {
        // Along -z from far away the sphere surface (z = 1) comes first,
        // then the triangle and the disc both sit at z = 0 behind it.
        let scene = generate_unit_scene();
        let mut ray = TRay3::new(TPoint3::new(0.0, 0.0, 10.0), TVector3::new(0.0, 0.0, -1.0));
        let mut closest = None;
        for (index, shape) in scene.iter().enumerate() {
            if let Some(t) = shape.intersects_ray(&ray) {
                ray = ray.shortened(t);
                closest = Some(index);
            }
        }
        assert_eq!(closest, Some(0));
        assert!((ray.max_distance - (9.0 - crate::T_CORRECTION)).abs() < 1e-12);
    }

    proptest! {
        // Calling any test twice yields bit-identical results.
        #[test]
        fn intersection_is_idempotent(origin in tuplevec_small_strategy(),
                                      direction in direction_strategy()) {
            let ray = TRay3::new(tuple_to_point(&origin), tuple_to_vector(&direction));
            for shape in generate_unit_scene_with_plane() {
                let first = shape.intersects_ray(&ray).map(f64::to_bits);
                let second = shape.intersects_ray(&ray).map(f64::to_bits);
                prop_assert_eq!(first, second);
            }
        }

        // No accepted hit lies outside (0, max_distance) before the bias.
        #[test]
        fn hits_respect_ray_bounds(origin in tuplevec_small_strategy(),
                                   direction in direction_strategy(),
                                   max_distance in 0.0..2000.0_f64) {
            let ray = TRay3::with_max_distance(
                tuple_to_point(&origin),
                tuple_to_vector(&direction),
                max_distance,
            );
            for shape in generate_unit_scene_with_plane() {
                if let Some(t) = shape.intersects_ray(&ray) {
                    let unbiased = t + crate::T_CORRECTION;
                    // Undoing the bias may round onto either end of the range.
                    prop_assert!(unbiased >= 0.0);
                    prop_assert!(unbiased <= max_distance);
                }
            }
        }

        // Every bounded primitive sits inside the sphere of radius 3 around
        // the origin, so a ray starting outside that sphere and pointing
        // away from the origin cannot hit any of them.
        #[test]
        fn rays_pointing_away_miss(origin in tuplevec_small_strategy(),
                                   direction in direction_strategy()) {
            let origin = tuple_to_point(&origin);
            let direction = tuple_to_vector(&direction);
            prop_assume!(origin.coords.norm() > 3.5);
            prop_assume!(direction.dot(&origin.coords) > 0.0);
            let ray = TRay3::new(origin, direction);
            for shape in generate_unit_scene() {
                prop_assert_eq!(shape.intersects_ray(&ray), None);
            }
        }
    }
}
