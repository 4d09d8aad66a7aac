//! Common utilities shared by unit tests.
#![cfg(test)]

use nalgebra::{Point3, Vector3};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ray::Ray;
use crate::shapes::{Cone, Cylinder, Disc, Plane, Primitive, Sphere, Triangle};

/// Scalar type used by the tests.
pub type TReal = f64;
/// Point type used by the tests.
pub type TPoint3 = Point3<TReal>;
/// Vector type used by the tests.
pub type TVector3 = Vector3<TReal>;
/// Ray type used by the tests.
pub type TRay3 = Ray<TReal>;

/// A vector represented as a tuple
pub type TupleVec = (TReal, TReal, TReal);

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -1e3 to 1e3.
/// Large enough to cover realistic scene coordinates while keeping the
/// quadratic coefficients well inside `f64` precision.
pub fn tuplevec_small_strategy() -> impl Strategy<Value = TupleVec> {
    (-1e3..1e3, -1e3..1e3, -1e3..1e3)
}

/// Generate a non-degenerate direction, each component in `[-1, 1]` and
/// the whole vector at least `0.1` long.
pub fn direction_strategy() -> impl Strategy<Value = TupleVec> {
    (-1.0..1.0, -1.0..1.0, -1.0..1.0)
        .prop_filter("direction too short", |&(x, y, z): &TupleVec| {
            x * x + y * y + z * z > 0.01
        })
}

/// Convert a `TupleVec` to a [`TPoint3`].
pub fn tuple_to_point(tpl: &TupleVec) -> TPoint3 {
    TPoint3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` to a [`TVector3`].
pub fn tuple_to_vector(tpl: &TupleVec) -> TVector3 {
    TVector3::new(tpl.0, tpl.1, tpl.2)
}

/// One primitive of every kind, all centred near the origin and all
/// fitting inside the sphere of radius 3 around it.
pub fn generate_unit_scene() -> Vec<Primitive<TReal>> {
    let origin = TPoint3::origin();
    vec![
        Primitive::Sphere(Sphere::new(origin, 1.0)),
        Primitive::Triangle(
            Triangle::from_vertices(
                TPoint3::new(-1.0, -1.0, 0.0),
                TPoint3::new(1.0, -1.0, 0.0),
                TPoint3::new(0.0, 1.0, 0.0),
            )
            .unwrap(),
        ),
        Primitive::Cylinder(Cylinder::new(
            TPoint3::new(0.0, 0.0, -1.0),
            TVector3::z(),
            1.0,
            2.0,
        )),
        Primitive::Cone(Cone::from_height_radius(origin, TVector3::y(), 2.0, 1.0).unwrap()),
        Primitive::Disc(Disc::new(origin, TVector3::x(), 2.0)),
    ]
}

/// Every primitive of [`generate_unit_scene`] plus an unbounded plane.
pub fn generate_unit_scene_with_plane() -> Vec<Primitive<TReal>> {
    let mut scene = generate_unit_scene();
    scene.push(Primitive::Plane(Plane::new(
        TPoint3::new(0.0, -2.0, 0.0),
        TVector3::y(),
    )));
    scene
}

/// Generate `count` deterministic rays starting on a shell of radius 10
/// around the origin and aiming at random points inside the unit cube.
pub fn random_rays_at_origin(seed: u64, count: usize) -> Vec<TRay3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let from = TVector3::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            );
            let from = if from.norm() < 1e-3 {
                TVector3::x()
            } else {
                from.normalize()
            };
            let origin = TPoint3::from(from * 10.0);
            let target = TPoint3::new(
                rng.random_range(-0.5..=0.5),
                rng.random_range(-0.5..=0.5),
                rng.random_range(-0.5..=0.5),
            );
            TRay3::new(origin, target - origin)
        })
        .collect()
}
