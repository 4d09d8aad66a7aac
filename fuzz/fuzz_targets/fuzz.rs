#![no_main]
use std::fmt::{self, Debug, Formatter};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nalgebra::{Point3, Vector3};
use ordered_float::NotNan;
use raykernel::batch::intersect_all;
use raykernel::ray::Ray;
use raykernel::shapes::{Cone, Cylinder, Disc, IntersectsRay, Plane, Primitive, Sphere, Triangle};
use raykernel::KernelValue;

type Float = f64;
const LIMIT: Float = 1_000_000.0;

fuzz_target!(|workload: Workload| {
    workload.fuzz();
});

#[derive(Arbitrary)]
struct ArbitraryPoint {
    coordinates: [NotNan<Float>; 3],
}

impl ArbitraryPoint {
    fn point(&self) -> Point3<Float> {
        Point3::from_slice(&self.coordinates).map(|f| f.into_inner().clamp(-LIMIT, LIMIT))
    }

    fn vector(&self) -> Vector3<Float> {
        self.point().coords
    }
}

impl Debug for ArbitraryPoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.point(), f)
    }
}

fn positive(value: NotNan<Float>) -> Float {
    value.into_inner().abs().clamp(1e-3, LIMIT)
}

#[derive(Debug, Arbitrary)]
enum ArbitraryShape {
    Sphere {
        center: ArbitraryPoint,
        radius: NotNan<Float>,
    },
    Triangle {
        a: ArbitraryPoint,
        b: ArbitraryPoint,
        c: ArbitraryPoint,
    },
    Cylinder {
        base: ArbitraryPoint,
        top: ArbitraryPoint,
        radius: NotNan<Float>,
    },
    Cone {
        apex: ArbitraryPoint,
        axis: ArbitraryPoint,
        height: NotNan<Float>,
        radius: NotNan<Float>,
    },
    Disc {
        center: ArbitraryPoint,
        normal: ArbitraryPoint,
        radius: NotNan<Float>,
    },
    Plane {
        point: ArbitraryPoint,
        normal: ArbitraryPoint,
    },
}

impl ArbitraryShape {
    /// Builds the shape through its checked constructor, skipping
    /// degenerate input.
    fn primitive(&self) -> Option<Primitive<Float>> {
        let primitive: Primitive<Float> = match self {
            ArbitraryShape::Sphere { center, radius } => {
                Sphere::try_new(center.point(), positive(*radius)).ok()?.into()
            }
            ArbitraryShape::Triangle { a, b, c } => {
                Triangle::from_vertices(a.point(), b.point(), c.point()).ok()?.into()
            }
            ArbitraryShape::Cylinder { base, top, radius } => {
                Cylinder::between(base.point(), top.point(), positive(*radius)).ok()?.into()
            }
            ArbitraryShape::Cone {
                apex,
                axis,
                height,
                radius,
            } => Cone::from_height_radius(
                apex.point(),
                axis.vector(),
                positive(*height),
                positive(*radius),
            )
            .ok()?
            .into(),
            ArbitraryShape::Disc {
                center,
                normal,
                radius,
            } => Disc::try_new(center.point(), normal.vector(), positive(*radius)).ok()?.into(),
            ArbitraryShape::Plane { point, normal } => {
                Plane::try_new(point.point(), normal.vector()).ok()?.into()
            }
        };
        Some(primitive)
    }
}

#[derive(Arbitrary)]
struct ArbitraryRay {
    origin: ArbitraryPoint,
    destination: ArbitraryPoint,
    max_distance: Option<NotNan<Float>>,
}

impl Debug for ArbitraryRay {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.ray(), f)
    }
}

impl ArbitraryRay {
    fn ray(&self) -> Ray<Float> {
        let mut direction = self.destination.point() - self.origin.point();
        // Ensure no degenerate direction.
        if direction.magnitude() < 1e-6 {
            direction = Vector3::new(1.0, 1.0, 1.0);
        }
        let direction = direction.normalize();
        let max_distance = self
            .max_distance
            .map_or(Float::INFINITY, |t| t.into_inner().abs());
        Ray::with_max_distance(self.origin.point(), direction, max_distance)
    }
}

#[derive(Debug, Arbitrary)]
struct Workload {
    shapes: Vec<ArbitraryShape>,
    rays: Vec<ArbitraryRay>,
}

impl Workload {
    fn fuzz(self) {
        if self.shapes.len() * self.rays.len() > 4096 {
            return;
        }
        let rays = self.rays.iter().map(ArbitraryRay::ray).collect::<Vec<_>>();

        for shape in self.shapes.iter().filter_map(ArbitraryShape::primitive) {
            let batch = intersect_all(&rays, &shape);
            for (ray, hit) in rays.iter().zip(batch) {
                let single = shape.intersects_ray(ray);
                // Bit-identical on every call.
                assert_eq!(single.map(Float::to_bits), hit.map(Float::to_bits));

                if let Some(t) = single {
                    assert!(t.is_finite(), "{shape:?} {ray:?} -> {t}");
                    let unbiased = t + <Float as KernelValue>::T_CORRECTION;
                    assert!(unbiased >= 0.0, "{shape:?} {ray:?} -> {t}");
                    assert!(unbiased <= ray.max_distance * (1.0 + 1e-12), "{shape:?} {ray:?} -> {t}");
                }
            }
        }
    }
}
