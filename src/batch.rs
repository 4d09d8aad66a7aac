//! Evaluation of one shape against many rays.
//!
//! With the `rayon` feature (default) the rays are split across the rayon
//! thread pool. The kernel is pure, so the result is the same either way.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::ray::Ray;
use crate::shapes::IntersectsRay;
use crate::KernelValue;

/// Intersects every ray in `rays` with `shape`.
///
/// The result has one entry per ray, in the same order.
///
/// # Examples
/// ```
/// use raykernel::batch::intersect_all;
/// use raykernel::ray::Ray;
/// use raykernel::shapes::Sphere;
/// use nalgebra::{Point3, Vector3};
///
/// let sphere = Sphere::new(Point3::origin(), 1.0);
/// let rays = [
///     Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0)),
///     Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0)),
/// ];
///
/// let hits = intersect_all(&rays, &sphere);
/// assert!(hits[0].is_some());
/// assert_eq!(hits[1], None);
/// ```
#[cfg(feature = "rayon")]
pub fn intersect_all<T, S>(rays: &[Ray<T>], shape: &S) -> Vec<Option<T>>
where
    T: KernelValue,
    S: IntersectsRay<T> + Sync + ?Sized,
{
    log::trace!("intersecting {} rays in parallel", rays.len());
    rays.par_iter().map(|ray| shape.intersects_ray(ray)).collect()
}

/// Intersects every ray in `rays` with `shape`.
///
/// The result has one entry per ray, in the same order.
#[cfg(not(feature = "rayon"))]
pub fn intersect_all<T, S>(rays: &[Ray<T>], shape: &S) -> Vec<Option<T>>
where
    T: KernelValue,
    S: IntersectsRay<T> + Sync + ?Sized,
{
    log::trace!("intersecting {} rays", rays.len());
    rays.iter().map(|ray| shape.intersects_ray(ray)).collect()
}

#[cfg(test)]
mod tests {
    use super::intersect_all;
    use crate::shapes::IntersectsRay;
    use crate::testbase::{generate_unit_scene_with_plane, random_rays_at_origin};

    #[test]
    fn batch_matches_single_calls() {
        let rays = random_rays_at_origin(0, 512);
        for shape in generate_unit_scene_with_plane() {
            let batch = intersect_all(&rays, &shape);
            assert_eq!(batch.len(), rays.len());
            for (ray, hit) in rays.iter().zip(&batch) {
                assert_eq!(shape.intersects_ray(ray), *hit);
            }
        }
    }

    #[test]
    fn batch_is_deterministic() {
        let rays = random_rays_at_origin(42, 256);
        let scene = generate_unit_scene_with_plane();
        let first: Vec<_> = scene.iter().map(|s| intersect_all(&rays, s)).collect();
        let second: Vec<_> = scene.iter().map(|s| intersect_all(&rays, s)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rays_aimed_at_the_sphere_core_all_hit() {
        // Every ray starts 10 units out and aims inside the unit cube,
        // whose inner half lies inside the unit sphere.
        let rays = random_rays_at_origin(7, 128)
            .into_iter()
            .map(|ray| {
                let target = ray.at(1.0);
                let shrunk = target.coords * 0.5;
                let direction = (nalgebra::Point3::from(shrunk) - ray.origin).normalize();
                crate::ray::Ray::new(ray.origin, direction)
            })
            .collect::<Vec<_>>();
        let scene = generate_unit_scene_with_plane();
        assert!(intersect_all(&rays, &scene[0]).iter().all(Option::is_some));
    }

    #[test]
    fn empty_batch() {
        let scene = generate_unit_scene_with_plane();
        assert!(intersect_all::<f64, _>(&[], &scene[0]).is_empty());
    }
}
