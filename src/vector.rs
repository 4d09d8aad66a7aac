//! Vector algebra used by the intersection routines.
//!
//! These are thin, total functions over [`Vector3`]. They exist so that the
//! intersection code reads like the formulas it implements.

use nalgebra::Vector3;

use crate::KernelValue;

/// Dot product of `u` and `v`.
#[inline(always)]
pub fn dot<T: KernelValue>(u: &Vector3<T>, v: &Vector3<T>) -> T {
    u.dot(v)
}

/// Cross product of `u` and `v`, following the right-hand rule.
#[inline(always)]
pub fn cross<T: KernelValue>(u: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    u.cross(v)
}

/// Euclidean length, `sqrt(dot(v, v))`.
#[inline(always)]
pub fn length<T: KernelValue>(v: &Vector3<T>) -> T {
    dot(v, v).sqrt()
}

/// Component-wise sum `u + v`.
#[inline(always)]
pub fn add<T: KernelValue>(u: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    u + v
}

/// Component-wise difference `u - v`.
#[inline(always)]
pub fn sub<T: KernelValue>(u: &Vector3<T>, v: &Vector3<T>) -> Vector3<T> {
    u - v
}

/// Scaled addition `u + v * s`.
#[inline(always)]
pub fn multiply_add<T: KernelValue>(u: &Vector3<T>, v: &Vector3<T>, s: T) -> Vector3<T> {
    u + v * s
}

/// Returns `v` scaled to unit length, or `None` if `v` has zero length.
pub(crate) fn normalized<T: KernelValue>(v: &Vector3<T>) -> Option<Vector3<T>> {
    let len = length(v);
    if len > T::zero() && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}
