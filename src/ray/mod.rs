//! This module holds the [`Ray`] definition.
mod ray_impl;

pub use self::ray_impl::*;
