use crate::{ray::Ray, vector::Vec4};

use super::{is_negligible, Primitive};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Axis-aligned cube spanning `[-1, 1]` on every axis.
pub struct Cube;

/// Entry and exit distances through the slab `[-1, 1]` of a single axis.
fn check_axis(origin: f64, direction: f64, length: f64) -> (f64, f64) {
    let (tmin_numerator, tmax_numerator) = (-1. - origin, 1. - origin);

    let (tmin, tmax) = if !is_negligible(direction, length) {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (
            tmin_numerator * f64::INFINITY,
            tmax_numerator * f64::INFINITY,
        )
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

impl Primitive for Cube {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (origin, direction) = (ray.origin(), ray.direction());
        let length = direction.len();

        let (tmin, tmax) = (0..3)
            .map(|axis| check_axis(origin[axis], direction[axis], length))
            .fold((f64::NEG_INFINITY, f64::INFINITY), |(lo, hi), (min, max)| {
                (lo.max(min), hi.min(max))
            });

        if tmin > tmax {
            return Vec::new();
        }

        vec![tmin, tmax]
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        let (x, y, z) = (point.x(), point.y(), point.z());
        let max = x.abs().max(y.abs()).max(z.abs());

        if max == x.abs() {
            Vec4::direction(x, 0., 0.)
        } else if max == y.abs() {
            Vec4::direction(0., y, 0.)
        } else {
            Vec4::direction(0., 0., z)
        }
    }
}
