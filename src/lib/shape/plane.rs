use crate::{ray::Ray, vector::Vec4};

use super::{is_negligible, Primitive};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Infinite plane `y = 0`.
pub struct Plane;

impl Primitive for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (origin, direction) = (ray.origin(), ray.direction());

        // Parallel or coplanar.
        if is_negligible(direction.y(), direction.len()) {
            return Vec::new();
        }

        vec![-origin.y() / direction.y()]
    }

    fn local_normal_at(&self, _point: &Vec4) -> Vec4 {
        Vec4::direction(0., 1., 0.)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::test::ray;

    #[test]
    fn constant_normal() {
        for point in [(0., 0., 0.), (10., 0., -10.), (-5., 0., 150.)] {
            assert_eq!(
                Plane.local_normal_at(&Vec4::point(point.0, point.1, point.2)),
                Vec4::direction(0., 1., 0.)
            );
        }
    }

    #[test]
    fn parallel_and_coplanar() {
        assert!(Plane
            .local_intersect(&ray((0., 10., 0.), (0., 0., 1.)))
            .is_empty());
        assert!(Plane
            .local_intersect(&ray((0., 0., 0.), (0., 0., 1.)))
            .is_empty());
    }

    #[test]
    fn from_above_and_below() {
        assert_eq!(Plane.local_intersect(&ray((0., 1., 0.), (0., -1., 0.))), vec![1.]);
        assert_eq!(Plane.local_intersect(&ray((0., -1., 0.), (0., 1., 0.))), vec![1.]);
    }
}
