use crate::{ray::Ray, vector::Vec4};

use super::{solve_quadratic, Primitive};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Unit sphere centered at the origin.
pub struct Sphere;

impl Primitive for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (origin, direction) = (ray.origin(), ray.direction());
        let to_ray = *origin - Vec4::point(0., 0., 0.);

        let a = direction.dot_product(direction);
        let b = 2. * direction.dot_product(&to_ray);
        let c = to_ray.dot_product(&to_ray) - 1.;

        solve_quadratic(a, b, c)
            .map(|(t0, t1)| vec![t0, t1])
            .unwrap_or_default()
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        *point - Vec4::point(0., 0., 0.)
    }
}
