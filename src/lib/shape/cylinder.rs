use crate::{ray::Ray, vector::Vec4, EPSILON};

use super::{intersect_caps, is_negligible, solve_quadratic, Primitive};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Unit-radius cylinder around the Y axis, truncated to `(minimum, maximum)`.
pub struct Cylinder {
    /// Lower bound on `y`, exclusive for the side.
    pub minimum: f64,
    /// Upper bound on `y`, exclusive for the side.
    pub maximum: f64,
    /// Whether the ends are capped.
    pub closed: bool,
}

impl Cylinder {
    #[allow(missing_docs)]
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }
}

impl Default for Cylinder {
    /// Infinite open cylinder.
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false)
    }
}

impl Primitive for Cylinder {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (origin, direction) = (ray.origin(), ray.direction());
        let mut xs = Vec::new();

        let a = direction.x().powi(2) + direction.z().powi(2);

        // Rays parallel to the axis can only meet the caps.
        if !is_negligible(a, direction.len_sq()) {
            let b = 2. * (origin.x() * direction.x() + origin.z() * direction.z());
            let c = origin.x().powi(2) + origin.z().powi(2) - 1.;

            if let Some((t0, t1)) = solve_quadratic(a, b, c) {
                for t in [t0, t1] {
                    let y = origin.y() + t * direction.y();
                    if self.minimum < y && y < self.maximum {
                        xs.push(t);
                    }
                }
            }
        }

        if self.closed {
            intersect_caps(ray, self.minimum, self.maximum, |_| 1., &mut xs);
        }

        xs
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        let dist = point.x().powi(2) + point.z().powi(2);

        if dist < 1. && point.y() >= self.maximum - EPSILON {
            Vec4::direction(0., 1., 0.)
        } else if dist < 1. && point.y() <= self.minimum + EPSILON {
            Vec4::direction(0., -1., 0.)
        } else {
            Vec4::direction(point.x(), 0., point.z())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::test::{assert_ts, ray, sorted};

    #[test]
    fn misses() {
        let cases = [
            ((1., 0., 0.), (0., 1., 0.)),
            ((0., 0., 0.), (0., 1., 0.)),
            ((0., 0., -5.), (1., 1., 1.)),
        ];

        for (origin, direction) in cases {
            assert!(Cylinder::default()
                .local_intersect(&ray(origin, direction))
                .is_empty());
        }
    }

    #[test]
    fn hits_side() {
        let cases = [
            ((1., 0., -5.), (0., 0., 1.), [5., 5.]),
            ((0., 0., -5.), (0., 0., 1.), [4., 6.]),
            ((0.5, 0., -5.), (0.1, 1., 1.), [6.80798, 7.08872]),
        ];

        for (origin, direction, expected) in cases {
            let got = sorted(Cylinder::default().local_intersect(&ray(origin, direction)));
            assert_ts(&got, &expected);
        }
    }

    #[test]
    fn truncated() {
        let cylinder = Cylinder::new(1., 2., false);
        let cases = [
            ((0., 1.5, 0.), (0.1, 1., 0.), 0),
            ((0., 3., -5.), (0., 0., 1.), 0),
            ((0., 0., -5.), (0., 0., 1.), 0),
            ((0., 2., -5.), (0., 0., 1.), 0),
            ((0., 1., -5.), (0., 0., 1.), 0),
            ((0., 1.5, -2.), (0., 0., 1.), 2),
        ];

        for (origin, direction, count) in cases {
            assert_eq!(
                cylinder.local_intersect(&ray(origin, direction)).len(),
                count,
                "{origin:?} {direction:?}"
            );
        }
    }

    #[test]
    fn capped() {
        let cylinder = Cylinder::new(1., 2., true);
        let cases = [
            ((0., 3., 0.), (0., -1., 0.)),
            ((0., 3., -2.), (0., -1., 2.)),
            ((0., 0., -2.), (0., 1., 2.)),
        ];

        for (origin, direction) in cases {
            assert_eq!(
                cylinder.local_intersect(&ray(origin, direction)).len(),
                2,
                "{origin:?} {direction:?}"
            );
        }
    }

    #[test]
    fn side_normals() {
        let cases = [
            ((1., 0., 0.), (1., 0., 0.)),
            ((0., 5., -1.), (0., 0., -1.)),
            ((0., -2., 1.), (0., 0., 1.)),
            ((-1., 1., 0.), (-1., 0., 0.)),
        ];

        for (point, normal) in cases {
            assert_eq!(
                Cylinder::default().local_normal_at(&Vec4::point(point.0, point.1, point.2)),
                Vec4::direction(normal.0, normal.1, normal.2)
            );
        }
    }

    #[test]
    fn cap_normals() {
        let cylinder = Cylinder::new(1., 2., true);
        let cases = [
            ((0., 1., 0.), (0., -1., 0.)),
            ((0.5, 1., 0.), (0., -1., 0.)),
            ((0., 1., 0.5), (0., -1., 0.)),
            ((0., 2., 0.), (0., 1., 0.)),
            ((0.5, 2., 0.), (0., 1., 0.)),
            ((0., 2., 0.5), (0., 1., 0.)),
        ];

        for (point, normal) in cases {
            assert_eq!(
                cylinder.local_normal_at(&Vec4::point(point.0, point.1, point.2)),
                Vec4::direction(normal.0, normal.1, normal.2)
            );
        }
    }
}
