use crate::{ray::Ray, vector::Vec4, EPSILON};

use super::{intersect_caps, is_negligible, solve_quadratic, Primitive};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Double-napped cone `x² + z² = y²` around the Y axis, truncated to `(minimum, maximum)`.
pub struct Cone {
    /// Lower bound on `y`, exclusive for the side.
    pub minimum: f64,
    /// Upper bound on `y`, exclusive for the side.
    pub maximum: f64,
    /// Whether the ends are capped.
    pub closed: bool,
}

impl Cone {
    #[allow(missing_docs)]
    pub fn new(minimum: f64, maximum: f64, closed: bool) -> Self {
        Self {
            minimum,
            maximum,
            closed,
        }
    }

    fn within(&self, y: f64) -> bool {
        self.minimum < y && y < self.maximum
    }
}

impl Default for Cone {
    /// Infinite open cone.
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false)
    }
}

impl Primitive for Cone {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let (o, d) = (ray.origin(), ray.direction());
        let mut xs = Vec::new();

        let a = d.x().powi(2) - d.y().powi(2) + d.z().powi(2);
        let b = 2. * (o.x() * d.x() - o.y() * d.y() + o.z() * d.z());
        let c = o.x().powi(2) - o.y().powi(2) + o.z().powi(2);

        if is_negligible(a, d.len_sq()) {
            // Parallel to one nappe: the equation is linear.
            if !is_negligible(b, d.len()) {
                let t = -c / (2. * b);
                if self.within(o.y() + t * d.y()) {
                    xs.push(t);
                }
            }
        } else if let Some((t0, t1)) = solve_quadratic(a, b, c) {
            for t in [t0, t1] {
                if self.within(o.y() + t * d.y()) {
                    xs.push(t);
                }
            }
        }

        if self.closed {
            intersect_caps(ray, self.minimum, self.maximum, f64::abs, &mut xs);
        }

        xs
    }

    fn local_normal_at(&self, point: &Vec4) -> Vec4 {
        let (x, y, z) = (point.x(), point.y(), point.z());
        let dist = x * x + z * z;

        if dist < self.maximum.powi(2) && y >= self.maximum - EPSILON {
            Vec4::direction(0., 1., 0.)
        } else if dist < self.minimum.powi(2) && y <= self.minimum + EPSILON {
            Vec4::direction(0., -1., 0.)
        } else {
            let slope = if y > 0. { -dist.sqrt() } else { dist.sqrt() };
            Vec4::direction(x, slope, z)
        }
    }
}
