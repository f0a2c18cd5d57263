//! Color-at-point rules with their own local space.

use crate::{
    color::Color,
    matrix::{self, Mat4, Transform},
    vector::Vec4,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Pattern variants, each mapping a pattern-space point to a color.
pub enum PatternKind {
    /// Constant color.
    Plain(Color),
    /// Alternates on the parity of `floor(x)`.
    Stripe(Color, Color),
    /// Linear blend along `x`: `a * x + b * (1 - x)`.
    Gradient(Color, Color),
    /// Alternates on the parity of `floor(sqrt(x² + z²))`.
    Ring(Color, Color),
    /// Alternates on the parity of `floor(x) + floor(y) + floor(z)`.
    Checker(Color, Color),
}

/// Pick `a` on odd values, `b` on even ones.
fn alternate(value: f64, a: Color, b: Color) -> Color {
    if value.floor().rem_euclid(2.) == 1. {
        a
    } else {
        b
    }
}

impl PatternKind {
    /// Pure color lookup at a point expressed in pattern space.
    pub fn color_at(&self, point: &Vec4) -> Color {
        match *self {
            PatternKind::Plain(color) => color,
            PatternKind::Stripe(a, b) => alternate(point.x(), a, b),
            PatternKind::Gradient(a, b) => a * point.x() + b * (1. - point.x()),
            PatternKind::Ring(a, b) => alternate(point.x().hypot(point.z()), a, b),
            PatternKind::Checker(a, b) => alternate(
                point.x().floor() + point.y().floor() + point.z().floor(),
                a,
                b,
            ),
        }
    }

    /// Numeric tag shared with the GPU marshaling layout.
    pub fn code(&self) -> u32 {
        match self {
            PatternKind::Plain(_) => 0,
            PatternKind::Stripe(..) => 1,
            PatternKind::Gradient(..) => 2,
            PatternKind::Ring(..) => 3,
            PatternKind::Checker(..) => 4,
        }
    }

    /// The two colors of the pattern, a plain pattern repeating its only one.
    pub fn colors(&self) -> (Color, Color) {
        match *self {
            PatternKind::Plain(color) => (color, color),
            PatternKind::Stripe(a, b)
            | PatternKind::Gradient(a, b)
            | PatternKind::Ring(a, b)
            | PatternKind::Checker(a, b) => (a, b),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A [PatternKind] placed in shape space by its own transform.
pub struct Pattern {
    /// Color rule.
    pub kind: PatternKind,
    transform: Transform,
}

impl Pattern {
    /// Create a pattern transformed by `transform`, failing if it cannot be inverted.
    pub fn new(kind: PatternKind, transform: Mat4) -> Result<Self, matrix::Error> {
        Ok(Self {
            kind,
            transform: Transform::new(transform)?,
        })
    }

    /// Constant color pattern.
    pub fn plain(color: Color) -> Self {
        Self::from(PatternKind::Plain(color))
    }

    #[allow(missing_docs)]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Color at a point expressed in the owning shape's object space.
    pub fn color_at_object(&self, object_point: &Vec4) -> Color {
        self.kind.color_at(&self.transform.to_local(*object_point))
    }
}

impl From<PatternKind> for Pattern {
    fn from(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Transform::default(),
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::plain(Color::WHITE)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matrix::{scaling, translation};

    const A: Color = Color::WHITE;
    const B: Color = Color::BLACK;

    fn at(kind: PatternKind, x: f64, y: f64, z: f64) -> Color {
        kind.color_at(&Vec4::point(x, y, z))
    }

    #[test]
    fn plain() {
        let color = Color::new(0.2, 0.4, 0.6);

        assert_eq!(at(PatternKind::Plain(color), 12., -3., 0.5), color);
    }

    #[test]
    fn stripe_alternates_in_x_only() {
        let stripe = PatternKind::Stripe(A, B);

        assert_eq!(at(stripe, 0., 0., 0.), B);
        assert_eq!(at(stripe, 0.9, 0., 0.), B);
        assert_eq!(at(stripe, 1., 0., 0.), A);
        assert_eq!(at(stripe, -0.1, 0., 0.), A);
        assert_eq!(at(stripe, -1., 0., 0.), A);
        assert_eq!(at(stripe, -1.1, 0., 0.), B);
        assert_eq!(at(stripe, 0., 1., 2.), B);
    }

    #[test]
    fn gradient_blends() {
        let gradient = PatternKind::Gradient(A, B);

        assert!(at(gradient, 0.25, 0., 0.).approx_eq(&Color::new(0.25, 0.25, 0.25), 1e-12));
        assert!(at(gradient, 0.75, 0., 0.).approx_eq(&Color::new(0.75, 0.75, 0.75), 1e-12));
        assert_eq!(at(gradient, 0., 0., 0.), B);
    }

    #[test]
    fn ring_uses_x_and_z() {
        let ring = PatternKind::Ring(A, B);

        assert_eq!(at(ring, 0., 0., 0.), B);
        assert_eq!(at(ring, 1., 0., 0.), A);
        assert_eq!(at(ring, 0., 0., 1.), A);
        assert_eq!(at(ring, 0.708, 0., 0.708), A);
        assert_eq!(at(ring, 2., 5., 0.), B);
    }

    #[test]
    fn checker_in_three_dimensions() {
        let checker = PatternKind::Checker(A, B);

        assert_eq!(at(checker, 0., 0., 0.), B);
        assert_eq!(at(checker, 0.99, 0., 0.), B);
        assert_eq!(at(checker, 1.01, 0., 0.), A);
        assert_eq!(at(checker, 0., 1.01, 0.), A);
        assert_eq!(at(checker, 0., 0., 1.01), A);
        assert_eq!(at(checker, -0.5, 0., 0.), A);
        assert_eq!(at(checker, -0.5, -0.5, 0.), B);
    }

    #[test]
    fn own_transform() {
        let pattern = Pattern::new(PatternKind::Stripe(A, B), scaling(2., 2., 2.)).unwrap();
        assert_eq!(pattern.color_at_object(&Vec4::point(1.5, 0., 0.)), B);

        let pattern = Pattern::new(PatternKind::Stripe(A, B), translation(0.5, 0., 0.)).unwrap();
        assert_eq!(pattern.color_at_object(&Vec4::point(2.5, 0., 0.)), B);
    }

    #[test]
    fn singular_transform() {
        assert!(Pattern::new(PatternKind::Plain(A), scaling(1., 0., 1.)).is_err());
    }
}
