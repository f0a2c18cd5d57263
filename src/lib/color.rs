//! RGB color with floating-point components, left un-clamped until serialization.

use std::{
    iter::Sum,
    ops::{Div, Mul},
};

use ::derive_more::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Default, Debug, Add, AddAssign, Sub, PartialEq)]
/// Linear RGB triplet.
pub struct Color {
    #[allow(missing_docs)]
    pub r: f64,
    #[allow(missing_docs)]
    pub g: f64,
    #[allow(missing_docs)]
    pub b: f64,
}

impl Color {
    /// Background color, also the neutral element of light accumulation.
    pub const BLACK: Color = Color::new(0., 0., 0.);
    #[allow(missing_docs)]
    pub const WHITE: Color = Color::new(1., 1., 1.);

    #[allow(missing_docs)]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// Clamp each component to `[0, 1]` and scale it to a byte.
    pub fn as_bytes(&self) -> [u8; 3] {
        let Self { r, g, b } = self.clamp();
        [(r * 255.) as u8, (g * 255.) as u8, (b * 255.) as u8]
    }

    #[allow(missing_docs)]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0., 1.),
            g: self.g.clamp(0., 1.),
            b: self.b.clamp(0., 1.),
        }
    }

    /// Component-wise comparison within an absolute `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.r *= rhs;
        self.g *= rhs;
        self.b *= rhs;

        self
    }
}

/// Hadamard product, used to filter a light by a surface.
impl Mul for Color {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self.r *= rhs.r;
        self.g *= rhs.g;
        self.b *= rhs.b;

        self
    }
}

impl Sum<Color> for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Self {
        iter.fold(Color::BLACK, |acc, cur| acc + cur)
    }
}

impl Div<f64> for Color {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self::Output {
        self.r /= rhs;
        self.g /= rhs;
        self.b /= rhs;

        self
    }
}
