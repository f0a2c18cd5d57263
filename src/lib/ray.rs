//! Rays cast through the scene.

use crate::{
    matrix::Mat4,
    vector::{self, Vec4},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// A ray defined by its origin position and direction.
pub struct Ray {
    origin: Vec4,
    direction: Vec4,
}

impl Ray {
    /// Create a new [Ray] from a position and a direction, the latter being normalized.
    ///
    /// # Example
    /// ```
    /// use rayshade::{ray::Ray, vector::Vec4};
    ///
    /// let ray = Ray::new(Vec4::point(0., 0., -5.), Vec4::direction(0., 0., 2.)).unwrap();
    /// assert_eq!(ray.position(4.), Vec4::point(0., 0., -1.));
    ///
    /// assert!(Ray::new(Vec4::point(0., 0., 0.), Vec4::direction(0., 0., 0.)).is_err());
    /// ```
    pub fn new(origin: Vec4, direction: Vec4) -> Result<Self, vector::Error> {
        Ok(Self {
            origin,
            direction: direction.normalize()?,
        })
    }

    /// Build from a direction the caller already knows to be of unit length.
    pub(crate) fn from_unit(origin: Vec4, direction: Vec4) -> Self {
        Self { origin, direction }
    }

    /// Get position at `t` along ray.
    pub fn position(&self, t: f64) -> Vec4 {
        self.origin + self.direction * t
    }

    /// Map the ray through `matrix`. The direction is not renormalized so that `t` values
    /// computed against the transformed ray stay valid for this one.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        Self {
            origin: *matrix * self.origin,
            direction: *matrix * self.direction,
        }
    }

    #[inline]
    /// Get origin position.
    pub fn origin(&self) -> &Vec4 {
        &self.origin
    }

    #[inline]
    /// Get direction.
    pub fn direction(&self) -> &Vec4 {
        &self.direction
    }
}
