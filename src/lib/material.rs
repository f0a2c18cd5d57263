//! Material definition.

use crate::{color::Color, pattern::Pattern};

#[derive(Clone, Debug, PartialEq)]
/// Surface appearance of a [Shape](crate::shape::Shape): a color pattern and Phong coefficients.
pub struct Material {
    /// Surface color rule.
    pub pattern: Pattern,
    /// Share of the light contributed regardless of orientation.
    pub ambient: f64,
    /// Lambertian reflection coefficient (k_d).
    pub diffuse: f64,
    /// Specular highlight coefficient (k_s).
    pub specular: f64,
    /// Specular exponent, must be strictly positive.
    pub shininess: f64,
    /// How much of the mirrored scene is added, 0 disables reflection rays.
    pub reflective: f64,
    /// Carried for marshaling, unused by the CPU shader.
    pub transparency: f64,
    /// Carried for marshaling, unused by the CPU shader.
    pub refractive_index: f64,
}

impl Material {
    /// Default coefficients on top of the given pattern.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            ..Default::default()
        }
    }

    /// Default coefficients with a constant color.
    pub fn plain(color: Color) -> Self {
        Self::new(Pattern::plain(color))
    }
}

impl Default for Material {
    /// Shiny white material.
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.,
            reflective: 0.,
            transparency: 0.,
            refractive_index: 1.,
        }
    }
}
