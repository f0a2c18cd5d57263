//! Point lights and Phong illumination.

use crate::{color::Color, material::Material, vector::Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Light source without size, shining in all directions.
pub struct PointLight {
    /// World-space position.
    pub position: Vec4,
    /// Light color and brightness.
    pub intensity: Color,
}

impl PointLight {
    #[allow(missing_docs)]
    pub fn new(position: Vec4, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// Phong contribution of `light` to a surface point.
///
/// `surface_color` is the pattern color at `point`, `eye` and `normal` are unit directions.
/// An occluded point only receives the ambient term.
pub fn lighting(
    material: &Material,
    surface_color: Color,
    light: &PointLight,
    point: &Vec4,
    eye: &Vec4,
    normal: &Vec4,
    in_shadow: bool,
) -> Color {
    let effective_color = surface_color * light.intensity;
    let ambient = effective_color * material.ambient;

    if in_shadow {
        return ambient;
    }

    let Ok(light_dir) = (light.position - *point).normalize() else {
        return ambient;
    };

    let light_dot_normal = light_dir.dot_product(normal);

    // Light is on the other side of the surface.
    if light_dot_normal < 0. {
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_dir = (-light_dir).reflect(normal);
    let reflect_dot_eye = eye.dot_product(&reflect_dir);

    let specular = if reflect_dot_eye <= 0. {
        Color::BLACK
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}
