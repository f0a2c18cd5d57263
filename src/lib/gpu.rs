//! Flat, GPU-friendly records of a built scene.
//!
//! Every record is `#[repr(C)]`, made of 4-byte scalars and sized to a multiple of 16 bytes so
//! that arrays of them can be uploaded as storage buffers as-is. Matrices are stored row-major.

use bytemuck::{Pod, Zeroable};

use crate::{
    camera::Camera,
    color::Color,
    light::PointLight,
    material::Material,
    matrix::Mat4,
    pattern::Pattern,
    shape::Shape,
    vector::Vec4,
    world::World,
    Built,
};

fn mat4(matrix: &Mat4) -> [f32; 16] {
    let mut res = [0.; 16];
    for (row, values) in matrix.inner.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            res[row * 4 + col] = *value as f32;
        }
    }
    res
}

fn vec4(vector: &Vec4) -> [f32; 4] {
    <[f64; 4]>::from(*vector).map(|x| x as f32)
}

fn rgba(color: &Color) -> [f32; 4] {
    [color.r as f32, color.g as f32, color.b as f32, 1.]
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// Camera parameters needed to generate primary rays.
pub struct GpuCamera {
    /// Camera-to-world matrix.
    pub inv_transform: [f32; 16],
    #[allow(missing_docs)]
    pub half_width: f32,
    #[allow(missing_docs)]
    pub half_height: f32,
    #[allow(missing_docs)]
    pub pixel_size: f32,
    #[allow(missing_docs)]
    pub hsize: u32,
    #[allow(missing_docs)]
    pub vsize: u32,
    _pad: [u32; 3],
}

impl From<&Camera> for GpuCamera {
    fn from(camera: &Camera) -> Self {
        let (half_width, half_height) = camera.half_size();
        let (hsize, vsize) = camera.size();

        Self {
            inv_transform: mat4(camera.transform().inverse()),
            half_width: half_width as f32,
            half_height: half_height as f32,
            pixel_size: camera.pixel_size() as f32,
            hsize,
            vsize,
            _pad: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// Phong coefficients of a [Material], its pattern being stored separately.
pub struct GpuMaterial {
    #[allow(missing_docs)]
    pub ambient: f32,
    #[allow(missing_docs)]
    pub diffuse: f32,
    #[allow(missing_docs)]
    pub specular: f32,
    #[allow(missing_docs)]
    pub shininess: f32,
    #[allow(missing_docs)]
    pub reflective: f32,
    #[allow(missing_docs)]
    pub transparency: f32,
    #[allow(missing_docs)]
    pub refractive_index: f32,
    _pad: f32,
}

impl From<&Material> for GpuMaterial {
    fn from(material: &Material) -> Self {
        Self {
            ambient: material.ambient as f32,
            diffuse: material.diffuse as f32,
            specular: material.specular as f32,
            shininess: material.shininess as f32,
            reflective: material.reflective as f32,
            transparency: material.transparency as f32,
            refractive_index: material.refractive_index as f32,
            _pad: 0.,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// A [Pattern] tagged by its [code](crate::pattern::PatternKind::code).
pub struct GpuPattern {
    /// Variant tag.
    pub kind: u32,
    _pad: [u32; 3],
    /// Color picked on odd cells, or the only color of a plain pattern.
    pub a: [f32; 4],
    /// Color picked on even cells.
    pub b: [f32; 4],
    /// Object-to-pattern matrix.
    pub inv_transform: [f32; 16],
}

impl From<&Pattern> for GpuPattern {
    fn from(pattern: &Pattern) -> Self {
        let (a, b) = pattern.kind.colors();

        Self {
            kind: pattern.kind.code(),
            _pad: [0; 3],
            a: rgba(&a),
            b: rgba(&b),
            inv_transform: mat4(pattern.transform().inverse()),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
/// A [Shape] tagged by its [code](crate::shape::ShapeKind::code), with its material inlined.
pub struct GpuShape {
    /// World-to-object matrix.
    pub inv_transform: [f32; 16],
    /// Variant tag.
    pub kind: u32,
    /// Non-zero when a cylinder or cone is capped.
    pub closed: u32,
    /// Lower Y bound of a cylinder or cone, `-inf` otherwise.
    pub minimum: f32,
    /// Upper Y bound of a cylinder or cone, `inf` otherwise.
    pub maximum: f32,
    #[allow(missing_docs)]
    pub material: GpuMaterial,
    #[allow(missing_docs)]
    pub pattern: GpuPattern,
}

impl From<&Shape> for GpuShape {
    fn from(shape: &Shape) -> Self {
        let (minimum, maximum, closed) = shape
            .kind
            .extent()
            .unwrap_or((f64::NEG_INFINITY, f64::INFINITY, false));

        Self {
            inv_transform: mat4(shape.transform().inverse()),
            kind: shape.kind.code(),
            closed: closed as u32,
            minimum: minimum as f32,
            maximum: maximum as f32,
            material: GpuMaterial::from(&shape.material),
            pattern: GpuPattern::from(&shape.material.pattern),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[allow(missing_docs)]
pub struct GpuLight {
    pub position: [f32; 4],
    pub intensity: [f32; 4],
}

impl From<&PointLight> for GpuLight {
    fn from(light: &PointLight) -> Self {
        Self {
            position: vec4(&light.position),
            intensity: rgba(&light.intensity),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Marshaled camera, shapes and lights of a frozen scene.
pub struct SceneBuffers {
    camera: GpuCamera,
    shapes: Vec<GpuShape>,
    lights: Vec<GpuLight>,
}

impl SceneBuffers {
    /// Flatten `world` as seen from `camera`.
    pub fn new(camera: &Camera, world: &World<Built>) -> Self {
        let res = Self {
            camera: camera.into(),
            shapes: world.shapes().iter().map(GpuShape::from).collect(),
            lights: world.lights().iter().map(GpuLight::from).collect(),
        };

        log::debug!(
            "Marshaled {} shapes ({} bytes) and {} lights ({} bytes)",
            res.shapes.len(),
            res.shape_bytes().len(),
            res.lights.len(),
            res.light_bytes().len()
        );

        res
    }

    #[allow(missing_docs)]
    pub fn camera(&self) -> &GpuCamera {
        &self.camera
    }

    #[allow(missing_docs)]
    pub fn shapes(&self) -> &[GpuShape] {
        &self.shapes
    }

    #[allow(missing_docs)]
    pub fn lights(&self) -> &[GpuLight] {
        &self.lights
    }

    /// Raw bytes of the camera record.
    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }

    /// Raw bytes of the shape array.
    pub fn shape_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.shapes)
    }

    /// Raw bytes of the light array.
    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
