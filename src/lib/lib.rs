#![warn(missing_docs)]

//! Library used by the rayshade renderer. Provides a Whitted-style ray tracer working on
//! homogeneous coordinates: primitives, patterned Phong materials, hard shadows and recursive
//! reflections.

pub mod camera;
pub mod color;
pub mod engine;
pub mod gpu;
pub mod image;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod pattern;
pub mod ray;
pub mod shading;
pub mod shape;
pub mod vector;
pub mod world;

/// Default dimension of a [Vector](vector::Vector), i.e. homogeneous 3D coordinates.
pub const DEFAULT_DIM: usize = 4;
/// Default scalar type of a [Vector](vector::Vector).
pub type DefaultType = f64;

/// Tolerance used for parallelism checks and for nudging hit points off their surface.
pub const EPSILON: f64 = 1e-5;

macro_rules! states {
    {$($(#[$attr:meta])* $state:ident),+ $(,)?} => {
        $(
            #[derive(Clone, Debug, Default)]
            $(#[$attr])*
            pub struct $state;
        )+
    };
}

states! {
    /// Building state where shapes and lights are added.
    Building,
    /// Contents have been frozen and can safely be used for rendering.
    Built,
}

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        camera::Camera,
        color::Color,
        engine::{Engine, RenderOptions},
        image::Image,
        intersection::{Intersection, Intersections},
        light::{lighting, PointLight},
        material::Material,
        matrix::{
            rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform,
            Mat4, Transform,
        },
        pattern::{Pattern, PatternKind},
        ray::Ray,
        shading::{ray_color, ShadingRecord},
        shape::{Cone, Cube, Cylinder, Plane, Shape, ShapeId, ShapeKind, Sphere},
        vector::{Vec4, Vector},
        world::World,
        Building, Built,
    };
}
