//! [Shape] definition: a canonical [Primitive] placed in the world by a [Transform] and dressed
//! with a [Material].
//!
//! Rays are mapped to object space with the cached inverse transform, intersected against the
//! canonical primitive, and normals are brought back with the inverse-transpose.

mod cone;
mod cube;
mod cylinder;
mod plane;
mod sphere;

pub use {cone::Cone, cube::Cube, cylinder::Cylinder, plane::Plane, sphere::Sphere};

use crate::{
    color::Color,
    intersection::{Intersection, Intersections},
    material::Material,
    matrix::{self, Mat4, Transform},
    ray::Ray,
    vector::Vec4,
    EPSILON,
};

/// Object-space behavior of a canonical primitive.
pub trait Primitive {
    /// Distances, in no particular order, at which an object-space `ray` meets the surface.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// Surface normal at an object-space point, not necessarily normalized.
    fn local_normal_at(&self, point: &Vec4) -> Vec4;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Stable handle to a [Shape] stored in a [World](crate::world::World).
pub struct ShapeId(usize);

impl ShapeId {
    #[allow(missing_docs)]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ShapeId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

macro_rules! shape_kinds {
    {$($(#[$attr:meta])* $name:ident = $code:literal),+ $(,)?} => {
        #[derive(Clone, Copy, Debug, PartialEq)]
        /// Primitive variants.
        pub enum ShapeKind {
            $(
                $(#[$attr])*
                $name($name),
            )+
        }

        impl ShapeKind {
            /// Numeric tag shared with the GPU marshaling layout.
            pub fn code(&self) -> u32 {
                match self {
                    $(ShapeKind::$name(_) => $code,)+
                }
            }
        }

        impl Primitive for ShapeKind {
            fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
                match self {
                    $(ShapeKind::$name(primitive) => primitive.local_intersect(ray),)+
                }
            }

            fn local_normal_at(&self, point: &Vec4) -> Vec4 {
                match self {
                    $(ShapeKind::$name(primitive) => primitive.local_normal_at(point),)+
                }
            }
        }

        $(
            impl From<$name> for ShapeKind {
                fn from(value: $name) -> Self {
                    ShapeKind::$name(value)
                }
            }

            impl From<$name> for Shape {
                fn from(value: $name) -> Self {
                    Shape {
                        kind: value.into(),
                        transform: Transform::default(),
                        material: Material::default(),
                        name: None,
                    }
                }
            }
        )+
    };
}

shape_kinds! {
    /// Unit sphere centered at the origin.
    Sphere = 0,
    /// Infinite `y = 0` plane.
    Plane = 1,
    /// Axis-aligned `[-1, 1]³` cube.
    Cube = 2,
    /// Unit-radius cylinder around the Y axis.
    Cylinder = 3,
    /// Double-napped cone `x² + z² = y²`.
    Cone = 4,
}

impl ShapeKind {
    /// Y extent and closed flag for truncated variants.
    pub fn extent(&self) -> Option<(f64, f64, bool)> {
        match self {
            ShapeKind::Cylinder(Cylinder {
                minimum,
                maximum,
                closed,
            })
            | ShapeKind::Cone(Cone {
                minimum,
                maximum,
                closed,
            }) => Some((*minimum, *maximum, *closed)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Geometric primitive with a transform and a material.
pub struct Shape {
    /// Primitive variant.
    pub kind: ShapeKind,
    transform: Transform,
    /// Surface appearance.
    pub material: Material,
    /// Name tag used in diagnostics.
    pub name: Option<String>,
}

impl Shape {
    /// Create a shape, failing if `transform` cannot be inverted.
    ///
    /// # Example
    /// ```
    /// use rayshade::prelude::*;
    ///
    /// let shape = Shape::new(Sphere, translation(0., 1., 0.), Material::default()).unwrap();
    /// let normal = shape.normal_at(&Vec4::point(0., 2., 0.));
    /// assert!(normal.approx_eq(&Vec4::direction(0., 1., 0.), 1e-10));
    ///
    /// assert!(Shape::new(Sphere, scaling(0., 1., 1.), Material::default()).is_err());
    /// ```
    pub fn new(
        kind: impl Into<ShapeKind>,
        transform: Mat4,
        material: Material,
    ) -> Result<Self, matrix::Error> {
        Ok(Self {
            kind: kind.into(),
            transform: Transform::new(transform)?,
            material,
            name: None,
        })
    }

    /// Set name tag.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Replace material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Replace transform, failing if it cannot be inverted.
    pub fn with_transform(mut self, transform: Mat4) -> Result<Self, matrix::Error> {
        self.transform = Transform::new(transform)?;
        Ok(self)
    }

    #[allow(missing_docs)]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Name tag or a placeholder, for logs.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    /// Add every intersection of the world-space `ray` with this shape to `xs`, tagged by `id`.
    pub fn intersect_into(&self, id: ShapeId, ray: &Ray, xs: &mut Intersections) {
        let local = ray.transform(self.transform.inverse());

        xs.extend(
            self.kind
                .local_intersect(&local)
                .into_iter()
                .map(|t| Intersection::new(t, id)),
        );
    }

    /// Sorted intersections of the world-space `ray` with this shape, tagged by `id`.
    pub fn intersect(&self, id: ShapeId, ray: &Ray) -> Intersections {
        let mut xs = Intersections::new();
        self.intersect_into(id, ray, &mut xs);
        xs
    }

    /// World-space unit normal at a world-space surface point.
    pub fn normal_at(&self, world_point: &Vec4) -> Vec4 {
        let object_point = self.transform.to_local(*world_point);
        let object_normal = self.kind.local_normal_at(&object_point);

        self.transform.normal_to_world(object_normal)
    }

    /// Surface color at a world-space point, going through object then pattern space.
    pub fn color_at(&self, world_point: &Vec4) -> Color {
        let object_point = self.transform.to_local(*world_point);

        self.material.pattern.color_at_object(&object_point)
    }
}

/// Add end-cap hits of a Y-axis primitive truncated to `[minimum, maximum]`.
///
/// `radius` gives the cap radius at a given height.
pub(crate) fn intersect_caps(
    ray: &Ray,
    minimum: f64,
    maximum: f64,
    radius: impl Fn(f64) -> f64,
    xs: &mut Vec<f64>,
) {
    let (origin, direction) = (ray.origin(), ray.direction());

    if is_negligible(direction.y(), direction.len()) {
        return;
    }

    for y in [minimum, maximum].into_iter().filter(|y| y.is_finite()) {
        let t = (y - origin.y()) / direction.y();
        let x = origin.x() + t * direction.x();
        let z = origin.z() + t * direction.z();

        if x * x + z * z <= radius(y).powi(2) {
            xs.push(t);
        }
    }
}

/// Whether `value` vanishes next to `scale`.
///
/// Object-space ray directions keep the length the inverse transform gives them, so tolerances on
/// anything derived from them must grow and shrink with that length.
pub(crate) fn is_negligible(value: f64, scale: f64) -> bool {
    value.abs() < EPSILON * scale
}

/// Relative size of a discriminant, compared to `b²`, below which it counts as zero.
const TANGENT_TOLERANCE: f64 = 1e-10;

/// Roots of `a t² + b t + c`, smallest first, or nothing if the discriminant is negative.
///
/// A discriminant lost in the cancellation of `b² - 4ac` is a tangent. The threshold is
/// relative to `b²` so that it does not depend on the scale of the shape.
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = match b * b - 4. * a * c {
        d if d.abs() <= TANGENT_TOLERANCE * b * b => 0.,
        d if d < 0. => return None,
        d => d,
    };

    let root = discriminant.sqrt();
    let t0 = (-b - root) / (2. * a);
    let t1 = (-b + root) / (2. * a);

    Some((t0.min(t1), t0.max(t1)))
}
