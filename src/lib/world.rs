//! Collection of shapes and lights representing a scene to be rendered.

use std::{fmt::Debug, marker::PhantomData, ops::Index};

use crate::{
    color::Color,
    intersection::Intersections,
    light::PointLight,
    material::Material,
    matrix::{self, scaling},
    ray::Ray,
    shape::{Shape, ShapeId, Sphere},
    vector::Vec4,
    Building, Built,
};

#[derive(Clone)]
/// Scene representation with shapes and lights.
///
/// Shapes are only added while [Building]; the shader only accepts a [Built] world, which is
/// never mutated again.
pub struct World<State> {
    state: PhantomData<State>,
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
}

impl<State> Debug for World<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("shapes", &self.shapes.len())
            .field("lights", &self.lights.len())
            .finish()
    }
}

impl Default for World<Building> {
    fn default() -> Self {
        Self {
            state: PhantomData,
            shapes: Vec::new(),
            lights: Vec::new(),
        }
    }
}

impl<State> World<State> {
    #[allow(missing_docs)]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[allow(missing_docs)]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Resolve a handle returned by [add_shape](World::add_shape).
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }
}

impl<State> Index<ShapeId> for World<State> {
    type Output = Shape;

    fn index(&self, id: ShapeId) -> &Self::Output {
        &self.shapes[id.index()]
    }
}

impl World<Building> {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Two concentric spheres lit from the upper left.
    ///
    /// The outer one is a unit sphere of color `(0.8, 1.0, 0.6)`, the inner one is half its size
    /// with the default material.
    pub fn default_scene() -> Result<Self, matrix::Error> {
        let (outer, inner) = default_spheres()?;

        let mut world = Self::new();
        world.add_shape(outer);
        world.add_shape(inner);
        world.add_light(PointLight::new(
            Vec4::point(-10., 10., -10.),
            Color::WHITE,
        ));

        Ok(world)
    }

    /// Adds a shape to the world, returning its handle.
    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        log::trace!("Adding shape {} ({:?})", shape.label(), shape.kind);

        self.shapes.push(shape);
        ShapeId::from(self.shapes.len() - 1)
    }

    /// Adds a light to the world.
    pub fn add_light(&mut self, light: PointLight) -> &mut Self {
        self.lights.push(light);
        self
    }

    /// Freeze the world for rendering.
    pub fn build(self) -> World<Built> {
        log::debug!(
            "Built world with {} shapes and {} lights",
            self.shapes.len(),
            self.lights.len()
        );

        World {
            state: PhantomData,
            shapes: self.shapes,
            lights: self.lights,
        }
    }
}

impl World<Built> {
    /// Every intersection of `ray` with every shape, sorted by distance.
    pub fn intersect(&self, ray: &Ray) -> Intersections {
        let mut xs = Intersections::new();

        for (index, shape) in self.shapes.iter().enumerate() {
            shape.intersect_into(ShapeId::from(index), ray, &mut xs);
        }

        xs
    }

    /// Whether something stands between `point` and `light`.
    ///
    /// A point sitting exactly on the light is never shadowed.
    pub fn is_shadowed(&self, point: &Vec4, light: &PointLight) -> bool {
        let to_light = light.position - *point;
        let distance = to_light.len();

        let Ok(direction) = to_light.normalize() else {
            return false;
        };

        self.intersect(&Ray::from_unit(*point, direction))
            .hit()
            .is_some_and(|hit| hit.t < distance)
    }
}

/// Shapes of [default_scene](World::default_scene): outer then inner sphere.
pub fn default_spheres() -> Result<(Shape, Shape), matrix::Error> {
    let outer = Shape::from(Sphere)
        .with_material(Material {
            diffuse: 0.7,
            specular: 0.2,
            ..Material::plain(Color::new(0.8, 1., 0.6))
        })
        .with_name("outer");

    let inner = Shape::from(Sphere)
        .with_transform(scaling(0.5, 0.5, 0.5))?
        .with_name("inner");

    Ok((outer, inner))
}

#[cfg(test)]
mod test {
    use super::*;

    fn default_world() -> World<Built> {
        World::default_scene().unwrap().build()
    }

    #[test]
    fn default_scene_contents() {
        let world = default_world();

        assert_eq!(world.shapes().len(), 2);
        assert_eq!(world.lights().len(), 1);
        assert_eq!(world.lights()[0].position, Vec4::point(-10., 10., -10.));
        assert_eq!(world[ShapeId::from(0)].material.diffuse, 0.7);
        assert_eq!(
            world.shape(ShapeId::from(1)).map(|s| s.name.as_deref()),
            Some(Some("inner"))
        );
        assert!(world.shape(ShapeId::from(2)).is_none());
    }

    #[test]
    fn handles_follow_insertion() {
        let mut world = World::new();

        let a = world.add_shape(Shape::from(Sphere));
        let b = world.add_shape(Shape::from(Sphere).with_name("b"));

        assert_eq!(a, ShapeId::from(0));
        assert_eq!(b, ShapeId::from(1));
        assert_eq!(world[b].label(), "b");
        assert_eq!(world[a].label(), "<unnamed>");
    }

    #[test]
    fn intersect_default_scene() {
        let world = default_world();
        let ray = Ray::new(Vec4::point(0., 0., -5.), Vec4::direction(0., 0., 1.)).unwrap();

        let xs = world.intersect(&ray);

        assert_eq!(xs.ts(), vec![4., 4.5, 5.5, 6.]);
        assert_eq!(xs[0].shape, ShapeId::from(0));
        assert_eq!(xs[1].shape, ShapeId::from(1));
    }

    #[test]
    fn empty_world_has_no_hit() {
        let world = World::new().build();
        let ray = Ray::new(Vec4::point(0., 0., -5.), Vec4::direction(0., 0., 1.)).unwrap();

        assert!(world.intersect(&ray).is_empty());
    }

    #[test]
    fn shadows() {
        let world = default_world();
        let light = world.lights()[0];

        // Nothing collinear with point and light.
        assert!(!world.is_shadowed(&Vec4::point(0., 10., 0.), &light));
        // Spheres between point and light.
        assert!(world.is_shadowed(&Vec4::point(10., -10., 10.), &light));
        // Light between point and spheres.
        assert!(!world.is_shadowed(&Vec4::point(-20., 20., -20.), &light));
        // Spheres behind the point.
        assert!(!world.is_shadowed(&Vec4::point(-2., 2., -2.), &light));
    }

    #[test]
    fn point_on_light_is_lit() {
        let world = default_world();
        let light = world.lights()[0];

        assert!(!world.is_shadowed(&light.position, &light));
    }
}
