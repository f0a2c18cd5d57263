//! Recursive Whitted-style shader: nearest hit, direct Phong lighting with hard shadows, and
//! mirror reflections bounded by a depth budget.

use crate::{
    color::Color,
    intersection::Intersection,
    light::lighting,
    ray::Ray,
    shape::ShapeId,
    vector::Vec4,
    world::World,
    Built, EPSILON,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Geometry derived once per hit and shared by lighting, shadow and reflection computations.
pub struct ShadingRecord {
    /// Distance along the incoming ray.
    pub t: f64,
    /// Shape that was hit.
    pub shape: ShapeId,
    /// World-space hit point.
    pub point: Vec4,
    /// Hit point nudged along the normal, used as origin of secondary rays.
    pub over_point: Vec4,
    /// Unit direction towards the ray origin.
    pub eye: Vec4,
    /// Unit surface normal, facing the eye.
    pub normal: Vec4,
    /// Whether the ray started inside the shape, in which case the normal was flipped.
    pub inside: bool,
    /// Mirror direction of the incoming ray.
    pub reflect: Vec4,
}

impl ShadingRecord {
    /// Derive shading geometry for `hit`, an intersection of `ray` with a shape of `world`.
    pub fn prepare(ray: &Ray, hit: &Intersection, world: &World<Built>) -> Self {
        let point = ray.position(hit.t);
        let eye = -*ray.direction();
        let mut normal = world[hit.shape].normal_at(&point);

        let inside = normal.dot_product(&eye) < 0.;
        if inside {
            normal = -normal;
        }

        Self {
            t: hit.t,
            shape: hit.shape,
            point,
            over_point: point + normal * EPSILON,
            eye,
            normal,
            inside,
            reflect: ray.direction().reflect(&normal),
        }
    }
}

/// Color seen along `ray`, allowing `remaining` more reflection bounces.
///
/// # Example
/// ```
/// use rayshade::prelude::*;
///
/// let world = World::default_scene().unwrap().build();
/// let ray = Ray::new(Vec4::point(0., 0., -5.), Vec4::direction(0., 1., 0.)).unwrap();
///
/// assert_eq!(ray_color(&ray, &world, 5), Color::BLACK);
/// ```
pub fn ray_color(ray: &Ray, world: &World<Built>, remaining: u32) -> Color {
    let xs = world.intersect(ray);

    let Some(hit) = xs.hit() else {
        log::trace!("Miss from {:?} towards {:?}", ray.origin(), ray.direction());
        return Color::BLACK;
    };

    log::trace!(
        "Hit {} at t={} ({} bounces left)",
        world[hit.shape].label(),
        hit.t,
        remaining
    );

    let record = ShadingRecord::prepare(ray, hit, world);
    shade_hit(world, &record, remaining)
}

/// Direct lighting summed over every light, plus the reflected contribution.
pub fn shade_hit(world: &World<Built>, record: &ShadingRecord, remaining: u32) -> Color {
    let shape = &world[record.shape];
    let surface_color = shape.color_at(&record.point);

    let direct: Color = world
        .lights()
        .iter()
        .map(|light| {
            lighting(
                &shape.material,
                surface_color,
                light,
                &record.point,
                &record.eye,
                &record.normal,
                world.is_shadowed(&record.over_point, light),
            )
        })
        .sum();

    direct + reflected_color(world, record, remaining)
}

/// Color brought by a mirror bounce, black once the budget is spent or on matte surfaces.
pub fn reflected_color(world: &World<Built>, record: &ShadingRecord, remaining: u32) -> Color {
    let reflective = world[record.shape].material.reflective;

    if remaining == 0 || reflective == 0. {
        return Color::BLACK;
    }

    let ray = Ray::from_unit(record.over_point, record.reflect);
    ray_color(&ray, world, remaining - 1) * reflective
}

#[cfg(test)]
mod test {
    use std::f64::consts::SQRT_2;

    use float_eq::assert_float_eq;

    use super::*;
    use crate::{
        light::PointLight,
        material::Material,
        matrix::translation,
        shape::{Plane, Shape, Sphere},
        world::default_spheres,
        Building,
    };

    fn ray(origin: (f64, f64, f64), direction: (f64, f64, f64)) -> Ray {
        Ray::new(
            Vec4::point(origin.0, origin.1, origin.2),
            Vec4::direction(direction.0, direction.1, direction.2),
        )
        .unwrap()
    }

    fn assert_color(got: Color, expected: Color, tolerance: f64) {
        assert!(
            got.approx_eq(&expected, tolerance),
            "Got {got:?}, expected {expected:?}"
        );
    }

    /// Default scene plus a reflective floor one unit below the origin.
    fn with_mirror_floor(reflective: f64) -> (World<Built>, ShapeId) {
        let mut world = World::default_scene().unwrap();
        let floor = world.add_shape(
            Shape::new(
                Plane,
                translation(0., -1., 0.),
                Material {
                    reflective,
                    ..Default::default()
                },
            )
            .unwrap(),
        );

        (world.build(), floor)
    }

    fn first_hit(world: &World<Built>, ray: &Ray) -> ShadingRecord {
        let xs = world.intersect(ray);
        ShadingRecord::prepare(ray, xs.hit().unwrap(), world)
    }

    #[test]
    fn miss_is_black() {
        let world = World::default_scene().unwrap().build();

        assert_eq!(
            ray_color(&ray((0., 0., -5.), (0., 1., 0.)), &world, 5),
            Color::BLACK
        );
    }

    #[test]
    fn empty_world_is_black() {
        let world = World::<Building>::new().build();

        assert_eq!(
            ray_color(&ray((0., 0., -5.), (0., 0., 1.)), &world, 5),
            Color::BLACK
        );
    }

    #[test]
    fn hit_outer_sphere() {
        let world = World::default_scene().unwrap().build();
        let got = ray_color(&ray((0., 0., -5.), (0., 0., 1.)), &world, 5);

        assert_color(got, Color::new(0.38066, 0.47583, 0.2855), 1e-4);
    }

    #[test]
    fn direct_light_taken_at_hit_point() {
        let world = World::default_scene().unwrap().build();
        let record = first_hit(&world, &ray((0., 0., -5.), (0., 0., 1.)));
        let shape = &world[record.shape];

        let expected = lighting(
            &shape.material,
            shape.color_at(&record.point),
            &world.lights()[0],
            &record.point,
            &record.eye,
            &record.normal,
            false,
        );

        assert_eq!(shade_hit(&world, &record, 5), expected);
    }

    #[test]
    fn record_from_outside() {
        let world = World::default_scene().unwrap().build();
        let record = first_hit(&world, &ray((0., 0., -5.), (0., 0., 1.)));

        assert_eq!(record.t, 4.);
        assert_eq!(record.shape, ShapeId::from(0));
        assert_eq!(record.point, Vec4::point(0., 0., -1.));
        assert_eq!(record.eye, Vec4::direction(0., 0., -1.));
        assert_eq!(record.normal, Vec4::direction(0., 0., -1.));
        assert!(!record.inside);
    }

    #[test]
    fn record_from_inside() {
        let mut world = World::new();
        world.add_shape(Shape::from(Sphere));
        let world = world.build();

        let record = first_hit(&world, &ray((0., 0., 0.), (0., 0., 1.)));

        assert_eq!(record.point, Vec4::point(0., 0., 1.));
        assert_eq!(record.eye, Vec4::direction(0., 0., -1.));
        assert_eq!(record.normal, Vec4::direction(0., 0., -1.));
        assert!(record.inside);
        assert!(record.over_point.z() < record.point.z());
    }

    #[test]
    fn over_point_above_surface() {
        let mut world = World::new();
        world.add_shape(Shape::new(Sphere, translation(0., 0., 1.), Material::default()).unwrap());
        let world = world.build();

        let record = first_hit(&world, &ray((0., 0., -5.), (0., 0., 1.)));

        assert!(record.over_point.z() < -EPSILON / 2.);
        assert!(record.point.z() > record.over_point.z());
    }

    #[test]
    fn reflection_vector() {
        let mut world = World::new();
        world.add_shape(Shape::from(Plane));
        let world = world.build();

        let half = SQRT_2 / 2.;
        let record = first_hit(&world, &ray((0., 1., -1.), (0., -half, half)));

        assert!(record
            .reflect
            .approx_eq(&Vec4::direction(0., half, half), 1e-12));
    }

    #[test]
    fn shade_from_inside() {
        let (outer, inner) = default_spheres().unwrap();
        let mut world = World::new();
        world.add_shape(outer);
        world.add_shape(inner);
        world.add_light(PointLight::new(Vec4::point(0., 0.25, 0.), Color::WHITE));
        let world = world.build();

        let got = ray_color(&ray((0., 0., 0.), (0., 0., 1.)), &world, 5);

        assert_color(got, Color::new(0.90498, 0.90498, 0.90498), 1e-4);
    }

    #[test]
    fn shadowed_hit_is_ambient() {
        let mut world = World::new();
        world.add_light(PointLight::new(Vec4::point(0., 0., -10.), Color::WHITE));
        world.add_shape(Shape::from(Sphere));
        world.add_shape(Shape::new(Sphere, translation(0., 0., 10.), Material::default()).unwrap());
        let world = world.build();

        let got = ray_color(&ray((0., 0., 5.), (0., 0., 1.)), &world, 5);

        assert_color(got, Color::new(0.1, 0.1, 0.1), 1e-10);
    }

    #[test]
    fn matte_surface_reflects_nothing() {
        let (outer, inner) = default_spheres().unwrap();
        let mut world = World::new();
        world.add_shape(outer);
        world.add_shape(inner.with_material(Material {
            ambient: 1.,
            ..Default::default()
        }));
        world.add_light(PointLight::new(Vec4::point(-10., 10., -10.), Color::WHITE));
        let world = world.build();

        let record = first_hit(&world, &ray((0., 0., 0.), (0., 0., 1.)));

        assert_eq!(record.shape, ShapeId::from(1));
        assert_eq!(reflected_color(&world, &record, 5), Color::BLACK);
    }

    #[test]
    fn reflective_floor() {
        let (world, floor) = with_mirror_floor(0.5);
        let half = SQRT_2 / 2.;
        let record = first_hit(&world, &ray((0., 0., -3.), (0., -half, half)));

        assert_eq!(record.shape, floor);
        assert_float_eq!(record.t, SQRT_2, abs <= 1e-10);

        assert_color(
            reflected_color(&world, &record, 5),
            Color::new(0.19032, 0.2379, 0.14274),
            1e-3,
        );
        assert_color(
            shade_hit(&world, &record, 5),
            Color::new(0.87677, 0.92436, 0.82918),
            1e-3,
        );
    }

    #[test]
    fn depth_exhausted_is_black() {
        let (world, _) = with_mirror_floor(0.5);
        let half = SQRT_2 / 2.;
        let record = first_hit(&world, &ray((0., 0., -3.), (0., -half, half)));

        assert_eq!(reflected_color(&world, &record, 0), Color::BLACK);
        assert_color(
            shade_hit(&world, &record, 0),
            shade_hit(&world, &record, 5) - reflected_color(&world, &record, 5),
            1e-12,
        );
    }

    #[test]
    fn facing_mirrors_terminate() {
        let mirror = Material {
            reflective: 1.,
            ..Default::default()
        };

        let mut world = World::new();
        world.add_light(PointLight::new(Vec4::point(0., 0., 0.), Color::WHITE));
        world.add_shape(Shape::new(Plane, translation(0., -1., 0.), mirror.clone()).unwrap());
        world.add_shape(Shape::new(Plane, translation(0., 1., 0.), mirror).unwrap());
        let world = world.build();

        let got = ray_color(&ray((0., 0., 0.), (0., 1., 0.)), &world, 5);

        assert!(got.r.is_finite() && got.g.is_finite() && got.b.is_finite());
        assert!(got.r > 0.);
    }
}
