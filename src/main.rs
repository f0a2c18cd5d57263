use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rayshade::prelude::*;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "rayshade")]
#[command(about = "Render the demo scene to a PPM file")]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "1000")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "800")]
    height: u32,

    /// Field of view in degrees
    #[arg(long, default_value = "60")]
    fov: f64,

    /// Reflection bounces per primary ray
    #[arg(short, long, default_value = "5")]
    depth: u32,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
}

/// Checkered floor, three spheres, a mirror cube, a capped cylinder and a cone.
fn demo_world() -> anyhow::Result<World<Built>> {
    let mut world = World::new();

    world.add_shape(
        Shape::from(Plane)
            .with_material(Material::new(Pattern::from(PatternKind::Checker(
                Color::new(0.9, 0.9, 0.9),
                Color::new(0.1, 0.1, 0.1),
            ))))
            .with_name("floor"),
    );

    world.add_shape(
        Shape::new(
            Sphere,
            translation(-0.5, 1., 0.5),
            Material {
                diffuse: 0.7,
                specular: 0.3,
                ..Material::new(Pattern::new(
                    PatternKind::Stripe(Color::new(0.6, 0.2, 0.1), Color::new(0., 0.2, 0.8)),
                    scaling(0.2, 0.2, 0.2) * rotation_z(1.2),
                )?)
            },
        )?
        .with_name("middle"),
    );

    world.add_shape(
        Shape::new(
            Sphere,
            Mat4::identity().scale(0.5, 0.5, 0.5).translate(1.5, 0.5, -0.5),
            Material {
                diffuse: 0.7,
                specular: 0.6,
                shininess: 500.,
                ..Material::plain(Color::new(1., 0.5, 0.1))
            },
        )?
        .with_name("right"),
    );

    world.add_shape(
        Shape::new(
            Sphere,
            Mat4::identity()
                .scale(0.33, 0.8, 0.33)
                .translate(-1.2, 0.8, -0.75),
            Material {
                diffuse: 0.7,
                specular: 0.3,
                ..Material::plain(Color::new(1., 0.8, 0.1))
            },
        )?
        .with_name("left"),
    );

    world.add_shape(
        Shape::new(
            Cube,
            Mat4::identity()
                .scale(0.6, 0.6, 0.6)
                .rotate_y(0.6)
                .translate(2.2, 0.6, 2.),
            Material {
                reflective: 0.8,
                diffuse: 0.2,
                ..Material::plain(Color::new(0.1, 0.1, 0.1))
            },
        )?
        .with_name("mirror cube"),
    );

    world.add_shape(
        Shape::new(
            Cylinder::new(0., 1.5, true),
            Mat4::identity().scale(0.4, 1., 0.4).translate(-2.4, 0., 1.8),
            Material {
                reflective: 0.1,
                ..Material::new(Pattern::new(
                    PatternKind::Ring(Color::new(0.2, 0.6, 0.3), Color::new(0.9, 0.9, 0.7)),
                    scaling(0.25, 0.25, 0.25),
                )?)
            },
        )?
        .with_name("cylinder"),
    );

    world.add_shape(
        Shape::new(
            Cone::new(-1., 0., true),
            Mat4::identity().scale(0.5, 1., 0.5).translate(0.6, 1., 2.5),
            Material::new(Pattern::new(
                PatternKind::Gradient(Color::new(0.9, 0.1, 0.4), Color::new(0.2, 0.1, 0.9)),
                scaling(2., 1., 1.).translate(-1., 0., 0.),
            )?),
        )?
        .with_name("cone"),
    );

    world.add_light(PointLight::new(
        Vec4::point(-10., 10., -10.),
        Color::WHITE,
    ));

    Ok(world.build())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let view = view_transform(
        Vec4::point(0., 1.5, -5.),
        Vec4::point(0., 1., 0.),
        Vec4::direction(0., 1., 0.),
    )?;
    let camera = Camera::new(args.width, args.height, args.fov.to_radians(), view)?;

    let mut engine = Engine::new(
        camera,
        demo_world()?,
        RenderOptions {
            max_depth: args.depth,
        },
    );
    log::info!("Rendering {:?}", engine.world());

    engine.render_to_path(&args.output)?;

    Ok(())
}
