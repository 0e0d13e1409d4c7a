//! Built-in demo scenes.
//!
//! Each scene pairs a world with the camera settings it was composed for.
//! Random placement uses a seeded RNG so a scene is the same on every run.

use lumen_renderer::{
    Background, CameraSettings, Color, Dielectric, HittableList, Lambertian, Metal, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::sync::Arc;

/// Names accepted by [`load`].
pub const SCENE_NAMES: [&str; 4] = ["three-spheres", "final", "defocus", "circle"];

/// Build the named scene, or None if the name is unknown.
pub fn load(name: &str, seed: u64) -> Option<(CameraSettings, HittableList)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scene = match name {
        "three-spheres" => three_spheres(),
        "final" => final_render(&mut rng),
        "defocus" => defocus_row(&mut rng),
        "circle" => mirror_circle(&mut rng),
        _ => return None,
    };
    Some(scene)
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::new(
        rng.gen::<f64>() * rng.gen::<f64>(),
        rng.gen::<f64>() * rng.gen::<f64>(),
        rng.gen::<f64>() * rng.gen::<f64>(),
    )
}

fn ground(albedo: f64) -> Sphere<Lambertian> {
    Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, Lambertian::new(Color::splat(albedo)))
}

/// Ground, a diffuse center sphere, a hollow glass sphere and fuzzy metal.
fn three_spheres() -> (CameraSettings, HittableList) {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        Lambertian::new(Color::new(0.8, 0.8, 0.0)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.2),
        0.5,
        Lambertian::new(Color::new(0.1, 0.2, 0.5)),
    )));
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, Dielectric::new(1.5))));
    // Air bubble inside the glass
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.4, Dielectric::new(1.0 / 1.5))));
    world.add(Box::new(Sphere::new(
        Vec3::new(1.0, 0.0, -1.0),
        0.5,
        Metal::new(Color::new(0.8, 0.6, 0.2), 1.0),
    )));

    let settings = CameraSettings::default()
        .with_aspect_ratio(800, 16.0 / 9.0)
        .with_quality(100, 50)
        .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(90.0, 0.0, 1.0)
        .with_background(Background::Solid { color: Color::new(0.53, 0.81, 0.94) });

    (settings, world)
}

/// A field of small random spheres around three large ones.
fn final_render(rng: &mut impl Rng) -> (CameraSettings, HittableList) {
    let mut world = HittableList::new();
    world.add(Box::new(ground(0.5)));

    let glass = Arc::new(Dielectric::new(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat: f64 = rng.gen();
            let center = Vec3::new(
                a as f64 + 0.9 * rng.gen::<f64>(),
                0.2,
                b as f64 + 0.9 * rng.gen::<f64>(),
            );

            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                world.add(Box::new(Sphere::new(center, 0.2, Lambertian::new(random_color(rng)))));
            } else if choose_mat < 0.95 {
                let fuzz = rng.gen::<f64>() / 2.0;
                world.add(Box::new(Sphere::new(center, 0.2, Metal::new(random_color(rng), fuzz))));
            } else {
                world.add(Box::new(Sphere::new(center, 0.2, glass.clone())));
            }
        }
    }

    world.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass)));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Lambertian::new(Color::new(0.4, 0.2, 0.1)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Metal::new(Color::new(0.7, 0.6, 0.5), 0.0),
    )));

    let settings = CameraSettings::default()
        .with_resolution(1200, 675)
        .with_quality(100, 50)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    (settings, world)
}

/// A row of spheres receding from the camera with a shallow depth of field.
fn defocus_row(rng: &mut impl Rng) -> (CameraSettings, HittableList) {
    let mut world = HittableList::new();
    world.add(Box::new(ground(0.7)));

    for a in 0..10 {
        let center = Vec3::new(0.0, 1.0, -10.0 + 3.0 * a as f64);
        if rng.gen::<f64>() < 0.25 {
            world.add(Box::new(Sphere::new(center, 1.0, Lambertian::new(random_color(rng)))));
        } else {
            let fuzz = rng.gen::<f64>() / 4.0;
            world.add(Box::new(Sphere::new(center, 1.0, Metal::new(random_color(rng), fuzz))));
        }
    }

    let settings = CameraSettings::default()
        .with_resolution(1200, 675)
        .with_quality(100, 50)
        .with_position(Vec3::new(-8.0, 8.0, -15.0), Vec3::new(0.0, -10.0, 15.0), Vec3::Y)
        .with_lens(50.0, 1.0, 20.0);

    (settings, world)
}

/// A ring of spheres around a large mirror sphere.
fn mirror_circle(rng: &mut impl Rng) -> (CameraSettings, HittableList) {
    const COUNT: usize = 14;
    const RING_RADIUS: f64 = 10.0;

    let mut world = HittableList::new();
    world.add(Box::new(ground(0.5)));

    let angle_step = TAU / COUNT as f64;
    for i in 0..COUNT {
        let angle = angle_step * i as f64;
        let center = Vec3::new(RING_RADIUS * angle.cos(), 1.0, RING_RADIUS * angle.sin());
        let choose_mat: f64 = rng.gen();

        if choose_mat < 0.25 {
            world.add(Box::new(Sphere::new(center, 1.0, Lambertian::new(random_color(rng)))));
        } else if choose_mat < 0.75 {
            let fuzz = rng.gen::<f64>() / 4.0;
            world.add(Box::new(Sphere::new(center, 1.0, Metal::new(random_color(rng), fuzz))));
        } else {
            world.add(Box::new(Sphere::new(center, 1.0, Dielectric::new(1.5))));
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 6.0, 0.0),
        5.0,
        Metal::new(Color::splat(0.9), 0.0),
    )));

    let settings = CameraSettings::default()
        .with_resolution(1200, 675)
        .with_quality(100, 50)
        .with_position(Vec3::new(18.0, 6.5, 16.0), Vec3::new(7.0, -3.0, 0.0), Vec3::Y)
        .with_lens(70.0, 0.0, 10.0);

    (settings, world)
}
