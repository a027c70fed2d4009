//! Integration tests: full frame rendering
//!
//! Renders tiny frames end to end and checks which pixels see geometry and
//! which see the background.

mod common;

use common::*;
use image::Rgba;
use tinytrace::camera::Camera;
use tinytrace::environment::EnvironmentMap;
use tinytrace::scene::Scene;
use tinytrace::tracer::Tracer;

fn tiny_camera() -> Camera {
    Camera {
        image_width: 4,
        image_height: 3,
        fov: 1.05,
        ..Camera::new()
    }
}

/// Image row holding camera row `j` (counted from the bottom).
fn image_row(camera: &Camera, j: u32) -> u32 {
    camera.image_height - 1 - j
}

// ============================================================================
// Geometry vs background
// ============================================================================

#[test]
fn sphere_pixel_is_shaded() {
    let camera = tiny_camera();
    let env = gradient_env();
    let image = camera.render(&ivory_scene(), &env);

    // Camera ray (1, 1) passes within 0.2 units of the sphere center
    let background = env.sample(camera.get_ray(1, 1).direction);
    let pixel = *image.get_pixel(1, image_row(&camera, 1));
    assert_ne!(pixel, background, "sphere pixel should not show the environment");
    assert_eq!(pixel[3], 255);
}

#[test]
fn sky_pixels_match_environment_exactly() {
    let camera = tiny_camera();
    let env = gradient_env();
    let image = camera.render(&ivory_scene(), &env);

    // The top camera row looks upwards, away from the floor and the sphere
    for i in 0..camera.image_width {
        let expected = env.sample(camera.get_ray(i, 2).direction);
        assert_eq!(*image.get_pixel(i, image_row(&camera, 2)), expected, "pixel column {i}");
    }
}

#[test]
fn empty_scene_is_all_background() {
    let camera = tiny_camera();
    let env = gradient_env();
    let image = camera.render(&Scene::default(), &env);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let expected = env.sample(camera.get_ray(i, j).direction);
            assert_eq!(*image.get_pixel(i, image_row(&camera, j)), expected);
        }
    }
}

#[test]
fn pixels_match_direct_tracer_calls() {
    let camera = tiny_camera();
    let env = gradient_env();
    let scene = Scene::demo();
    let image = camera.render(&scene, &env);
    let tracer = Tracer::new(&scene, &env);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            let expected = tracer.cast_ray(&camera.get_ray(i, j), 0);
            assert_eq!(*image.get_pixel(i, image_row(&camera, j)), expected);
        }
    }
}

// ============================================================================
// Whole-frame properties
// ============================================================================

#[test]
fn demo_frame_is_opaque_and_deterministic() {
    let camera = Camera {
        image_width: 32,
        image_height: 18,
        ..Camera::new()
    };
    let env = gradient_env();
    let scene = Scene::demo();

    let first = camera.render(&scene, &env);
    let second = camera.render(&scene, &env);

    assert_eq!(first.dimensions(), (32, 18));
    assert!(first.pixels().all(|p| p[3] == 255));
    assert_eq!(first, second, "parallel rendering must not change pixels");
}

#[test]
fn floor_visible_below_horizon() {
    let camera = Camera {
        image_width: 32,
        image_height: 18,
        ..Camera::new()
    };
    let env = EnvironmentMap::solid(8, 4, Rgba([0, 0, 255, 255]));
    let with_floor = camera.render(&Scene::new(vec![], vec![]), &env);
    let without_floor = camera.render(&Scene::new(vec![], vec![]).without_floor(), &env);

    assert!(without_floor.pixels().all(|p| *p == Rgba([0, 0, 255, 255])));
    // Camera row 3 looks about 20 degrees down, onto the near end of the board
    assert_ne!(*with_floor.get_pixel(16, 14), Rgba([0, 0, 255, 255]));
    // The bottom row looks down in front of the board
    assert_eq!(*with_floor.get_pixel(16, 17), Rgba([0, 0, 255, 255]));
}
