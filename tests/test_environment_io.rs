//! Integration tests: environment map loading

use glam::Vec3A;
use image::{Rgba, RgbaImage};
use tinytrace::environment::EnvironmentMap;

fn scratch_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("tinytrace-env-{}-{}", std::process::id(), name))
}

#[test]
fn load_png_round_trip() {
    let path = scratch_path("map.png");
    let source = RgbaImage::from_fn(8, 4, |x, y| Rgba([x as u8 * 30, y as u8 * 60, 90, 255]));
    source.save(&path).expect("PNG should be writable");

    let env = EnvironmentMap::load(&path);
    let _ = std::fs::remove_file(&path);
    let env = env.expect("PNG should load");

    assert_eq!((env.width(), env.height()), (8, 4));
    // Straight up reads the top row, middle column
    assert_eq!(env.sample(Vec3A::Y), *source.get_pixel(4, 0));
}

#[test]
fn load_missing_file_fails() {
    assert!(EnvironmentMap::load(scratch_path("does-not-exist.jpg")).is_err());
}
