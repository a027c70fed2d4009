use clap::Parser;
use log::{error, info, warn};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use tinytrace::camera::Camera;
use tinytrace::environment::EnvironmentMap;
use tinytrace::output::{save_image_as_exr, save_image_as_png, send_image_to_tev};
use tinytrace::scene::Scene;

/// Size of the solid background used with --fallback-color
const FALLBACK_MAP_SIZE: (u32, u32) = (64, 32);

/// Load the background, or fall back to a solid color if one was given.
fn load_environment(args: &Args) -> Option<EnvironmentMap> {
    match EnvironmentMap::load(&args.envmap) {
        Ok(environment) => {
            info!("Environment map {}: {}x{}", args.envmap, environment.width(), environment.height());
            Some(environment)
        }
        Err(e) => match args.fallback_color {
            Some(color) => {
                warn!("Failed to load environment map {}: {}, using solid background {:?}", args.envmap, e, color.0);
                Some(EnvironmentMap::solid(FALLBACK_MAP_SIZE.0, FALLBACK_MAP_SIZE.1, color))
            }
            None => {
                error!("Failed to load environment map {}: {}", args.envmap, e);
                None
            }
        },
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.debug_level.clone().into()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    info!("TinyTrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}, fov: {} rad, max depth: {}", args.width, args.height, args.fov, args.max_depth);

    let is_exr = args.output.ends_with(".exr");
    if !is_exr && !args.output.ends_with(".png") {
        error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output).extension().unwrap_or_default().to_string_lossy()
        );
        std::process::exit(1);
    }

    let Some(environment) = load_environment(&args) else {
        std::process::exit(1);
    };

    let mut scene = Scene::demo();
    if args.no_floor {
        scene = scene.without_floor();
    }

    let camera = Camera {
        image_width: args.width,
        image_height: args.height,
        fov: args.fov,
        max_depth: args.max_depth,
        ..Camera::new()
    };
    let image = camera.render(&scene, &environment);

    // Send image to TEV if requested
    if args.tev || args.tev_address.is_some() {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&image, tev_address);
    }

    if is_exr {
        save_image_as_exr(&image, &args.output);
    } else {
        save_image_as_png(&image, &args.output);
    }
}
