use clap::{Parser, ValueEnum};
use image::Rgba;
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Parse an `R,G,B` triple of bytes into an opaque color.
fn parse_rgb(value: &str) -> Result<Rgba<u8>, String> {
    let channels = value
        .split(',')
        .map(|part| part.trim().parse::<u8>().map_err(|e| format!("invalid channel '{}': {}", part.trim(), e)))
        .collect::<Result<Vec<u8>, String>>()?;

    match channels[..] {
        [r, g, b] => Ok(Rgba([r, g, b, 255])),
        _ => Err(format!("expected R,G,B, got {} values", channels.len())),
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "tinytrace")]
#[command(about = "A tiny recursive ray tracer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "1920", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "1080", help = "Image height in pixels")]
    pub height: u32,

    /// Field of view across the image height, in radians
    #[arg(long, default_value = "1.05", help = "Field of view across the image height, in radians")]
    pub fov: f32,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long, default_value = "4", help = "Deepest reflection/refraction level that is still shaded")]
    pub max_depth: u32,

    /// Panoramic background image (equirectangular)
    #[arg(short, long, default_value = "envmap.jpg", help = "Panoramic background image (equirectangular)")]
    pub envmap: String,

    /// Solid background used when the environment map cannot be loaded
    #[arg(long, value_parser = parse_rgb, help = "Solid background R,G,B used when the environment map cannot be loaded")]
    pub fallback_color: Option<Rgba<u8>>,

    /// Render without the checkerboard floor
    #[arg(long, help = "Render without the checkerboard floor")]
    pub no_floor: bool,

    /// Send image to TEV for visualization
    #[arg(long, help = "Send image to TEV for visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png or .exr)
    #[arg(short, long, default_value = "out.png", help = "Output file path (.png or .exr)")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tinytrace"]).expect("defaults should parse");
        assert_eq!(args.width, 1920);
        assert_eq!(args.height, 1080);
        assert_eq!(args.max_depth, 4);
        assert_eq!(args.output, "out.png");
        assert!(args.fallback_color.is_none());
        assert!(!args.no_floor);
    }

    #[test]
    fn test_fallback_color() {
        let args = Args::try_parse_from(["tinytrace", "--fallback-color", "10, 20,30"]).expect("should parse");
        assert_eq!(args.fallback_color, Some(Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_fallback_color_rejects_bad_input() {
        assert!(Args::try_parse_from(["tinytrace", "--fallback-color", "10,20"]).is_err());
        assert!(Args::try_parse_from(["tinytrace", "--fallback-color", "10,20,300"]).is_err());
    }

    #[test]
    fn test_debug_level_maps_to_filter() {
        let args = Args::try_parse_from(["tinytrace", "--debug-level", "trace"]).expect("should parse");
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Trace);
    }
}
