//! # Output Module
//!
//! Writes rendered frames out of the process:
//! - PNG files, stored as rendered (8-bit, already display-referred)
//! - EXR files, channels rescaled to [0.0, 1.0] floats
//! - Live display in TEV (The EXR Viewer) over TCP
//!
//! None of these functions fail the render. I/O and network errors are
//! logged as warnings and the frame is dropped.

use log::{info, warn, debug};
use image::{ImageFormat, RgbaImage};
use tev_client::{TevClient, PacketCreateImage, PacketUpdateImage};
use std::net::TcpStream;
use exr::prelude::write_rgb_file;

/// Port TEV listens on when the address does not name one.
const TEV_DEFAULT_PORT: u16 = 14158;

/// Image name used for every frame sent to TEV.
const TEV_IMAGE_NAME: &str = "tinytrace_output";

fn unit_channel(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// Send the rendered image to TEV for display.
///
/// `tev_address` is `host:port` or just `host`, in which case port 14158 is
/// used. The image is converted from interleaved RGBA bytes to the planar
/// float layout TEV expects (RRR...GGG...BBB...), dropping alpha.
///
/// # Examples
///
/// ```ignore
/// send_image_to_tev(&image, "localhost:14158");
/// send_image_to_tev(&image, "192.168.1.100"); // Uses default port 14158
/// ```
pub fn send_image_to_tev(image: &RgbaImage, tev_address: &str) {
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:{}", tev_address, TEV_DEFAULT_PORT)
    };
    let (width, height) = image.dimensions();

    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let create_packet = PacketCreateImage {
        image_name: TEV_IMAGE_NAME,
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    let pixel_count = (width * height) as usize;
    let mut rgb_data = Vec::with_capacity(pixel_count * 3);
    for channel in 0..3 {
        rgb_data.extend(image.pixels().map(|pixel| unit_channel(pixel[channel])));
    }

    debug!("Sending {} pixels to TEV ({:.1} MB)", pixel_count, rgb_data.len() as f32 * 4.0 / 1_000_000.0);
    let start_time = std::time::Instant::now();

    let update_packet = PacketUpdateImage {
        image_name: TEV_IMAGE_NAME,
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, pixel_count as u64, 2 * pixel_count as u64],
        channel_strides: &[1, 1, 1],
        data: &rgb_data,
    };

    match client.send(update_packet) {
        Ok(_) => info!("Image data sent to TEV at {} in {:.2?}", tev_address, start_time.elapsed()),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

/// Save the rendered image as PNG.
///
/// Pixels are written unchanged; the renderer already produces 8-bit display
/// values with opaque alpha.
pub fn save_image_as_png(image: &RgbaImage, output_path: &str) {
    match image.save_with_format(output_path, ImageFormat::Png) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save the rendered image as EXR.
///
/// Each channel is rescaled from 0-255 to 0.0-1.0 and stored as 32-bit float
/// RGB. No transfer function is applied.
pub fn save_image_as_exr(image: &RgbaImage, output_path: &str) {
    let (width, height) = image.dimensions();

    let result = write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (unit_channel(pixel[0]), unit_channel(pixel[1]), unit_channel(pixel[2]))
    });

    match result {
        Ok(_) => info!("Image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}
