//! Image writers: plain-text PPM and 8-bit PNG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;
use thiserror::Error;

use crate::render::Image;
use crate::util::Color;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Quantizes a gamma-corrected color. Channels at or above 1.0 become 255.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f64| {
        let c = if c >= 1.0 { 0.999 } else { c.max(0.0) };
        (256.0 * c) as u8
    };
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// ASCII `P3` PPM, one pixel per line.
pub fn write_ppm<W: Write>(w: &mut W, image: &Image) -> std::io::Result<()> {
    writeln!(w, "P3")?;
    writeln!(w, "{} {}", image.width(), image.height())?;
    writeln!(w, "255")?;

    for &pixel in image.pixels() {
        let [r, g, b] = to_rgb8(pixel);
        writeln!(w, "{} {} {}", r, g, b)?;
    }

    w.flush()
}

pub fn to_rgb_image(image: &Image) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| Rgb(to_rgb8(image.pixel(x, y))))
}

/// Writes PNG for a `.png` extension, PPM otherwise.
pub fn save_image<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), OutputError> {
    let path = path.as_ref();
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("png"));

    if is_png {
        to_rgb_image(image).save_with_format(path, image::ImageFormat::Png)?;
    } else {
        let mut w = BufWriter::new(File::create(path)?);
        write_ppm(&mut w, image)?;
    }

    info!("wrote {}", path.display());
    Ok(())
}
