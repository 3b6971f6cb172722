//! Image buffer and file output.
//!
//! Pixels are stored as linear colors. Gamma correction and quantization
//! happen only when writing, so the buffer can be compared exactly in
//! tests.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bucket::BucketResult;
use crate::error::ConfigResult;
use lumen_math::{Color, Interval};

/// Channel range that maps onto 0..=255 after scaling by 256.
const INTENSITY: Interval = Interval::new(0.0, 0.999);

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Linear color image, row-major with row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.offset(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to gamma-corrected RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write the image as a plain-text PPM (P3).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb8(*color);
            writeln!(writer, "{r} {g} {b}")?;
        }

        Ok(())
    }

    /// Save the image, choosing the format from the file extension.
    ///
    /// `.ppm` writes text PPM; anything else is encoded by the `image`
    /// crate (PNG, JPEG, ...).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("ppm"))
            .unwrap_or(false);

        if is_ppm {
            let mut writer = BufWriter::new(File::create(path)?);
            self.write_ppm(&mut writer)?;
            writer.flush()?;
        } else {
            image::save_buffer(
                path,
                &self.to_rgb8(),
                self.width,
                self.height,
                image::ColorType::Rgb8,
            )?;
        }

        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
