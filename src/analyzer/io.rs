use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use super::scale::PaletteScale;
use crate::Result;

/// Pixel size of one swatch cell in exported strips
const SWATCH_SIZE: u32 = 40;

/// Open an image file, detecting the format from its content
pub(crate) fn open_image(file: &Path) -> Result<DynamicImage> {
    let image = image::ImageReader::open(file)?
        .with_guessed_format()?
        .decode()?;
    Ok(image)
}

/// Save a palette scale as a horizontal swatch strip PNG, lightest level first,
/// with suffix appended before the extension
pub(crate) fn save_swatch_as(
    scale: &PaletteScale,
    base_path: &Path,
    suffix: &str,
) -> Result<()> {
    let filename = compute_path(base_path, suffix);
    let colors: Vec<_> = scale.entries().map(|(_, color)| color).collect();
    let width = SWATCH_SIZE * colors.len() as u32;

    // Convert the strip to raw bytes, row by row
    let mut buffer = Vec::with_capacity((width * SWATCH_SIZE * 4) as usize);
    for _y in 0..SWATCH_SIZE {
        for color in &colors {
            for _x in 0..SWATCH_SIZE {
                buffer.extend_from_slice(&[color.red, color.green, color.blue, 255]);
            }
        }
    }

    let file = File::create(&filename)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, SWATCH_SIZE);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.write_header()?.write_image_data(&buffer)?;

    println!("{}: saved", filename.display());
    Ok(())
}

/// Compute full file path from base path and suffix
fn compute_path(base_path: &Path, suffix: &str) -> PathBuf {
    format!("{}-{suffix}.png", base_path.display()).into()
}
