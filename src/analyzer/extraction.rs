use std::collections::HashMap;
use std::ops::RangeInclusive;

use image::DynamicImage;
use itertools::Itertools;
use palette::{Hsl, Srgb};

use super::{color_ops, naming};

/// Minimum alpha for a pixel to count; transparent regions should not bias brand colors
const MIN_ALPHA: u8 = 200;
/// Pixels outside this weighted-luma window are backgrounds and shadows, not brand hues
const LUMA_RANGE: RangeInclusive<f32> = 30.0..=240.0;
/// Clusters considered before the percentage filter
const MAX_CLUSTERS: usize = 8;
/// Dominant colors returned to the caller
const MAX_COLORS: usize = 5;

/// A cluster centroid with its share of the sampled image, plus a human-readable name
#[derive(Debug, Clone, PartialEq)]
pub struct DominantColor {
    pub color: Srgb<u8>,
    pub percentage: f32,
    pub name: String,
}

/// Quantized HSL bucket a pixel is counted under
#[derive(Debug, Hash, PartialEq, Eq)]
enum ClusterKey {
    /// Low-saturation pixel in the mid-lightness band; hue carries no information there
    Gray { lightness: u8 },
    Chroma { hue: u16, saturation: u8, lightness: u8 },
}

impl ClusterKey {
    fn from_hsl(hsl: Hsl) -> Self {
        let saturation = (hsl.saturation * 10.0).round() as u8;
        let lightness = (hsl.lightness * 10.0).round() as u8;
        if hsl.saturation < 0.2 && (0.3..=0.7).contains(&hsl.lightness) {
            return Self::Gray { lightness };
        }
        let hue = ((hsl.hue.into_positive_degrees() / 10.0).round() as u16 * 10) % 360;
        Self::Chroma {
            hue,
            saturation,
            lightness,
        }
    }

    /// Representative color of the bucket, computed once from the quantized components
    fn representative(&self) -> Hsl {
        match *self {
            Self::Gray { lightness } => Hsl::new(0.0, 0.0, lightness as f32 / 10.0),
            Self::Chroma {
                hue,
                saturation,
                lightness,
            } => Hsl::new(hue as f32, saturation as f32 / 10.0, lightness as f32 / 10.0),
        }
    }
}

/// Cluster the pixels of an image into up to five dominant colors with frequency shares
pub fn extract_dominant_colors(
    image: &DynamicImage,
    max_dimension: u32,
    min_percentage: f32,
) -> Vec<DominantColor> {
    // Downsampling trades color precision for bounded processing cost
    let pixels = if image.width().max(image.height()) > max_dimension {
        image.thumbnail(max_dimension, max_dimension).to_rgba8()
    } else {
        image.to_rgba8()
    };
    // Excluded pixels still count toward the percentage denominator
    let total_pixels = (pixels.width() * pixels.height()) as f32;

    let mut clusters: HashMap<ClusterKey, u32> = HashMap::new();
    for pixel in pixels.pixels() {
        if pixel[3] < MIN_ALPHA {
            continue;
        }
        if !LUMA_RANGE.contains(&color_ops::luma(pixel)) {
            continue;
        }
        let hsl = color_ops::to_hsl(Srgb::new(pixel[0], pixel[1], pixel[2]));
        *clusters.entry(ClusterKey::from_hsl(hsl)).or_insert(0) += 1;
    }

    clusters
        .into_iter()
        .sorted_by(|a, b| a.1.cmp(&b.1).reverse())
        .take(MAX_CLUSTERS)
        .map(|(key, count)| (key, count as f32 / total_pixels * 100.0))
        .filter(|(_, percentage)| *percentage > min_percentage)
        .take(MAX_COLORS)
        .map(|(key, percentage)| {
            let representative = key.representative();
            DominantColor {
                color: color_ops::to_srgb(representative),
                percentage,
                name: naming::name_of(representative).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const RED: Rgba<u8> = Rgba([230, 26, 26, 255]);
    const GREEN: Rgba<u8> = Rgba([26, 230, 26, 255]);

    fn image_of(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, f))
    }

    #[test]
    fn test_two_color_split_keeps_frequency_order() {
        let image = image_of(100, 100, |x, _| if x < 60 { RED } else { GREEN });
        let colors = extract_dominant_colors(&image, 150, 2.0);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].name, "Rojo");
        assert!((colors[0].percentage - 60.0).abs() < 1.0);
        assert_eq!(colors[1].name, "Verde");
        assert!((colors[1].percentage - 40.0).abs() < 1.0);
        let total: f32 = colors.iter().map(|c| c.percentage).sum();
        assert!(total <= 100.01);
    }

    #[test]
    fn test_transparent_pixels_are_skipped_but_counted() {
        let image = image_of(50, 50, |x, _| {
            if x < 25 { RED } else { Rgba([230, 26, 26, 0]) }
        });
        let colors = extract_dominant_colors(&image, 150, 2.0);
        assert_eq!(colors.len(), 1);
        assert!((colors[0].percentage - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_near_black_and_near_white_are_excluded() {
        let image = image_of(50, 50, |x, _| {
            if x < 25 {
                Rgba([10, 10, 10, 255])
            } else {
                Rgba([250, 250, 250, 255])
            }
        });
        assert!(extract_dominant_colors(&image, 150, 2.0).is_empty());
    }

    #[test]
    fn test_rare_colors_fall_below_threshold() {
        // One green column out of 100 is 1% of the image
        let image = image_of(100, 100, |x, _| if x < 99 { RED } else { GREEN });
        let colors = extract_dominant_colors(&image, 150, 2.0);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "Rojo");
    }

    #[test]
    fn test_gray_pixels_bucket_by_lightness() {
        let image = image_of(40, 40, |_, _| Rgba([128, 128, 128, 255]));
        let colors = extract_dominant_colors(&image, 150, 2.0);
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].name, "Gris");
        assert_eq!(color_ops::hex(colors[0].color), "#808080");
    }

    #[test]
    fn test_large_image_is_downsampled() {
        let image = image_of(600, 400, |_, _| RED);
        let colors = extract_dominant_colors(&image, 150, 2.0);
        assert_eq!(colors.len(), 1);
        assert!((colors[0].percentage - 100.0).abs() < 1.0);
    }
}
