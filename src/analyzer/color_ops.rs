use color::{AlphaColor, ParseError};
use image::Rgba;
use palette::{Clamp, FromColor, Hsl, Srgb};

/// Parse a string into a color, with format like this #RRGGBB (CSS named colors also work)
pub(crate) fn parse_color(value: &str) -> Result<Srgb<u8>, ParseError> {
    let parsed = color::parse_color(value)?;
    let parsed: AlphaColor<color::Srgb> = parsed.to_alpha_color();
    let [r, g, b, _a] = parsed.to_rgba8().to_u8_array();
    Ok(Srgb::new(r, g, b))
}

/// Encode a color as lowercase #rrggbb
pub(crate) fn hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

pub(crate) fn to_hsl(color: Srgb<u8>) -> Hsl {
    Hsl::from_color(color.into_format::<f32>())
}

pub(crate) fn to_srgb(color: Hsl) -> Srgb<u8> {
    Srgb::from_color(color).clamp().into_format::<u8>()
}

/// Perceptual brightness of a pixel on the 0-255 scale (Rec. 601 weights)
pub(crate) fn luma(pixel: &Rgba<u8>) -> f32 {
    0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        let color = parse_color("#ff8000").unwrap();
        assert_eq!((color.red, color.green, color.blue), (255, 128, 0));
    }

    #[test]
    fn test_parse_color_named() {
        let color = parse_color("red").unwrap();
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(parse_color("not-a-color").is_err());
        assert!(parse_color("").is_err());
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(hex(Srgb::new(255, 10, 0)), "#ff0a00");
        assert_eq!(hex(Srgb::new(0, 0, 0)), "#000000");
    }

    #[test]
    fn test_hsl_round_trip() {
        let color = Srgb::new(37, 99, 235);
        let back = to_srgb(to_hsl(color));
        assert!((back.red as i16 - 37).abs() <= 1);
        assert!((back.green as i16 - 99).abs() <= 1);
        assert!((back.blue as i16 - 235).abs() <= 1);
    }

    #[test]
    fn test_luma_weights() {
        assert!((luma(&Rgba([255, 0, 0, 255])) - 76.245).abs() < 0.01);
        assert!((luma(&Rgba([0, 0, 255, 255])) - 29.07).abs() < 0.01);
        assert!((luma(&Rgba([255, 255, 255, 255])) - 255.0).abs() < 0.01);
    }
}
