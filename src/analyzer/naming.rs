use std::fmt;

use palette::Hsl;

use super::color_ops;

/// Fallback label for input that does not parse as a color
pub(crate) const UNKNOWN_COLOR: &str = "Desconocido";

/// Coarse temperature/intensity class of a color, used to tag palette suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Warm,
    Cool,
    Neutral,
    Vibrant,
}

impl ColorCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Neutral => "neutral",
            Self::Vibrant => "vibrant",
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable name for a color string; total, never panics on malformed input
pub fn color_name(value: &str) -> String {
    match color_ops::parse_color(value) {
        Ok(color) => name_of(color_ops::to_hsl(color)).to_string(),
        Err(_) => UNKNOWN_COLOR.to_string(),
    }
}

/// Name the 30-degree hue band, or a lightness band for washed-out colors
pub(crate) fn name_of(hsl: Hsl) -> &'static str {
    if hsl.saturation < 0.15 {
        return if hsl.lightness > 0.85 {
            "Blanco"
        } else if hsl.lightness < 0.15 {
            "Negro"
        } else if hsl.lightness > 0.65 {
            "Gris claro"
        } else if hsl.lightness < 0.35 {
            "Gris oscuro"
        } else {
            "Gris"
        };
    }
    let hue = hsl.hue.into_positive_degrees();
    match hue {
        h if h < 15.0 => "Rojo",
        h if h < 45.0 => "Naranja",
        h if h < 75.0 => "Amarillo",
        h if h < 105.0 => "Verde Lima",
        h if h < 135.0 => "Verde",
        h if h < 165.0 => "Verde Azulado",
        h if h < 195.0 => "Cian",
        h if h < 225.0 => "Azul Claro",
        h if h < 255.0 => "Azul",
        h if h < 285.0 => "Azul Violeta",
        h if h < 315.0 => "Púrpura",
        h if h < 345.0 => "Rosa",
        _ => "Rojo",
    }
}

/// Category rule: gray is neutral, strong chroma is vibrant, hues below 180
/// degrees (and magentas above 300) count as warm, the rest as cool
pub(crate) fn categorize(hsl: Hsl) -> ColorCategory {
    if hsl.saturation < 0.2 {
        return ColorCategory::Neutral;
    }
    if hsl.saturation > 0.7 {
        return ColorCategory::Vibrant;
    }
    let hue = hsl.hue.into_positive_degrees();
    if hue < 180.0 || hue >= 300.0 {
        ColorCategory::Warm
    } else {
        ColorCategory::Cool
    }
}
