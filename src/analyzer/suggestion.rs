use palette::{Hsl, Srgb};

use super::color_ops;
use super::extraction::DominantColor;
use super::naming::{self, ColorCategory};
use super::scale::{self, PaletteScale, ScaleMode};

/// Raw suggestions accumulated before truncation
const MAX_RAW_SUGGESTIONS: usize = 6;
/// Suggestions returned to the caller
const MAX_SUGGESTIONS: usize = 4;

/// A named palette proposal derived from one dominant color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSuggestion {
    pub name: String,
    pub description: String,
    pub category: ColorCategory,
    pub scale: PaletteScale,
}

/// Derive palette suggestions from dominant colors, most frequent first.
///
/// Total over any input: washed-out colors are filtered, and if nothing
/// usable remains a fixed default set is returned so callers always have
/// something to offer.
pub fn generate_suggestions(dominant: &[DominantColor], mode: ScaleMode) -> Vec<ColorSuggestion> {
    // Colors too dark, too light or too gray cannot anchor a usable brand palette
    let usable: Vec<&DominantColor> = dominant
        .iter()
        .filter(|d| {
            let hsl = color_ops::to_hsl(d.color);
            hsl.lightness > 0.15 && hsl.lightness < 0.85 && hsl.saturation > 0.1
        })
        .collect();

    let mut suggestions = Vec::new();
    for (index, dominant) in usable.iter().enumerate() {
        let hsl = color_ops::to_hsl(dominant.color);
        let hue = hsl.hue.into_positive_degrees();
        if index == 0 {
            // Saturation floor and lightness clamp keep the anchor usable even
            // for muted source colors
            let enhanced = Hsl::new(
                hsl.hue,
                hsl.saturation.max(0.4),
                hsl.lightness.clamp(0.3, 0.7),
            );
            suggestions.push(build_suggestion(
                format!("Monocromática {}", dominant.name),
                format!("Escala de tonos del color dominante {}", dominant.name),
                enhanced,
                mode,
            ));
            if suggestions.len() >= MAX_RAW_SUGGESTIONS {
                break;
            }
        }
        let complementary = Hsl::new(hue + 180.0, hsl.saturation, hsl.lightness);
        suggestions.push(build_suggestion(
            format!("Complementaria {}", dominant.name),
            format!("Contraste complementario para {}", dominant.name),
            complementary,
            mode,
        ));
        if suggestions.len() >= MAX_RAW_SUGGESTIONS {
            break;
        }
        if index == 1 {
            let analogous = Hsl::new(hue + 60.0, hsl.saturation, hsl.lightness);
            suggestions.push(build_suggestion(
                format!("Análoga {}", dominant.name),
                format!("Armonía análoga cercana a {}", dominant.name),
                analogous,
                mode,
            ));
            if suggestions.len() >= MAX_RAW_SUGGESTIONS {
                break;
            }
        }
    }

    if suggestions.is_empty() {
        return default_suggestions(mode);
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn build_suggestion(
    name: String,
    description: String,
    base: Hsl,
    mode: ScaleMode,
) -> ColorSuggestion {
    ColorSuggestion {
        name,
        description,
        category: naming::categorize(base),
        scale: scale::generate_scale(color_ops::to_srgb(base), mode),
    }
}

/// Shown when an image yields nothing usable, so the caller is never left empty-handed
fn default_suggestions(mode: ScaleMode) -> Vec<ColorSuggestion> {
    [
        (
            "Azul Profesional",
            "Paleta azul clásica para marcas profesionales",
            Srgb::new(37u8, 99, 235),
        ),
        (
            "Verde Moderno",
            "Verde fresco y equilibrado para marcas actuales",
            Srgb::new(16, 185, 129),
        ),
        (
            "Púrpura Elegante",
            "Púrpura sofisticado con presencia premium",
            Srgb::new(139, 92, 246),
        ),
    ]
    .into_iter()
    .map(|(name, description, color)| ColorSuggestion {
        name: name.to_string(),
        description: description.to_string(),
        category: naming::categorize(color_ops::to_hsl(color)),
        scale: scale::generate_scale(color, mode),
    })
    .collect()
}
