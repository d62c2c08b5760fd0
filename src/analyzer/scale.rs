use clap::ValueEnum;
use palette::{Clamp, FromColor, Hsl, Lab, Lch, Mix, Srgb};

use super::color_ops;

/// Fixed tint/shade levels of a palette scale, lightest first
pub const LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Index of the level that carries the caller's base color
const BASE_INDEX: usize = 5;

/// Color space used to interpolate between scale anchors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScaleMode {
    #[default]
    Hsl,
    Lab,
    Lch,
}

/// An 11-step tint/shade scale with the base color anchored at level 500
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteScale {
    colors: [Srgb<u8>; 11],
}

impl PaletteScale {
    pub fn get(&self, level: u16) -> Option<Srgb<u8>> {
        LEVELS
            .iter()
            .position(|&l| l == level)
            .map(|index| self.colors[index])
    }

    /// The caller-supplied base color (level 500)
    pub fn base(&self) -> Srgb<u8> {
        self.colors[BASE_INDEX]
    }

    /// Levels and colors in order, lightest first
    pub fn entries(&self) -> impl Iterator<Item = (u16, Srgb<u8>)> + '_ {
        LEVELS.iter().copied().zip(self.colors.iter().copied())
    }
}

/// Synthesize the full tint/shade scale around one base color.
///
/// Pure and deterministic: the same input always produces the same scale,
/// and level 500 reproduces the input exactly.
pub fn generate_scale(base: Srgb<u8>, mode: ScaleMode) -> PaletteScale {
    let stops = build_stops(color_ops::to_hsl(base));
    let mut colors = match mode {
        ScaleMode::Hsl => stops.map(color_ops::to_srgb),
        ScaleMode::Lab => {
            let anchors = anchors_of(&stops).map(|(t, hsl)| (t, Lab::from_color(hsl)));
            resample(&anchors).map(|lab| clamp_to_u8(Srgb::from_color(lab)))
        }
        ScaleMode::Lch => {
            let anchors = anchors_of(&stops).map(|(t, hsl)| (t, Lch::from_color(hsl)));
            resample(&anchors).map(|lch| clamp_to_u8(Srgb::from_color(lch)))
        }
    };
    colors[BASE_INDEX] = base;
    PaletteScale { colors }
}

/// Build the 11-stop interpolation path in HSL space.
///
/// The light stops desaturate and the dark stops saturate slightly, so tints
/// stay soft and shades keep their chroma. Anchor lightness is clamped
/// against the base so the sequence never increases, even for near-white or
/// near-black bases.
fn build_stops(base: Hsl) -> [Hsl; 11] {
    let light_sat = (base.saturation - 0.3).max(0.0);
    let dark_sat = (base.saturation + 0.2).min(1.0);
    let lightest = Hsl::new(base.hue, light_sat, base.lightness.max(0.95));
    let lighter = Hsl::new(base.hue, light_sat, base.lightness.max(0.85));
    let darker = Hsl::new(base.hue, dark_sat, base.lightness.min(0.15));
    let darkest = Hsl::new(base.hue, dark_sat, base.lightness.min(0.08));
    [
        lightest,
        lighter,
        lighter.mix(base, 0.25),
        lighter.mix(base, 0.5),
        lighter.mix(base, 0.75),
        base,
        base.mix(darker, 0.25),
        base.mix(darker, 0.5),
        base.mix(darker, 0.75),
        darker,
        darkest,
    ]
}

/// The five key stops of the path with their positions along it
fn anchors_of(stops: &[Hsl; 11]) -> [(f32, Hsl); 5] {
    [
        (0.0, stops[0]),
        (0.1, stops[1]),
        (0.5, stops[5]),
        (0.9, stops[9]),
        (1.0, stops[10]),
    ]
}

/// Sample the anchor path at the 11 uniform level positions, interpolating
/// segment-wise in whatever space the anchors live in
fn resample<C: Mix<Scalar = f32> + Copy>(anchors: &[(f32, C); 5]) -> [C; 11] {
    std::array::from_fn(|index| {
        let t = index as f32 / 10.0;
        let mut segment = (anchors[0], anchors[1]);
        for window in anchors.windows(2) {
            if t >= window[0].0 {
                segment = (window[0], window[1]);
            }
        }
        let ((t0, a), (t1, b)) = segment;
        let span = t1 - t0;
        if span <= f32::EPSILON {
            return a;
        }
        a.mix(b, ((t - t0) / span).clamp(0.0, 1.0))
    })
}

fn clamp_to_u8(color: Srgb<f32>) -> Srgb<u8> {
    color.clamp().into_format()
}
