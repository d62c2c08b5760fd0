pub use self::error::{Error, Result};

use clap::Parser;
use palette::Srgb;
use wild::ArgsOs;

use analyzer::PaletteAnalyzer;
use analyzer::color_ops;
pub use analyzer::extraction::{DominantColor, extract_dominant_colors};
pub use analyzer::naming::{ColorCategory, color_name};
pub use analyzer::scale::{LEVELS, PaletteScale, ScaleMode, generate_scale};
pub use analyzer::suggestion::{ColorSuggestion, generate_suggestions};

mod analyzer;
mod arg_validators;
mod error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image files or glob patterns
    #[arg(required_unless_present = "base_color")]
    files: Vec<String>,
    /// Generate a scale for this color instead of analyzing images
    #[arg(short('c'), long, value_parser = arg_validators::validate_base_color)]
    base_color: Option<Srgb<u8>>,
    /// Color space used to interpolate scales
    #[arg(short('m'), long, value_enum, default_value = "hsl")]
    scale_mode: ScaleMode,
    /// Longest image side after downsampling (pixels)
    #[arg(short('d'), long, default_value_t = 150)]
    max_dimension: u32,
    /// Minimum share of pixels for a dominant color (percent)
    #[arg(short('p'), long, default_value_t = 2.0, value_parser = arg_validators::validate_min_percentage)]
    min_percentage: f32,
    /// Save a swatch strip PNG for each suggested palette
    #[arg(short('s'), long, default_value_t = false)]
    save_swatches: bool,
    /// Verbose messages
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,
}

pub fn run(args: ArgsOs) -> Result<()> {
    let args = Args::parse_from(args);

    if let Some(base_color) = args.base_color {
        report_scale(base_color, args.scale_mode);
        return Ok(());
    }

    for pattern in &args.files {
        for entry in glob::glob(pattern)? {
            let file = entry?;
            let analyzer = PaletteAnalyzer::new(file.to_owned(), &args);
            // A failed image should not abort the rest of the batch
            if let Err(error) = analyzer.process() {
                eprintln!("{}: analysis failed: {error:?}", file.display());
            }
            println!();
        }
    }
    Ok(())
}

fn report_scale(base_color: Srgb<u8>, mode: ScaleMode) {
    let scale = generate_scale(base_color, mode);
    for (level, color) in scale.entries() {
        println!("{level:>4}: {}", color_ops::hex(color));
    }
}
