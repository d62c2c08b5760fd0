use std::path::PathBuf;

use itertools::Itertools;

use crate::{Args, Result};

pub(crate) mod color_ops;
pub mod extraction;
mod io;
pub mod naming;
pub mod scale;
pub mod suggestion;

use suggestion::ColorSuggestion;

pub(crate) struct PaletteAnalyzer {
    file: PathBuf,
    base_path: PathBuf,
    max_dimension: u32,
    min_percentage: f32,
    scale_mode: scale::ScaleMode,
    save_swatches: bool,
    verbose: bool,
}

impl PaletteAnalyzer {
    pub(crate) fn new(file: PathBuf, args: &Args) -> Self {
        let base_path = file.parent().unwrap().join(file.file_stem().unwrap());
        Self {
            file,
            base_path,
            max_dimension: args.max_dimension,
            min_percentage: args.min_percentage,
            scale_mode: args.scale_mode,
            save_swatches: args.save_swatches,
            verbose: args.verbose,
        }
    }

    pub(crate) fn process(&self) -> Result<()> {
        let image = io::open_image(&self.file)?;
        if self.verbose {
            println!(
                "{}: loaded {}x{}",
                self.file.display(),
                image.width(),
                image.height()
            );
        }

        // Cluster pixels into the most frequent brand-color candidates
        let dominant =
            extraction::extract_dominant_colors(&image, self.max_dimension, self.min_percentage);
        println!(
            "{}: found {} dominant colors",
            self.file.display(),
            dominant.len()
        );
        for color in &dominant {
            println!(
                "  {} {} ({:.1}%)",
                color_ops::hex(color.color),
                color.name,
                color.percentage
            );
        }

        let suggestions = suggestion::generate_suggestions(&dominant, self.scale_mode);
        for (index, suggestion) in suggestions.iter().enumerate() {
            self.report_suggestion(index + 1, suggestion)?;
        }
        Ok(())
    }

    /// Print a single suggestion with its full scale, and maybe save a swatch strip
    fn report_suggestion(&self, number: usize, suggestion: &ColorSuggestion) -> Result<()> {
        println!(
            "{}. {} [{}] - {}",
            number, suggestion.name, suggestion.category, suggestion.description
        );
        let swatches = suggestion
            .scale
            .entries()
            .map(|(_, color)| color_ops::hex(color))
            .join(" ");
        println!("   {swatches}");
        if self.save_swatches {
            let suffix = format!("palette-{number}-{}", slug(&suggestion.name));
            io::save_swatch_as(&suggestion.scale, &self.base_path, &suffix)?;
        }
        Ok(())
    }
}

/// Lowercase filename-safe fragment derived from a suggestion name
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}
