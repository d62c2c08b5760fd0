use palette::Srgb;

use crate::analyzer::color_ops;

pub(crate) fn validate_min_percentage(value: &str) -> Result<f32, String> {
    let num = value
        .parse::<f32>()
        .map_err(|_| "Not a valid floating point number".to_string())?;
    if num <= 0.0 {
        return Err("Number must be greater than 0".to_string());
    }
    Ok(num)
}

pub(crate) fn validate_base_color(value: &str) -> Result<Srgb<u8>, String> {
    match color_ops::parse_color(value) {
        Ok(color) => Ok(color),
        Err(e) => Err(e.to_string()),
    }
}
