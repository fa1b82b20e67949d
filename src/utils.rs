//! Conversions from core values to what the Slint window displays.

use furniture_ar::catalog::FurnitureDefinition;
use furniture_ar::visual::category_style;

use crate::Preset;

/// Convert a `0xRRGGBB` value to a Slint color
pub fn to_color(rgb: u32) -> slint::Color {
    slint::Color::from_rgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

pub fn format_price(price: Option<f32>) -> String {
    price.map(|p| format!("${p:.0}")).unwrap_or_default()
}

/// "0.6 × 0.6 × 0.8 m · ModernDesign"
pub fn format_details(definition: &FurnitureDefinition) -> String {
    let d = definition.dimensions;
    let mut details = format!("{} × {} × {} m", d.width, d.depth, d.height);
    if let Some(brand) = &definition.brand {
        details.push_str(" · ");
        details.push_str(brand);
    }
    details
}

pub fn icon_for(definition: &FurnitureDefinition) -> &'static str {
    category_style(definition.category).icon
}

pub fn scale_presets(values: &[f32]) -> Vec<Preset> {
    values
        .iter()
        .map(|&value| Preset {
            value,
            label: format!("{value}x").into(),
        })
        .collect()
}

pub fn rotation_presets(values: &[f32]) -> Vec<Preset> {
    values
        .iter()
        .map(|&value| Preset {
            value,
            label: format!("{value}°").into(),
        })
        .collect()
}
