//! Plain white canvas theme

use egui::Color32;

use crate::core::Rgba;

pub mod colors {
    use super::Color32;

    pub const BG_CANVAS: Color32 = Color32::WHITE;
}

/// Convert a CSS-style color (alpha 0..=1) into an egui color.
///
/// Alpha is clamped; a line one frame past its lifetime has alpha < 0.
pub fn to_color32(color: Rgba) -> Color32 {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a * 255.0),
    )
}

/// Light egui Visuals with a white panel for the line canvas
pub fn canvas_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = BG_CANVAS;
    visuals.window_fill = BG_CANVAS;
    visuals.extreme_bg_color = BG_CANVAS;

    // No shadows - flat design
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
