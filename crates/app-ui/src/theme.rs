//! Card design tokens
//!
//! Concrete color values for card rendering. The presenter decides
//! light-vs-dark; this module maps that verdict (and the rest of the card
//! chrome) to hex values.

use serde::{Deserialize, Serialize};

use app_core::TextColor;

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// A gradient stop with position and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position from 0.0 to 1.0
    pub position: f32,
    /// Color at this position
    pub color: Color,
}

/// A gradient definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Gradient stops
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a new gradient with stops
    pub fn new(stops: Vec<(f32, &str)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(pos, color)| GradientStop {
                    position: pos,
                    color: color.to_string(),
                })
                .collect(),
        }
    }
}

/// Card chrome colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTheme {
    /// App surface color
    pub surface: Color,
    /// Primary text on surfaces
    pub on_surface: Color,
    /// Default card background
    pub card_background: Color,
    /// Card body text
    pub text: Color,
    /// Text over dark backgrounds and image overlays
    pub light_text: Color,
    /// Notes text on the back face
    pub notes: Color,
    /// Audio icon tint
    pub audio_icon: Color,
}

/// The default card theme
pub fn card_theme() -> CardTheme {
    CardTheme {
        surface: "#ffffff".to_string(),
        on_surface: "#0f172a".to_string(),
        card_background: "#FFFFFF".to_string(),
        text: "#333333".to_string(),
        light_text: "#FFFFFF".to_string(),
        notes: "#555555".to_string(),
        audio_icon: "#666666".to_string(),
    }
}

/// The bottom gradient drawn under overlay text on image cards
pub fn image_overlay() -> Gradient {
    Gradient::new(vec![(0.0, "#00000000"), (1.0, "#000000CC")])
}

/// Map the presenter's text color verdict to a hex value
pub fn text_color_hex(color: TextColor) -> &'static str {
    match color {
        TextColor::Dark => "#333333",
        TextColor::Light => "#FFFFFF",
    }
}
