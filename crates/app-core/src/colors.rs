//! Fixed color table for color cards
//!
//! A card whose front text names one of these colors renders with that
//! color as its background. Both tables are compile-time constants and
//! never change at runtime.

/// Named color values used as color-card backgrounds
pub mod values {
    /// White
    pub const WHITE: &str = "#FFFFFF";
    /// Yellow
    pub const YELLOW: &str = "#FFEB3B";
    /// Black
    pub const BLACK: &str = "#212121";
    /// Green
    pub const GREEN: &str = "#4CAF50";
    /// Brown
    pub const BROWN: &str = "#795548";
    /// Blue
    pub const BLUE: &str = "#2196F3";
    /// Red
    pub const RED: &str = "#F44336";
    /// Gray (both spellings map here)
    pub const GRAY: &str = "#9E9E9E";
}

/// Look up the background value for a color name
///
/// Keys are lowercase; callers lowercase the card text before calling, so
/// `"RED"`, `"Red"` and `"red"` all classify identically.
pub fn lookup(name: &str) -> Option<&'static str> {
    match name {
        "white" => Some(values::WHITE),
        "yellow" => Some(values::YELLOW),
        "black" => Some(values::BLACK),
        "green" => Some(values::GREEN),
        "brown" => Some(values::BROWN),
        "blue" => Some(values::BLUE),
        "red" => Some(values::RED),
        "gray" | "grey" => Some(values::GRAY),
        _ => None,
    }
}

/// Whether a background value is dark enough to require light text
pub fn needs_light_text(value: &str) -> bool {
    matches!(
        value,
        values::BLACK | values::BLUE | values::BROWN | values::GREEN | values::RED
    )
}
