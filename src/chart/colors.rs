//! Color definitions for the radar chart

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#FFFFFF"; // White canvas
pub(super) const COLOR_TEXT: &str = "#222222"; // Near-black legend text
pub(super) const COLOR_MARKER: &str = "#B0B0B0"; // Light gray sample markers

/// Concentric gridline rings (white reads over the tinted sectors)
pub(super) const COLOR_RING: &str = "rgba(255, 255, 255, 0.7)";

/// Radial spokes at each dimension
pub(super) const COLOR_SPOKE: &str = "rgba(128, 128, 128, 0.3)";

/// Background sector fills, one per entry in SECTOR_SIZES
pub(super) const SECTOR_COLORS: [&str; 2] = [
    "#A2C6E4", // Blue sector (5 slots)
    "#E6D29F", // Sand sector (6 slots)
];

/// Sector fill transparency
pub(super) const SECTOR_OPACITY: f64 = 0.5;

/// Seen-curve area fill transparency
pub(super) const FILL_OPACITY: f64 = 0.20;

/// Expand a `#RRGGBB` color into an `rgba(...)` string with the given alpha.
/// Falls back to the input unchanged if it is not a 6-digit hex color.
pub(super) fn with_alpha(hex: &str, alpha: f64) -> String {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 => d,
        _ => return hex.to_string(),
    };
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => hex.to_string(),
    }
}
