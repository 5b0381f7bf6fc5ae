//! Hex color validation and perceptual contrast selection.

use lazy_static::lazy_static;

lazy_static! {
    static ref HEX_COLOR_REGEX: regex::Regex = regex::Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
}

/// Relative luminance above which a background counts as "light" and gets
/// black text (0-1 scale).
const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.5;

/// Returns true iff `value` is `#` followed by exactly six hex digits.
///
/// Shorthand forms (`#fff`) and bare digit strings are rejected; branding
/// color updates are gated on this check.
pub fn is_valid_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Computes the relative luminance of a `#RRGGBB` color on a 0-1 scale.
///
/// Each sRGB channel is gamma-expanded and the results are combined with
/// the standard 0.2126/0.7152/0.0722 weights. Returns `None` for input
/// that is not a valid six-digit hex color.
pub fn relative_luminance(bg_hex: &str) -> Option<f64> {
    if !is_valid_hex_color(bg_hex) {
        return None;
    }
    let r = u8::from_str_radix(&bg_hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&bg_hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&bg_hex[5..7], 16).ok()?;
    Some(0.2126 * expand(r) + 0.7152 * expand(g) + 0.0722 * expand(b))
}

fn expand(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Picks a legible text color for the given background: `#000000` over
/// light backgrounds, `#ffffff` over dark ones.
///
/// This is the accessibility contract behind buttons and labels rendered
/// over tenant-chosen brand colors. Unparseable input is treated as a dark
/// background and yields white text.
pub fn contrast_text_color(bg_hex: &str) -> &'static str {
    match relative_luminance(bg_hex) {
        Some(luminance) if luminance > LIGHT_BACKGROUND_THRESHOLD => "#000000",
        _ => "#ffffff",
    }
}
