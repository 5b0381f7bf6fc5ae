//! Common validation functions for request types.

use lazy_static::lazy_static;
use validator::ValidationError;

use crate::color::is_valid_hex_color;

lazy_static! {
    /// Lowercase alphanumeric runs separated by single hyphens.
    pub static ref SLUG_FORMAT_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Validates an explicit slug override: lowercase alphanumeric with single
/// hyphens, no leading/trailing hyphens.
pub fn validate_slug_format(slug: &str) -> Result<(), ValidationError> {
    if SLUG_FORMAT_REGEX.is_match(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_format");
        err.message =
            Some("Slug must be lowercase alphanumeric with hyphens, no leading/trailing hyphens".into());
        Err(err)
    }
}

/// Validates a branding color value: `#` followed by exactly six hex digits.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if is_valid_hex_color(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be a #RRGGBB hex value".into());
        Err(err)
    }
}
