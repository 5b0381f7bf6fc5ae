//! Branding theme owned by a tenant.
//!
//! Branding is a value object: it has no identity, is replaced as a unit on
//! save, and every update operation returns a new value instead of mutating
//! shared state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::color::{contrast_text_color, is_valid_hex_color};

/// Corner treatment applied to portal buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Rounded,
    Pill,
    Square,
}

impl std::fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonStyle::Rounded => write!(f, "rounded"),
            ButtonStyle::Pill => write!(f, "pill"),
            ButtonStyle::Square => write!(f, "square"),
        }
    }
}

/// Surface treatment applied to portal cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    Flat,
    Elevated,
    Bordered,
}

impl std::fmt::Display for CardStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardStyle::Flat => write!(f, "flat"),
            CardStyle::Elevated => write!(f, "elevated"),
            CardStyle::Bordered => write!(f, "bordered"),
        }
    }
}

/// The six color slots a tenant theme exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorField {
    Primary,
    Secondary,
    Accent,
    Background,
    Header,
    Text,
}

impl ColorField {
    /// All color slots, in picker display order.
    pub const ALL: [ColorField; 6] = [
        ColorField::Primary,
        ColorField::Secondary,
        ColorField::Accent,
        ColorField::Background,
        ColorField::Header,
        ColorField::Text,
    ];

    /// Short label shown next to the color swatch.
    pub fn label(&self) -> &'static str {
        match self {
            ColorField::Primary => "Primary",
            ColorField::Secondary => "Secondary",
            ColorField::Accent => "Accent",
            ColorField::Background => "Background",
            ColorField::Header => "Header",
            ColorField::Text => "Text",
        }
    }
}

impl std::fmt::Display for ColorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorField::Primary => write!(f, "primary_color"),
            ColorField::Secondary => write!(f, "secondary_color"),
            ColorField::Accent => write!(f, "accent_color"),
            ColorField::Background => write!(f, "background_color"),
            ColorField::Header => write!(f, "header_background"),
            ColorField::Text => write!(f, "text_color"),
        }
    }
}

/// Branding update errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrandingError {
    #[error("invalid hex color for {field}: {value:?}")]
    InvalidColor { field: ColorField, value: String },
}

/// Visual theme applied to a tenant's learning portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Branding {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub header_background: String,
    pub text_color: String,
    pub font_family: String,
    pub heading_font: String,
    pub button_style: ButtonStyle,
    pub card_style: CardStyle,
    pub welcome_title: String,
    pub welcome_subtitle: String,
    pub login_message: String,
    pub help_url: Option<String>,
    pub privacy_url: Option<String>,
    pub terms_url: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            primary_color: "#0891b2".to_string(),
            secondary_color: "#06b6d4".to_string(),
            accent_color: "#f59e0b".to_string(),
            background_color: "#f8fafc".to_string(),
            header_background: "#ffffff".to_string(),
            text_color: "#1e293b".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            heading_font: "Inter, sans-serif".to_string(),
            button_style: ButtonStyle::Rounded,
            card_style: CardStyle::Elevated,
            welcome_title: "Welcome to Learning Portal".to_string(),
            welcome_subtitle: "Start your certification journey today".to_string(),
            login_message: "Sign in to continue learning".to_string(),
            help_url: None,
            privacy_url: None,
            terms_url: None,
        }
    }
}

impl Branding {
    /// Current value of a color slot.
    pub fn color(&self, field: ColorField) -> &str {
        match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Accent => &self.accent_color,
            ColorField::Background => &self.background_color,
            ColorField::Header => &self.header_background,
            ColorField::Text => &self.text_color,
        }
    }

    /// Returns a copy with one color slot replaced.
    ///
    /// Fails closed: an invalid hex value is rejected as a whole and the
    /// caller's branding keeps its prior color.
    pub fn with_color(&self, field: ColorField, value: &str) -> Result<Branding, BrandingError> {
        if !is_valid_hex_color(value) {
            return Err(BrandingError::InvalidColor {
                field,
                value: value.to_string(),
            });
        }
        let mut updated = self.clone();
        let slot = match field {
            ColorField::Primary => &mut updated.primary_color,
            ColorField::Secondary => &mut updated.secondary_color,
            ColorField::Accent => &mut updated.accent_color,
            ColorField::Background => &mut updated.background_color,
            ColorField::Header => &mut updated.header_background,
            ColorField::Text => &mut updated.text_color,
        };
        *slot = value.to_string();
        Ok(updated)
    }

    /// True when every color slot holds a valid `#RRGGBB` value.
    pub fn has_valid_colors(&self) -> bool {
        ColorField::ALL.iter().all(|field| is_valid_hex_color(self.color(*field)))
    }

    /// Legible text color for content rendered over the primary brand
    /// color, e.g. call-to-action buttons.
    pub fn text_on_primary(&self) -> &'static str {
        contrast_text_color(&self.primary_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_branding_colors_are_valid() {
        assert!(Branding::default().has_valid_colors());
    }

    #[test]
    fn test_with_color_replaces_single_slot() {
        let branding = Branding::default();
        let updated = branding.with_color(ColorField::Primary, "#112233").unwrap();
        assert_eq!(updated.primary_color, "#112233");
        assert_eq!(updated.secondary_color, branding.secondary_color);
        // Caller's value unchanged.
        assert_eq!(branding.primary_color, "#0891b2");
    }

    #[test]
    fn test_with_color_fails_closed() {
        let branding = Branding::default();
        let err = branding.with_color(ColorField::Accent, "#fff").unwrap_err();
        assert_eq!(
            err,
            BrandingError::InvalidColor {
                field: ColorField::Accent,
                value: "#fff".to_string()
            }
        );
        assert_eq!(branding.accent_color, "#f59e0b");
    }

    #[test]
    fn test_with_color_covers_every_slot() {
        let mut branding = Branding::default();
        for field in ColorField::ALL {
            branding = branding.with_color(field, "#abcdef").unwrap();
        }
        for field in ColorField::ALL {
            assert_eq!(branding.color(field), "#abcdef");
        }
    }

    #[test]
    fn test_text_on_primary_default_theme() {
        // The default cyan primary is dark enough to need white text.
        assert_eq!(Branding::default().text_on_primary(), "#ffffff");
    }

    #[test]
    fn test_color_field_labels() {
        assert_eq!(ColorField::Primary.label(), "Primary");
        assert_eq!(ColorField::Header.label(), "Header");
        assert_eq!(ColorField::Header.to_string(), "header_background");
    }

    #[test]
    fn test_branding_serialization() {
        let branding = Branding::default();
        let json = serde_json::to_string(&branding).unwrap();
        assert!(json.contains("\"button_style\":\"rounded\""));
        assert!(json.contains("\"card_style\":\"elevated\""));
        assert!(json.contains("\"primary_color\":\"#0891b2\""));

        let parsed: Branding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, branding);
    }

    #[test]
    fn test_button_style_rejects_unknown_value() {
        assert!(serde_json::from_str::<ButtonStyle>("\"beveled\"").is_err());
    }
}
