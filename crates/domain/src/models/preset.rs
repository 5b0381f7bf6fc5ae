//! Reusable tenant configuration presets.

use serde::{Deserialize, Serialize};

use crate::models::branding::{Branding, ButtonStyle, CardStyle};
use crate::models::features::{FeatureKey, Features};
use crate::models::tenant::{Industry, Tenant};

/// An immutable template used to seed a new tenant's industry, branding,
/// and features in bulk. Presets are read-only; they have no lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub industry: Industry,
    pub branding: Branding,
    pub features: Features,
}

impl Preset {
    /// Applies this preset to a tenant draft: industry, branding, and
    /// features are replaced wholesale; identity, contact, and
    /// subscription fields are untouched.
    ///
    /// Returns a new tenant value so the caller can diff or undo.
    pub fn apply_to(&self, tenant: &Tenant) -> Tenant {
        let mut seeded = tenant.clone();
        seeded.industry = self.industry;
        seeded.branding = self.branding.clone();
        seeded.features = self.features;
        seeded
    }
}

/// The built-in presets offered when creating a new client portal.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "corporate-consulting".to_string(),
            name: "Corporate Consulting".to_string(),
            description: "Conservative theme for professional services".to_string(),
            industry: Industry::Consulting,
            branding: Branding {
                primary_color: "#1e3a8a".to_string(),
                secondary_color: "#475569".to_string(),
                accent_color: "#b45309".to_string(),
                text_color: "#0f172a".to_string(),
                font_family: "Open Sans, sans-serif".to_string(),
                heading_font: "Merriweather, serif".to_string(),
                card_style: CardStyle::Bordered,
                welcome_title: "Welcome to Your Training Center".to_string(),
                welcome_subtitle: "Professional development for your practice".to_string(),
                login_message: "Sign in with your company credentials".to_string(),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::Gamification, false)
                .with(FeatureKey::Leaderboards, false)
                .with(FeatureKey::Forum, false)
                .with(FeatureKey::ProgressSharing, false),
        },
        Preset {
            id: "tech-startup".to_string(),
            name: "Tech Startup".to_string(),
            description: "Modern theme with every capability enabled".to_string(),
            industry: Industry::Technology,
            branding: Branding {
                primary_color: "#7c3aed".to_string(),
                secondary_color: "#06b6d4".to_string(),
                accent_color: "#f43f5e".to_string(),
                text_color: "#18181b".to_string(),
                font_family: "Inter, sans-serif".to_string(),
                heading_font: "Poppins, sans-serif".to_string(),
                button_style: ButtonStyle::Pill,
                card_style: CardStyle::Flat,
                welcome_title: "Level Up Your Skills".to_string(),
                welcome_subtitle: "Learn fast, ship faster".to_string(),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::AiAssistant, true)
                .with(FeatureKey::LiveSessions, true)
                .with(FeatureKey::CustomReporting, true)
                .with(FeatureKey::ApiAccess, true),
        },
        Preset {
            id: "finance-banking".to_string(),
            name: "Finance & Banking".to_string(),
            description: "Compliance-minded theme for regulated industries".to_string(),
            industry: Industry::Finance,
            branding: Branding {
                primary_color: "#065f46".to_string(),
                secondary_color: "#0f766e".to_string(),
                accent_color: "#ca8a04".to_string(),
                text_color: "#1c1917".to_string(),
                font_family: "Roboto, sans-serif".to_string(),
                heading_font: "Roboto, sans-serif".to_string(),
                button_style: ButtonStyle::Square,
                welcome_title: "Compliance & Certification Portal".to_string(),
                welcome_subtitle: "Stay current with required training".to_string(),
                login_message: "Authorized personnel only".to_string(),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::Gamification, false)
                .with(FeatureKey::Leaderboards, false)
                .with(FeatureKey::ProgressSharing, false)
                .with(FeatureKey::CustomReporting, true),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tenant::{CompanySize, CreateTenantRequest, SubscriptionTier};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn sample_tenant() -> Tenant {
        let request = CreateTenantRequest {
            name: "Acme Corp".to_string(),
            slug: None,
            industry: Industry::Retail,
            size: CompanySize::Large,
            subscription_tier: SubscriptionTier::Starter,
            admin_email: Some("admin@acme.com".to_string()),
            support_email: None,
        };
        let now = Utc.with_ymd_and_hms(2024, 11, 4, 9, 0, 0).unwrap();
        Tenant::from_create(&request, Uuid::nil(), "sales@portal.com", "Dana Field", now)
    }

    #[test]
    fn test_builtin_presets_are_well_formed() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 3);
        for preset in &presets {
            assert!(!preset.id.is_empty());
            assert!(preset.branding.has_valid_colors(), "preset {} has invalid colors", preset.id);
        }
    }

    #[test]
    fn test_apply_to_replaces_theme_wholesale() {
        let tenant = sample_tenant();
        let preset = &builtin_presets()[1];
        let seeded = preset.apply_to(&tenant);

        assert_eq!(seeded.industry, Industry::Technology);
        assert_eq!(seeded.branding, preset.branding);
        assert_eq!(seeded.features, preset.features);
        assert!(seeded.features.ai_assistant);
    }

    #[test]
    fn test_apply_to_keeps_identity_and_subscription() {
        let tenant = sample_tenant();
        let seeded = builtin_presets()[0].apply_to(&tenant);

        assert_eq!(seeded.id, tenant.id);
        assert_eq!(seeded.name, tenant.name);
        assert_eq!(seeded.slug, tenant.slug);
        assert_eq!(seeded.admin_email, tenant.admin_email);
        assert_eq!(seeded.support_email, tenant.support_email);
        assert_eq!(seeded.subscription_tier, tenant.subscription_tier);
        assert_eq!(seeded.subscription_status, tenant.subscription_status);
        assert_eq!(seeded.created_at, tenant.created_at);
    }

    #[test]
    fn test_apply_to_does_not_mutate_input() {
        let tenant = sample_tenant();
        let before = tenant.clone();
        let _ = builtin_presets()[2].apply_to(&tenant);
        assert_eq!(tenant, before);
    }

    #[test]
    fn test_preset_serialization_round_trip() {
        let preset = builtin_presets().remove(0);
        let json = serde_json::to_string(&preset).unwrap();
        let parsed: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, preset);
    }
}
