//! End-to-end provisioning flow: new-client form input through credential
//! derivation and the downloadable credential sheet.

use chrono::{TimeZone, Utc};
use domain::models::preset::builtin_presets;
use domain::models::tenant::{
    CompanySize, CreateTenantRequest, Industry, SubscriptionStatus, SubscriptionTier, Tenant,
};
use domain::models::Role;
use domain::services::credentials::{
    build_credential_bundle, credentials_file_name, render_credentials_export,
};
use uuid::Uuid;
use validator::Validate;

const BASE_URL: &str = "https://learn.portal.test";

fn new_client_request() -> CreateTenantRequest {
    CreateTenantRequest {
        name: "Acme & Co".to_string(),
        slug: None,
        industry: Industry::Manufacturing,
        size: CompanySize::Medium,
        subscription_tier: SubscriptionTier::Professional,
        admin_email: None,
        support_email: Some("support@acme.example".to_string()),
    }
}

#[test]
fn test_new_client_flow_derives_slug_and_credentials() {
    let request = new_client_request();
    assert!(request.validate().is_ok());
    assert_eq!(request.resolved_slug(), "acme-co");

    let now = Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap();
    let tenant = Tenant::from_create(&request, Uuid::new_v4(), "dana.field@portal.com", "Dana Field", now);
    assert_eq!(tenant.slug, "acme-co");
    assert_eq!(tenant.subscription_status, SubscriptionStatus::Trial);
    assert!(tenant.has_portal_slug());

    let bundle = build_credential_bundle(&tenant, BASE_URL);
    assert_eq!(bundle.admin.email, "admin@acme-co.com"); // no override configured
    assert!(bundle.admin.portal_url.ends_with("?company=acme-co&role=admin"));
    assert_eq!(bundle.admin.password, "AdminAcme-co2024!");
    assert_eq!(bundle.coordinator.password, "TrainAcme-co2024!");
    assert_eq!(bundle.learner.email, "learner@acme-co.com");
}

#[test]
fn test_bundle_is_bit_identical_across_calls() {
    let now = Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap();
    let tenant =
        Tenant::from_create(&new_client_request(), Uuid::nil(), "dana.field@portal.com", "Dana Field", now);

    let first = build_credential_bundle(&tenant, BASE_URL);
    let second = build_credential_bundle(&tenant, BASE_URL);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_preset_seeding_preserves_identity_through_provisioning() {
    let now = Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap();
    let tenant =
        Tenant::from_create(&new_client_request(), Uuid::new_v4(), "dana.field@portal.com", "Dana Field", now);

    let preset = builtin_presets()
        .into_iter()
        .find(|preset| preset.id == "tech-startup")
        .unwrap();
    let seeded = preset.apply_to(&tenant);

    assert_eq!(seeded.slug, "acme-co");
    assert_eq!(seeded.industry, Industry::Technology);
    assert!(seeded.features.ai_assistant);
    // Credentials are unaffected by theming.
    assert_eq!(
        build_credential_bundle(&seeded, BASE_URL),
        build_credential_bundle(&tenant, BASE_URL)
    );
}

#[test]
fn test_credential_sheet_download() {
    let now = Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap();
    let tenant =
        Tenant::from_create(&new_client_request(), Uuid::nil(), "dana.field@portal.com", "Dana Field", now);
    let bundle = build_credential_bundle(&tenant, BASE_URL);

    let sheet = render_credentials_export(&tenant, &bundle, now);
    assert!(sheet.starts_with("Acme & Co - Portal Access Credentials\n"));
    for role in Role::ALL {
        assert!(sheet.contains(role.display_name()));
        assert!(sheet.contains(&bundle.get(role).email));
    }
    assert_eq!(credentials_file_name(&tenant.slug), "acme-co-credentials.txt");
}
