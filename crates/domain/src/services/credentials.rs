//! Credential and portal URL derivation.
//!
//! Every function here is a deterministic pure function of its inputs; the
//! same tenant always yields the same bundle. The temporary password scheme
//! is a demo placeholder and guessable from the slug alone. It is NOT a
//! security mechanism; production credential issuance replaces it with
//! server-generated, hashed, single-use passwords.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::credentials::{Credential, CredentialBundle, Role};
use crate::models::tenant::Tenant;
use crate::services::{EXPORT_RULE, EXPORT_TIMESTAMP_FORMAT};

/// Builds the portal deep link for a role:
/// `{base_url}?company={slug}&role={role}`.
///
/// `base_url` comes from the caller's deployment configuration; the engine
/// performs no environment detection.
pub fn derive_portal_url(base_url: &str, slug: &str, role: Role) -> String {
    format!("{}?company={}&role={}", base_url, slug, role)
}

/// Derives the placeholder temporary password for a role:
/// role prefix + slug with its first character uppercased + `2024!`.
pub fn derive_temporary_password(slug: &str, role: Role) -> String {
    format!("{}{}2024!", password_prefix(role), capitalize_first(slug))
}

/// Derives the login email for a role. The admin account uses the tenant's
/// configured admin address when one is set; every other role gets a
/// synthetic `{role}@{slug}.com` placeholder address.
pub fn derive_login_email(slug: &str, role: Role, admin_email_override: Option<&str>) -> String {
    if role == Role::Admin {
        if let Some(email) = admin_email_override.filter(|email| !email.is_empty()) {
            return email.to_string();
        }
    }
    format!("{}@{}.com", role, slug)
}

/// Derives credentials for all three portal roles of a tenant.
///
/// Total for every input; a tenant with an empty slug yields syntactically
/// valid but meaningless values, so callers check
/// [`Tenant::has_portal_slug`] first.
pub fn build_credential_bundle(tenant: &Tenant, base_url: &str) -> CredentialBundle {
    debug!(slug = %tenant.slug, "deriving portal credential bundle");
    let admin_override = Some(tenant.admin_email.as_str());
    let credential = |role: Role| Credential {
        email: derive_login_email(&tenant.slug, role, admin_override),
        password: derive_temporary_password(&tenant.slug, role),
        portal_url: derive_portal_url(base_url, &tenant.slug, role),
    };
    CredentialBundle {
        admin: credential(Role::Admin),
        coordinator: credential(Role::Coordinator),
        learner: credential(Role::Learner),
    }
}

/// Renders the downloadable plain-text credential sheet covering all three
/// roles. `generated_at` is caller-supplied; the engine never reads the
/// clock.
pub fn render_credentials_export(
    tenant: &Tenant,
    bundle: &CredentialBundle,
    generated_at: DateTime<Utc>,
) -> String {
    let mut content = format!("{} - Portal Access Credentials\n", tenant.name);
    content.push_str(&format!(
        "Generated: {}\n",
        generated_at.format(EXPORT_TIMESTAMP_FORMAT)
    ));
    content.push_str(EXPORT_RULE);
    content.push_str("\n\n");

    for (role, credential) in bundle.iter() {
        content.push_str(&format!("{}\n", role.display_name()));
        content.push_str("-----------\n");
        content.push_str(&format!("Portal URL: {}\n", credential.portal_url));
        content.push_str(&format!("Email: {}\n", credential.email));
        content.push_str(&format!("Password: {}\n\n", credential.password));
    }

    content.push_str(
        "\nNote: Please share these credentials securely and ask users to change their passwords after first login.",
    );
    content
}

/// Renders the copy-to-clipboard block for a single role.
pub fn render_credentials_copy_block(tenant: &Tenant, role: Role, credential: &Credential) -> String {
    format!(
        "{} - {} Credentials\n{}\n\nPortal URL: {}\nEmail: {}\nPassword: {}\n\nNote: Please change your password after first login.",
        tenant.name,
        role.display_name(),
        EXPORT_RULE,
        credential.portal_url,
        credential.email,
        credential.password,
    )
}

/// File name used for the credential sheet download.
pub fn credentials_file_name(slug: &str) -> String {
    format!("{}-credentials.txt", slug)
}

fn password_prefix(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Coordinator => "Train",
        Role::Learner => "Learn",
    }
}

fn capitalize_first(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
