//! Tenant (client company) domain models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use shared::slug::normalize_slug;
use shared::validation::validate_slug_format;

use crate::models::branding::Branding;
use crate::models::features::Features;

/// Default trial length granted to newly provisioned tenants.
const TRIAL_PERIOD_DAYS: i64 = 30;

/// Industries a client company can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Consulting,
    Finance,
    Technology,
    Healthcare,
    Manufacturing,
    Retail,
    Education,
    Government,
    Other,
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consulting" => Ok(Industry::Consulting),
            "finance" => Ok(Industry::Finance),
            "technology" => Ok(Industry::Technology),
            "healthcare" => Ok(Industry::Healthcare),
            "manufacturing" => Ok(Industry::Manufacturing),
            "retail" => Ok(Industry::Retail),
            "education" => Ok(Industry::Education),
            "government" => Ok(Industry::Government),
            "other" => Ok(Industry::Other),
            _ => Err(format!("Unknown industry: {}", s)),
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Industry::Consulting => write!(f, "consulting"),
            Industry::Finance => write!(f, "finance"),
            Industry::Technology => write!(f, "technology"),
            Industry::Healthcare => write!(f, "healthcare"),
            Industry::Manufacturing => write!(f, "manufacturing"),
            Industry::Retail => write!(f, "retail"),
            Industry::Education => write!(f, "education"),
            Industry::Government => write!(f, "government"),
            Industry::Other => write!(f, "other"),
        }
    }
}

/// Headcount bands a client company is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    /// Display label with the headcount band, as shown in the size picker.
    pub fn headcount_label(&self) -> &'static str {
        match self {
            CompanySize::Startup => "Startup (1-50)",
            CompanySize::Small => "Small (51-200)",
            CompanySize::Medium => "Medium (201-1000)",
            CompanySize::Large => "Large (1001-5000)",
            CompanySize::Enterprise => "Enterprise (5000+)",
        }
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "startup" => Ok(CompanySize::Startup),
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            "enterprise" => Ok(CompanySize::Enterprise),
            _ => Err(format!("Unknown company size: {}", s)),
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanySize::Startup => write!(f, "startup"),
            CompanySize::Small => write!(f, "small"),
            CompanySize::Medium => write!(f, "medium"),
            CompanySize::Large => write!(f, "large"),
            CompanySize::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// Subscription tiers available to tenants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Starter,
    Professional,
    Enterprise,
}

impl SubscriptionTier {
    /// Feature allowance shown on the tier picker card.
    pub fn feature_allowance(&self) -> &'static str {
        match self {
            SubscriptionTier::Starter => "10 features",
            SubscriptionTier::Professional => "15 features",
            SubscriptionTier::Enterprise => "All features",
        }
    }

    /// Monthly price label shown on the tier picker card.
    pub fn monthly_price_label(&self) -> &'static str {
        match self {
            SubscriptionTier::Starter => "$500/mo",
            SubscriptionTier::Professional => "$1,500/mo",
            SubscriptionTier::Enterprise => "Custom",
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starter" => Ok(SubscriptionTier::Starter),
            "professional" => Ok(SubscriptionTier::Professional),
            "enterprise" => Ok(SubscriptionTier::Enterprise),
            _ => Err(format!("Unknown subscription tier: {}", s)),
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionTier::Starter => write!(f, "starter"),
            SubscriptionTier::Professional => write!(f, "professional"),
            SubscriptionTier::Enterprise => write!(f, "enterprise"),
        }
    }
}

/// Lifecycle state of a tenant's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    Expired,
    Cancelled,
}

impl FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(SubscriptionStatus::Active),
            "trial" => Ok(SubscriptionStatus::Trial),
            "expired" => Ok(SubscriptionStatus::Expired),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            _ => Err(format!("Unknown subscription status: {}", s)),
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Trial => write!(f, "trial"),
            SubscriptionStatus::Expired => write!(f, "expired"),
            SubscriptionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Tenant domain model: one client organization with its own branding and
/// enabled-feature configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier derived from `name` unless explicitly overridden.
    /// Non-empty whenever `name` is non-empty.
    pub slug: String,
    pub industry: Industry,
    pub size: CompanySize,
    pub admin_email: String,
    pub support_email: String,
    pub subscription_tier: SubscriptionTier,
    pub subscription_status: SubscriptionStatus,
    pub trial_ends_at: Option<DateTime<Utc>>,
    /// Usage counters supplied by the learning platform; read-only here.
    pub learner_count: u32,
    pub active_enrollments: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub sales_person: String,
    pub branding: Branding,
    pub features: Features,
}

impl Tenant {
    /// Assembles a tenant from a validated create request.
    ///
    /// The caller supplies identity and the current time; new tenants start
    /// on a trial with default branding and features.
    pub fn from_create(
        request: &CreateTenantRequest,
        id: Uuid,
        created_by: &str,
        sales_person: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: request.name.clone(),
            slug: request.resolved_slug(),
            industry: request.industry,
            size: request.size,
            admin_email: request.admin_email.clone().unwrap_or_default(),
            support_email: request.support_email.clone().unwrap_or_default(),
            subscription_tier: request.subscription_tier,
            subscription_status: SubscriptionStatus::Trial,
            trial_ends_at: Some(now + Duration::days(TRIAL_PERIOD_DAYS)),
            learner_count: 0,
            active_enrollments: 0,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
            sales_person: sales_person.to_string(),
            branding: Branding::default(),
            features: Features::default(),
        }
    }

    /// Whether the slug is usable for portal URL and credential derivation.
    /// Empty slugs produce well-defined but meaningless derived values.
    pub fn has_portal_slug(&self) -> bool {
        !self.slug.is_empty()
    }

    /// Applies an update request as a whole-unit save (last write wins) and
    /// returns the new tenant value. The slug is kept stable unless the
    /// request overrides it explicitly.
    pub fn apply_update(&self, request: &UpdateTenantRequest, now: DateTime<Utc>) -> Self {
        let mut updated = self.clone();
        if let Some(name) = &request.name {
            updated.name = name.clone();
        }
        if let Some(slug) = &request.slug {
            updated.slug = slug.clone();
        }
        if let Some(industry) = request.industry {
            updated.industry = industry;
        }
        if let Some(size) = request.size {
            updated.size = size;
        }
        if let Some(admin_email) = &request.admin_email {
            updated.admin_email = admin_email.clone();
        }
        if let Some(support_email) = &request.support_email {
            updated.support_email = support_email.clone();
        }
        if let Some(tier) = request.subscription_tier {
            updated.subscription_tier = tier;
        }
        if let Some(branding) = &request.branding {
            updated.branding = branding.clone();
        }
        if let Some(features) = request.features {
            updated.features = features;
        }
        updated.updated_at = now;
        updated
    }
}

/// Request to provision a new tenant portal.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTenantRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: String,
    /// Explicit slug override; when absent the slug is derived from `name`.
    #[validate(length(min = 1, max = 50, message = "Slug must be 1-50 characters"))]
    #[validate(custom(function = "validate_slug_format"))]
    pub slug: Option<String>,
    pub industry: Industry,
    pub size: CompanySize,
    pub subscription_tier: SubscriptionTier,
    #[validate(email(message = "Invalid admin email format"))]
    pub admin_email: Option<String>,
    #[validate(email(message = "Invalid support email format"))]
    pub support_email: Option<String>,
}

impl CreateTenantRequest {
    /// The slug the tenant will be provisioned under: the explicit override
    /// when present and non-empty, otherwise the normalized company name.
    pub fn resolved_slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.is_empty() => slug.clone(),
            _ => normalize_slug(&self.name),
        }
    }
}

/// Request to update an existing tenant. Absent fields keep their values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTenantRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Slug must be 1-50 characters"))]
    #[validate(custom(function = "validate_slug_format"))]
    pub slug: Option<String>,
    pub industry: Option<Industry>,
    pub size: Option<CompanySize>,
    #[validate(email(message = "Invalid admin email format"))]
    pub admin_email: Option<String>,
    #[validate(email(message = "Invalid support email format"))]
    pub support_email: Option<String>,
    pub subscription_tier: Option<SubscriptionTier>,
    pub branding: Option<Branding>,
    pub features: Option<Features>,
}
