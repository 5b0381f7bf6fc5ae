//! Built-in demo catalog backing the dashboard.
//!
//! Everything the portal displays comes from this static in-memory data:
//! there is no persistence layer behind it. Values are fixed (ids and
//! timestamps included) so derived artifacts stay stable across calls.

use chrono::{TimeZone, Utc};
use uuid::{uuid, Uuid};

use crate::models::branding::{Branding, ButtonStyle, CardStyle};
use crate::models::dashboard::{
    ActivityKind, ClientActivity, Course, CourseLevel, DashboardStats, Learner, LearnerStatus,
    Notification, NotificationKind, SalesPerson, SalesRole,
};
use crate::models::features::{FeatureKey, Features};
use crate::models::report::{ReportFormat, ReportHistoryEntry, ReportType};
use crate::models::tenant::{
    CompanySize, Industry, SubscriptionStatus, SubscriptionTier, Tenant,
};

const STERLING_ID: Uuid = uuid!("6f1f6f60-6c1a-4b8e-9a6e-0d1b6a8c2a01");
const TECHNOVA_ID: Uuid = uuid!("6f1f6f60-6c1a-4b8e-9a6e-0d1b6a8c2a02");
const MERIDIAN_ID: Uuid = uuid!("6f1f6f60-6c1a-4b8e-9a6e-0d1b6a8c2a03");

/// The signed-in sales person.
pub fn current_sales_person() -> SalesPerson {
    SalesPerson {
        id: uuid!("b3a4b1de-2e7c-4c27-8f21-5a9c0d6e4f10"),
        name: "Dana Field".to_string(),
        email: "dana.field@portal.com".to_string(),
        role: SalesRole::SalesRep,
        territory: "EMEA".to_string(),
        total_clients: 12,
        active_clients: 10,
        revenue: 750_000,
        target: 1_000_000,
        created_at: Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap(),
    }
}

/// The demo client portfolio.
pub fn sample_tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            id: STERLING_ID,
            name: "Sterling Advisory Partners".to_string(),
            slug: "sterling-advisory-partners".to_string(),
            industry: Industry::Consulting,
            size: CompanySize::Large,
            admin_email: "l.chen@sterlingadvisory.com".to_string(),
            support_email: "support@sterlingadvisory.com".to_string(),
            subscription_tier: SubscriptionTier::Professional,
            subscription_status: SubscriptionStatus::Active,
            trial_ends_at: None,
            learner_count: 340,
            active_enrollments: 512,
            created_at: Utc.with_ymd_and_hms(2024, 3, 18, 11, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 11, 28, 16, 30, 0).unwrap(),
            created_by: "dana.field@portal.com".to_string(),
            sales_person: "Dana Field".to_string(),
            branding: Branding {
                primary_color: "#1e3a8a".to_string(),
                secondary_color: "#475569".to_string(),
                accent_color: "#b45309".to_string(),
                heading_font: "Merriweather, serif".to_string(),
                card_style: CardStyle::Bordered,
                welcome_title: "Sterling Learning Center".to_string(),
                welcome_subtitle: "Professional development for your practice".to_string(),
                help_url: Some("https://sterlingadvisory.com/help".to_string()),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::Gamification, false)
                .with(FeatureKey::Leaderboards, false),
        },
        Tenant {
            id: TECHNOVA_ID,
            name: "TechNova Labs".to_string(),
            slug: "technova-labs".to_string(),
            industry: Industry::Technology,
            size: CompanySize::Startup,
            admin_email: String::new(),
            support_email: "hello@technova.io".to_string(),
            subscription_tier: SubscriptionTier::Starter,
            subscription_status: SubscriptionStatus::Trial,
            trial_ends_at: Some(Utc.with_ymd_and_hms(2024, 12, 20, 0, 0, 0).unwrap()),
            learner_count: 48,
            active_enrollments: 96,
            created_at: Utc.with_ymd_and_hms(2024, 11, 20, 14, 15, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 11, 20, 14, 15, 0).unwrap(),
            created_by: "dana.field@portal.com".to_string(),
            sales_person: "Dana Field".to_string(),
            branding: Branding {
                primary_color: "#7c3aed".to_string(),
                accent_color: "#f43f5e".to_string(),
                heading_font: "Poppins, sans-serif".to_string(),
                button_style: ButtonStyle::Pill,
                card_style: CardStyle::Flat,
                welcome_title: "Level Up Your Skills".to_string(),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::AiAssistant, true)
                .with(FeatureKey::LiveSessions, true),
        },
        Tenant {
            id: MERIDIAN_ID,
            name: "Meridian Health Group".to_string(),
            slug: "meridian-health-group".to_string(),
            industry: Industry::Healthcare,
            size: CompanySize::Enterprise,
            admin_email: "training@meridianhealth.org".to_string(),
            support_email: "it-support@meridianhealth.org".to_string(),
            subscription_tier: SubscriptionTier::Enterprise,
            subscription_status: SubscriptionStatus::Active,
            trial_ends_at: None,
            learner_count: 1_240,
            active_enrollments: 2_180,
            created_at: Utc.with_ymd_and_hms(2023, 9, 5, 8, 45, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 12, 2, 10, 0, 0).unwrap(),
            created_by: "m.ortiz@portal.com".to_string(),
            sales_person: "Miguel Ortiz".to_string(),
            branding: Branding {
                primary_color: "#0f766e".to_string(),
                secondary_color: "#14b8a6".to_string(),
                text_color: "#134e4a".to_string(),
                welcome_title: "Meridian Clinical Training".to_string(),
                welcome_subtitle: "Stay current with required certifications".to_string(),
                privacy_url: Some("https://meridianhealth.org/privacy".to_string()),
                terms_url: Some("https://meridianhealth.org/terms".to_string()),
                ..Branding::default()
            },
            features: Features::default()
                .with(FeatureKey::CustomReporting, true)
                .with(FeatureKey::ApiAccess, true)
                .with(FeatureKey::ProgressSharing, false),
        },
    ]
}

/// Headline counters for the overview tab.
pub fn sample_dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_clients: 24,
        active_clients: 21,
        total_learners: 6_840,
        active_learners: 5_120,
        total_revenue: 2_450_000,
        monthly_revenue: 186_000,
        average_completion_rate: 71.5,
        average_nps: 62.0,
        new_clients_this_month: 3,
        renewals_this_month: 5,
    }
}

/// The recent-activity feed.
pub fn sample_activity() -> Vec<ClientActivity> {
    vec![
        ClientActivity {
            id: uuid!("4dd0a3f2-9a3e-4f61-bb0a-7c1d2e3f4a01"),
            company_id: TECHNOVA_ID,
            company_name: "TechNova Labs".to_string(),
            kind: ActivityKind::Signup,
            description: "Started a 30-day trial on the Starter tier".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 10, 9, 12, 0).unwrap(),
        },
        ClientActivity {
            id: uuid!("4dd0a3f2-9a3e-4f61-bb0a-7c1d2e3f4a02"),
            company_id: MERIDIAN_ID,
            company_name: "Meridian Health Group".to_string(),
            kind: ActivityKind::Enrollment,
            description: "Enrolled 85 learners in AZ-104".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 9, 16, 40, 0).unwrap(),
        },
        ClientActivity {
            id: uuid!("4dd0a3f2-9a3e-4f61-bb0a-7c1d2e3f4a03"),
            company_id: STERLING_ID,
            company_name: "Sterling Advisory Partners".to_string(),
            kind: ActivityKind::Completion,
            description: "28 learners completed PMP certification prep".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 9, 11, 5, 0).unwrap(),
        },
        ClientActivity {
            id: uuid!("4dd0a3f2-9a3e-4f61-bb0a-7c1d2e3f4a04"),
            company_id: STERLING_ID,
            company_name: "Sterling Advisory Partners".to_string(),
            kind: ActivityKind::Payment,
            description: "Monthly invoice paid ($1,500)".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 8, 7, 55, 0).unwrap(),
        },
        ClientActivity {
            id: uuid!("4dd0a3f2-9a3e-4f61-bb0a-7c1d2e3f4a05"),
            company_id: MERIDIAN_ID,
            company_name: "Meridian Health Group".to_string(),
            kind: ActivityKind::Support,
            description: "Opened a ticket about SSO configuration".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 6, 13, 20, 0).unwrap(),
        },
    ]
}

/// The notification dropdown contents.
pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: uuid!("9e8b7a6c-5d4e-4f3a-8b2c-1d0e9f8a7b01"),
            kind: NotificationKind::Warning,
            title: "Trial ending soon".to_string(),
            message: "TechNova Labs trial ends in 10 days".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 10, 8, 0, 0).unwrap(),
            is_read: false,
            action_url: Some("/clients/technova-labs".to_string()),
        },
        Notification {
            id: uuid!("9e8b7a6c-5d4e-4f3a-8b2c-1d0e9f8a7b02"),
            kind: NotificationKind::Success,
            title: "Renewal signed".to_string(),
            message: "Sterling Advisory Partners renewed for 12 months".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 9, 17, 25, 0).unwrap(),
            is_read: false,
            action_url: None,
        },
        Notification {
            id: uuid!("9e8b7a6c-5d4e-4f3a-8b2c-1d0e9f8a7b03"),
            kind: NotificationKind::Info,
            title: "Report delivered".to_string(),
            message: "Weekly progress report sent to Meridian Health Group".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 9, 6, 0, 0).unwrap(),
            is_read: true,
            action_url: None,
        },
        Notification {
            id: uuid!("9e8b7a6c-5d4e-4f3a-8b2c-1d0e9f8a7b04"),
            kind: NotificationKind::Error,
            title: "Credential email bounced".to_string(),
            message: "Delivery to training@meridianhealth.org failed".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 7, 19, 45, 0).unwrap(),
            is_read: true,
            action_url: Some("/clients/meridian-health-group/credentials".to_string()),
        },
    ]
}

/// The course catalog table.
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: uuid!("2c1b0a9f-8e7d-4c6b-a5a4-3f2e1d0c9b01"),
            code: "AZ-104".to_string(),
            name: "Azure Administrator".to_string(),
            vendor: "Microsoft".to_string(),
            category: "Cloud".to_string(),
            level: CourseLevel::Intermediate,
            duration_hours: 32,
            enrollments: 1_420,
            completion_rate: 76,
            rating: 4.6,
            price: 1_800,
            is_active: true,
        },
        Course {
            id: uuid!("2c1b0a9f-8e7d-4c6b-a5a4-3f2e1d0c9b02"),
            code: "AZ-400".to_string(),
            name: "DevOps Engineer Expert".to_string(),
            vendor: "Microsoft".to_string(),
            category: "Cloud".to_string(),
            level: CourseLevel::Advanced,
            duration_hours: 40,
            enrollments: 860,
            completion_rate: 68,
            rating: 4.4,
            price: 2_200,
            is_active: true,
        },
        Course {
            id: uuid!("2c1b0a9f-8e7d-4c6b-a5a4-3f2e1d0c9b03"),
            code: "SAA-C03".to_string(),
            name: "AWS Solutions Architect Associate".to_string(),
            vendor: "Amazon".to_string(),
            category: "Cloud".to_string(),
            level: CourseLevel::Intermediate,
            duration_hours: 36,
            enrollments: 1_180,
            completion_rate: 71,
            rating: 4.7,
            price: 1_950,
            is_active: true,
        },
        Course {
            id: uuid!("2c1b0a9f-8e7d-4c6b-a5a4-3f2e1d0c9b04"),
            code: "PMP".to_string(),
            name: "Project Management Professional".to_string(),
            vendor: "PMI".to_string(),
            category: "Project Management".to_string(),
            level: CourseLevel::Advanced,
            duration_hours: 35,
            enrollments: 640,
            completion_rate: 81,
            rating: 4.5,
            price: 2_500,
            is_active: true,
        },
        Course {
            id: uuid!("2c1b0a9f-8e7d-4c6b-a5a4-3f2e1d0c9b05"),
            code: "CISSP".to_string(),
            name: "Certified Information Systems Security Professional".to_string(),
            vendor: "ISC2".to_string(),
            category: "Security".to_string(),
            level: CourseLevel::Expert,
            duration_hours: 48,
            enrollments: 390,
            completion_rate: 58,
            rating: 4.8,
            price: 3_100,
            is_active: false,
        },
    ]
}

/// Learner roster shown in the client-details view (Sterling Advisory).
pub fn sample_learners() -> Vec<Learner> {
    vec![
        Learner {
            id: uuid!("7a6b5c4d-3e2f-4a1b-9c8d-0e1f2a3b4c01"),
            company_id: STERLING_ID,
            name: "Alice Johnson".to_string(),
            email: "alice.johnson@sterlingadvisory.com".to_string(),
            department: Some("Audit".to_string()),
            enrolled_courses: 4,
            completed_courses: 3,
            progress: 95,
            last_active: Utc.with_ymd_and_hms(2024, 12, 10, 8, 30, 0).unwrap(),
            status: LearnerStatus::Active,
        },
        Learner {
            id: uuid!("7a6b5c4d-3e2f-4a1b-9c8d-0e1f2a3b4c02"),
            company_id: STERLING_ID,
            name: "Bob Williams".to_string(),
            email: "bob.williams@sterlingadvisory.com".to_string(),
            department: Some("Tax".to_string()),
            enrolled_courses: 3,
            completed_courses: 2,
            progress: 88,
            last_active: Utc.with_ymd_and_hms(2024, 12, 9, 18, 10, 0).unwrap(),
            status: LearnerStatus::Active,
        },
        Learner {
            id: uuid!("7a6b5c4d-3e2f-4a1b-9c8d-0e1f2a3b4c03"),
            company_id: STERLING_ID,
            name: "Carol Davis".to_string(),
            email: "carol.davis@sterlingadvisory.com".to_string(),
            department: None,
            enrolled_courses: 2,
            completed_courses: 1,
            progress: 85,
            last_active: Utc.with_ymd_and_hms(2024, 11, 30, 12, 0, 0).unwrap(),
            status: LearnerStatus::Inactive,
        },
    ]
}

/// The report-history tab listing.
pub fn sample_report_history() -> Vec<ReportHistoryEntry> {
    let on = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap();
    vec![
        ReportHistoryEntry {
            report_type: ReportType::Progress,
            generated_on: on(2024, 12, 10),
            format: ReportFormat::Pdf,
            size_label: "245 KB".to_string(),
        },
        ReportHistoryEntry {
            report_type: ReportType::Completion,
            generated_on: on(2024, 12, 9),
            format: ReportFormat::Excel,
            size_label: "128 KB".to_string(),
        },
        ReportHistoryEntry {
            report_type: ReportType::Engagement,
            generated_on: on(2024, 12, 8),
            format: ReportFormat::Pdf,
            size_label: "312 KB".to_string(),
        },
        ReportHistoryEntry {
            report_type: ReportType::Assessment,
            generated_on: on(2024, 12, 5),
            format: ReportFormat::Csv,
            size_label: "89 KB".to_string(),
        },
        ReportHistoryEntry {
            report_type: ReportType::Progress,
            generated_on: on(2024, 12, 1),
            format: ReportFormat::Pdf,
            size_label: "198 KB".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::unread_count;
    use shared::slug::normalize_slug;

    #[test]
    fn test_sample_tenant_slugs_are_normalized_names() {
        for tenant in sample_tenants() {
            assert_eq!(tenant.slug, normalize_slug(&tenant.name));
            assert!(tenant.has_portal_slug());
        }
    }

    #[test]
    fn test_sample_tenant_branding_is_valid() {
        for tenant in sample_tenants() {
            assert!(tenant.branding.has_valid_colors(), "{} has invalid colors", tenant.slug);
        }
    }

    #[test]
    fn test_trial_tenant_has_expiry() {
        let tenants = sample_tenants();
        for tenant in &tenants {
            if tenant.subscription_status == SubscriptionStatus::Trial {
                assert!(tenant.trial_ends_at.is_some(), "{} trial has no expiry", tenant.slug);
            }
        }
        assert!(tenants
            .iter()
            .any(|tenant| tenant.subscription_status == SubscriptionStatus::Trial));
    }

    #[test]
    fn test_dashboard_stats_are_consistent() {
        let stats = sample_dashboard_stats();
        assert!(stats.active_clients <= stats.total_clients);
        assert!(stats.active_learners <= stats.total_learners);
        assert!(stats.monthly_revenue <= stats.total_revenue);
    }

    #[test]
    fn test_activity_references_known_tenants() {
        let ids: Vec<Uuid> = sample_tenants().iter().map(|tenant| tenant.id).collect();
        for activity in sample_activity() {
            assert!(ids.contains(&activity.company_id));
        }
    }

    #[test]
    fn test_notifications_have_unread_entries() {
        assert_eq!(unread_count(&sample_notifications()), 2);
    }

    #[test]
    fn test_learners_belong_to_sterling() {
        for learner in sample_learners() {
            assert_eq!(learner.company_id, STERLING_ID);
            assert!(learner.completed_courses <= learner.enrolled_courses);
            assert!(learner.progress <= 100);
        }
    }

    #[test]
    fn test_report_history_is_reverse_chronological() {
        let history = sample_report_history();
        assert_eq!(history.len(), 5);
        for window in history.windows(2) {
            assert!(window[0].generated_on >= window[1].generated_on);
        }
    }

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(sample_tenants(), sample_tenants());
        assert_eq!(sample_dashboard_stats(), sample_dashboard_stats());
        assert_eq!(sample_report_history(), sample_report_history());
    }
}
