//! Report generation and scheduling against the demo catalog.

use chrono::{NaiveDate, TimeZone, Utc};
use domain::fixtures::{sample_report_history, sample_tenants};
use domain::models::report::{
    parse_recipient_list, DateRange, ReportFrequency, ReportType, ScheduleReportRequest,
    ScheduledReport,
};
use domain::services::directory::{filter_tenants, TenantQuery};
use domain::services::reports::{build_report_content, report_file_name};
use uuid::Uuid;
use validator::Validate;

#[test]
fn test_generate_report_for_catalog_tenant() {
    let tenants = sample_tenants();
    let query = TenantQuery {
        search: Some("sterling".to_string()),
        ..TenantQuery::default()
    };
    let tenant = filter_tenants(&tenants, &query)[0];

    let generated_at = Utc.with_ymd_and_hms(2024, 12, 10, 15, 0, 0).unwrap();
    let range = DateRange {
        start: NaiveDate::from_ymd_opt(2024, 11, 1),
        end: None,
    };
    let content = build_report_content(tenant, ReportType::Progress, &range, generated_at);

    assert!(content.starts_with("Sterling Advisory Partners - Progress Report\n"));
    assert!(content.contains("Period: 2024-11-01 to Present\n"));
    assert!(content.contains("Total Learners: 340\n"));
    assert!(content.contains("Active Enrollments: 512\n"));

    let file_name = report_file_name(
        &tenant.slug,
        ReportType::Progress,
        generated_at.date_naive(),
    );
    assert_eq!(file_name, "sterling-advisory-partners_Progress_Report_2024-12-10.txt");
}

#[test]
fn test_every_report_type_renders_for_every_tenant() {
    let generated_at = Utc.with_ymd_and_hms(2024, 12, 10, 15, 0, 0).unwrap();
    for tenant in sample_tenants() {
        for report_type in ReportType::ALL {
            let content =
                build_report_content(&tenant, report_type, &DateRange::default(), generated_at);
            assert!(content.starts_with(&tenant.name));
            assert!(content.contains(report_type.title()));
        }
    }
}

#[test]
fn test_schedule_lifecycle_from_form_input() {
    let recipients = parse_recipient_list("coordinator@company.com, manager@company.com");
    let request = ScheduleReportRequest {
        report_type: ReportType::Progress,
        frequency: ReportFrequency::Weekly,
        recipients,
    };
    assert!(request.validate().is_ok());

    let today = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap();
    let schedule = ScheduledReport::from_request(&request, Uuid::new_v4(), today);
    assert_eq!(schedule.next_scheduled, NaiveDate::from_ymd_opt(2024, 12, 16));
    assert!(schedule.is_active);

    let sent = schedule.marked_sent(NaiveDate::from_ymd_opt(2024, 12, 16).unwrap());
    assert_eq!(sent.last_sent, NaiveDate::from_ymd_opt(2024, 12, 16));
    assert_eq!(sent.next_scheduled, NaiveDate::from_ymd_opt(2024, 12, 23));

    let paused = sent.toggled_active();
    assert!(!paused.is_active);
    assert!(sent.is_active);
}

#[test]
fn test_empty_recipient_form_is_rejected() {
    let request = ScheduleReportRequest {
        report_type: ReportType::Engagement,
        frequency: ReportFrequency::Daily,
        recipients: parse_recipient_list("  , "),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_history_listing_matches_catalog() {
    let history = sample_report_history();
    assert_eq!(history[0].report_type, ReportType::Progress);
    assert_eq!(history[0].size_label, "245 KB");
    assert_eq!(history[1].format.label(), "Excel");
}
