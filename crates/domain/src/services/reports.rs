//! Plain-text report rendering.
//!
//! Report content is keyed purely by report type and interpolates the
//! tenant's usage counters plus a fixed set of illustrative figures; no
//! aggregation over learner records happens here. Rendering is
//! deterministic: `generated_at` is caller-supplied.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::models::report::{DateRange, ReportType};
use crate::models::tenant::Tenant;
use crate::services::{EXPORT_RULE, EXPORT_TIMESTAMP_FORMAT};

/// Renders the downloadable text body for one report.
///
/// Total over all inputs: the custom type (and anything routed to it)
/// falls into a generic default branch rather than failing.
pub fn build_report_content(
    tenant: &Tenant,
    report_type: ReportType,
    date_range: &DateRange,
    generated_at: DateTime<Utc>,
) -> String {
    debug!(slug = %tenant.slug, report_type = %report_type, "rendering report content");

    let mut content = format!("{} - {}\n", tenant.name, report_type.title());
    content.push_str(&format!(
        "Generated: {}\n",
        generated_at.format(EXPORT_TIMESTAMP_FORMAT)
    ));
    content.push_str(&format!("Period: {}\n", date_range.period_label()));
    content.push_str(EXPORT_RULE);
    content.push_str("\n\n");

    match report_type {
        ReportType::Progress => {
            content.push_str("LEARNER PROGRESS SUMMARY\n");
            content.push_str("------------------------\n");
            content.push_str(&format!("Total Learners: {}\n", tenant.learner_count));
            content.push_str(&format!("Active Enrollments: {}\n", tenant.active_enrollments));
            content.push_str("Average Progress: 72%\n");
            content.push_str("Completion Rate: 68%\n\n");
            content.push_str("TOP PERFORMERS:\n");
            content.push_str("1. Alice Johnson - 95% complete\n");
            content.push_str("2. Bob Williams - 88% complete\n");
            content.push_str("3. Carol Davis - 85% complete\n");
        }
        ReportType::Completion => {
            content.push_str("COURSE COMPLETION SUMMARY\n");
            content.push_str("-------------------------\n");
            content.push_str("Courses Completed This Period: 45\n");
            content.push_str("Certificates Issued: 38\n");
            content.push_str("Average Time to Complete: 28 days\n\n");
            content.push_str("BY COURSE:\n");
            content.push_str("AZ-104: 18 completions (76% rate)\n");
            content.push_str("AZ-400: 12 completions (68% rate)\n");
            content.push_str("AWS SAA: 15 completions (71% rate)\n");
        }
        ReportType::Engagement => {
            content.push_str("ENGAGEMENT METRICS\n");
            content.push_str("------------------\n");
            content.push_str("Total Logins: 1,245\n");
            content.push_str("Avg Session Duration: 45 mins\n");
            content.push_str("Daily Active Users: 85\n");
            content.push_str("Weekly Active Users: 156\n\n");
            content.push_str("PEAK HOURS:\n");
            content.push_str("9 AM - 11 AM: High Activity\n");
            content.push_str("2 PM - 4 PM: Medium Activity\n");
        }
        ReportType::Assessment => {
            content.push_str("ASSESSMENT RESULTS\n");
            content.push_str("------------------\n");
            content.push_str("Quizzes Taken: 892\n");
            content.push_str("Average Score: 78%\n");
            content.push_str("Pass Rate: 82%\n\n");
            content.push_str("BY MODULE:\n");
            content.push_str("Identity & Governance: 82% avg\n");
            content.push_str("Storage Management: 76% avg\n");
            content.push_str("Virtual Networking: 74% avg\n");
        }
        ReportType::Custom => {
            content.push_str("Custom report data would be generated based on selected metrics.\n");
        }
    }

    content
}

/// File name used for a report download:
/// `{slug}_{Title_With_Underscores}_{YYYY-MM-DD}.txt`.
pub fn report_file_name(slug: &str, report_type: ReportType, on: NaiveDate) -> String {
    format!(
        "{}_{}_{}.txt",
        slug,
        report_type.title().replace(' ', "_"),
        on.format("%Y-%m-%d")
    )
}
