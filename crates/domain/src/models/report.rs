//! Report types, schedules, and history entries.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// The kinds of usage reports a tenant can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Progress,
    Completion,
    Engagement,
    Assessment,
    Custom,
}

impl ReportType {
    /// All report types, in picker display order.
    pub const ALL: [ReportType; 5] = [
        ReportType::Progress,
        ReportType::Completion,
        ReportType::Engagement,
        ReportType::Assessment,
        ReportType::Custom,
    ];

    /// Display title used in headers and file names.
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Progress => "Progress Report",
            ReportType::Completion => "Completion Report",
            ReportType::Engagement => "Engagement Report",
            ReportType::Assessment => "Assessment Report",
            ReportType::Custom => "Custom Report",
        }
    }

    /// One-line description shown on the report picker card.
    pub fn summary(&self) -> &'static str {
        match self {
            ReportType::Progress => "Learner progress and completion status",
            ReportType::Completion => "Course and module completions",
            ReportType::Engagement => "Time spent, login frequency, activity",
            ReportType::Assessment => "Quiz scores and performance",
            ReportType::Custom => "Build your own report with selected metrics",
        }
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "progress" => Ok(ReportType::Progress),
            "completion" => Ok(ReportType::Completion),
            "engagement" => Ok(ReportType::Engagement),
            "assessment" => Ok(ReportType::Assessment),
            "custom" => Ok(ReportType::Custom),
            _ => Err(format!("Unknown report type: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Progress => write!(f, "progress"),
            ReportType::Completion => write!(f, "completion"),
            ReportType::Engagement => write!(f, "engagement"),
            ReportType::Assessment => write!(f, "assessment"),
            ReportType::Custom => write!(f, "custom"),
        }
    }
}

/// How often a scheduled report is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    Once,
    Daily,
    Weekly,
    Monthly,
}

impl ReportFrequency {
    /// The next delivery date after `from`, or `None` for one-shot
    /// reports. Monthly schedules use calendar-aware month addition.
    pub fn next_occurrence(&self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            ReportFrequency::Once => None,
            ReportFrequency::Daily => from.checked_add_days(Days::new(1)),
            ReportFrequency::Weekly => from.checked_add_days(Days::new(7)),
            ReportFrequency::Monthly => from.checked_add_months(Months::new(1)),
        }
    }
}

impl FromStr for ReportFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "once" => Ok(ReportFrequency::Once),
            "daily" => Ok(ReportFrequency::Daily),
            "weekly" => Ok(ReportFrequency::Weekly),
            "monthly" => Ok(ReportFrequency::Monthly),
            _ => Err(format!("Unknown report frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFrequency::Once => write!(f, "once"),
            ReportFrequency::Daily => write!(f, "daily"),
            ReportFrequency::Weekly => write!(f, "weekly"),
            ReportFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

/// Export format selected for a report download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    /// Display label on the format picker.
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
            ReportFormat::Csv => "CSV",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "excel" => Ok(ReportFormat::Excel),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Excel => write!(f, "excel"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Reporting period with optional open ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Human-readable period line: open ends render as "All time" and
    /// "Present".
    pub fn period_label(&self) -> String {
        let start = self
            .start
            .map(|date| date.to_string())
            .unwrap_or_else(|| "All time".to_string());
        let end = self
            .end
            .map(|date| date.to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} to {}", start, end)
    }
}

/// A recurring report delivery configured for a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduledReport {
    pub id: Uuid,
    pub report_type: ReportType,
    pub frequency: ReportFrequency,
    pub recipients: Vec<String>,
    pub last_sent: Option<NaiveDate>,
    pub next_scheduled: Option<NaiveDate>,
    pub is_active: bool,
}

impl ScheduledReport {
    /// Builds a schedule from a validated request. `scheduled_from` is the
    /// caller's current date; the first delivery is computed from it.
    pub fn from_request(request: &ScheduleReportRequest, id: Uuid, scheduled_from: NaiveDate) -> Self {
        Self {
            id,
            report_type: request.report_type,
            frequency: request.frequency,
            recipients: request.recipients.clone(),
            last_sent: None,
            next_scheduled: request.frequency.next_occurrence(scheduled_from),
            is_active: true,
        }
    }

    /// Returns a copy with the active flag flipped (pause/resume).
    pub fn toggled_active(&self) -> Self {
        Self {
            is_active: !self.is_active,
            ..self.clone()
        }
    }

    /// Returns a copy recording a delivery on `sent_on`, with the next
    /// delivery recomputed from that date.
    pub fn marked_sent(&self, sent_on: NaiveDate) -> Self {
        Self {
            last_sent: Some(sent_on),
            next_scheduled: self.frequency.next_occurrence(sent_on),
            ..self.clone()
        }
    }
}

/// Request to schedule a recurring report.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleReportRequest {
    pub report_type: ReportType,
    pub frequency: ReportFrequency,
    #[validate(length(min = 1, message = "At least one recipient is required"))]
    pub recipients: Vec<String>,
}

/// Splits a comma-separated recipient field into trimmed, non-empty
/// addresses.
pub fn parse_recipient_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|recipient| !recipient.is_empty())
        .map(String::from)
        .collect()
}

/// One row of the generated-report history listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportHistoryEntry {
    pub report_type: ReportType,
    pub generated_on: NaiveDate,
    pub format: ReportFormat,
    pub size_label: String,
}
