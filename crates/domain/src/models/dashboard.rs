//! Read-only aggregate models displayed on the sales dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Headline counters shown on the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    pub total_clients: u32,
    pub active_clients: u32,
    pub total_learners: u32,
    pub active_learners: u32,
    pub total_revenue: u64,
    pub monthly_revenue: u64,
    pub average_completion_rate: f64,
    pub average_nps: f64,
    pub new_clients_this_month: u32,
    pub renewals_this_month: u32,
}

/// Kind of event shown in the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Signup,
    Enrollment,
    Completion,
    Renewal,
    Payment,
    Support,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClientActivity {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_name: String,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Severity of a dashboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One entry in the notification dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub action_url: Option<String>,
}

/// Number of unread notifications (the badge counter).
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|notification| !notification.is_read).count()
}

/// Sales team roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesRole {
    SalesRep,
    SalesManager,
    Admin,
}

/// The signed-in sales person and their book of business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SalesPerson {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: SalesRole,
    pub territory: String,
    pub total_clients: u32,
    pub active_clients: u32,
    /// Quarter-to-date revenue in whole dollars.
    pub revenue: u64,
    /// Quarterly revenue target in whole dollars.
    pub target: u64,
    pub created_at: DateTime<Utc>,
}

impl SalesPerson {
    /// Progress towards the quarterly target, rounded to whole percent.
    /// Can exceed 100 when the target is beaten; a zero target reads as 0.
    pub fn target_progress_percent(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        ((self.revenue as f64 / self.target as f64) * 100.0).round() as u32
    }
}

/// Lifecycle state of a learner account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerStatus {
    Active,
    Inactive,
    Suspended,
}

/// One learner row in the client-details view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Learner {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub enrolled_courses: u32,
    pub completed_courses: u32,
    /// Overall progress, 0-100.
    pub progress: u8,
    pub last_active: DateTime<Utc>,
    pub status: LearnerStatus,
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// One course row in the catalog table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub vendor: String,
    pub category: String,
    pub level: CourseLevel,
    pub duration_hours: u32,
    pub enrollments: u32,
    /// Share of enrollments completed, 0-100.
    pub completion_rate: u8,
    /// Average rating out of 5.
    pub rating: f64,
    /// List price in whole dollars.
    pub price: u64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn notification(is_read: bool) -> Notification {
        Notification {
            id: Uuid::nil(),
            kind: NotificationKind::Info,
            title: "t".to_string(),
            message: "m".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 12, 10, 8, 0, 0).unwrap(),
            is_read,
            action_url: None,
        }
    }

    #[test]
    fn test_unread_count() {
        let notifications = vec![notification(false), notification(true), notification(false)];
        assert_eq!(unread_count(&notifications), 2);
        assert_eq!(unread_count(&[]), 0);
    }

    #[test]
    fn test_target_progress_percent() {
        let mut person = SalesPerson {
            id: Uuid::nil(),
            name: "Dana Field".to_string(),
            email: "dana@portal.com".to_string(),
            role: SalesRole::SalesRep,
            territory: "EMEA".to_string(),
            total_clients: 12,
            active_clients: 10,
            revenue: 750_000,
            target: 1_000_000,
            created_at: Utc.with_ymd_and_hms(2023, 2, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(person.target_progress_percent(), 75);

        person.revenue = 1_250_000;
        assert_eq!(person.target_progress_percent(), 125);

        person.target = 0;
        assert_eq!(person.target_progress_percent(), 0);
    }

    #[test]
    fn test_sales_role_serialization() {
        assert_eq!(serde_json::to_string(&SalesRole::SalesManager).unwrap(), "\"sales_manager\"");
    }

    #[test]
    fn test_activity_kind_rejects_unknown() {
        assert!(serde_json::from_str::<ActivityKind>("\"churn\"").is_err());
    }

    #[test]
    fn test_course_serialization() {
        let course = Course {
            id: Uuid::nil(),
            code: "AZ-104".to_string(),
            name: "Azure Administrator".to_string(),
            vendor: "Microsoft".to_string(),
            category: "Cloud".to_string(),
            level: CourseLevel::Intermediate,
            duration_hours: 32,
            enrollments: 420,
            completion_rate: 76,
            rating: 4.6,
            price: 1_800,
            is_active: true,
        };
        let json = serde_json::to_string(&course).unwrap();
        assert!(json.contains("\"level\":\"intermediate\""));
        assert!(json.contains("\"code\":\"AZ-104\""));
    }
}
