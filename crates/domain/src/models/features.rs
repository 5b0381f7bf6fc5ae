//! Feature toggles available to a tenant portal.
//!
//! The toggle set is closed: `FEATURE_CATALOG` is the single source of
//! truth for which features exist, their display copy, and their grouping.
//! Toggles are independent; no cross-feature constraints are enforced.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of feature toggle keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    CourseContent,
    Quizzes,
    Qubits,
    Certificates,
    AiAssistant,
    StudyGroups,
    Forum,
    LiveSessions,
    Analytics,
    Gamification,
    Flashcards,
    MindMaps,
    FocusMode,
    Calendar,
    ExamSimulator,
    WeakAreaDrills,
    ProgressSharing,
    Leaderboards,
    CustomReporting,
    ApiAccess,
}

impl FromStr for FeatureKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course_content" => Ok(FeatureKey::CourseContent),
            "quizzes" => Ok(FeatureKey::Quizzes),
            "qubits" => Ok(FeatureKey::Qubits),
            "certificates" => Ok(FeatureKey::Certificates),
            "ai_assistant" => Ok(FeatureKey::AiAssistant),
            "study_groups" => Ok(FeatureKey::StudyGroups),
            "forum" => Ok(FeatureKey::Forum),
            "live_sessions" => Ok(FeatureKey::LiveSessions),
            "analytics" => Ok(FeatureKey::Analytics),
            "gamification" => Ok(FeatureKey::Gamification),
            "flashcards" => Ok(FeatureKey::Flashcards),
            "mind_maps" => Ok(FeatureKey::MindMaps),
            "focus_mode" => Ok(FeatureKey::FocusMode),
            "calendar" => Ok(FeatureKey::Calendar),
            "exam_simulator" => Ok(FeatureKey::ExamSimulator),
            "weak_area_drills" => Ok(FeatureKey::WeakAreaDrills),
            "progress_sharing" => Ok(FeatureKey::ProgressSharing),
            "leaderboards" => Ok(FeatureKey::Leaderboards),
            "custom_reporting" => Ok(FeatureKey::CustomReporting),
            "api_access" => Ok(FeatureKey::ApiAccess),
            _ => Err(format!("Unknown feature key: {}", s)),
        }
    }
}

/// Display grouping for the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    Core,
    LearningTools,
    ExamPrep,
    Social,
    Advanced,
}

impl FeatureGroup {
    /// Section heading used above each group of toggles.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureGroup::Core => "Core Features",
            FeatureGroup::LearningTools => "Learning Tools",
            FeatureGroup::ExamPrep => "Exam Preparation",
            FeatureGroup::Social => "Social & Gamification",
            FeatureGroup::Advanced => "Advanced Features",
        }
    }
}

/// Static metadata for one feature toggle.
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfo {
    pub key: FeatureKey,
    pub label: &'static str,
    pub description: &'static str,
    pub group: FeatureGroup,
}

/// Ordered catalog of every feature toggle, grouped for display. Consumers
/// iterate this table instead of reflecting over the `Features` struct.
pub const FEATURE_CATALOG: [FeatureInfo; 20] = [
    FeatureInfo {
        key: FeatureKey::CourseContent,
        label: "Course Content",
        description: "Video lessons and articles",
        group: FeatureGroup::Core,
    },
    FeatureInfo {
        key: FeatureKey::Quizzes,
        label: "Quizzes",
        description: "End of lesson assessments",
        group: FeatureGroup::Core,
    },
    FeatureInfo {
        key: FeatureKey::Qubits,
        label: "Qubits",
        description: "Quick knowledge checks",
        group: FeatureGroup::Core,
    },
    FeatureInfo {
        key: FeatureKey::Certificates,
        label: "Certificates",
        description: "Completion certificates",
        group: FeatureGroup::Core,
    },
    FeatureInfo {
        key: FeatureKey::Flashcards,
        label: "Flashcards",
        description: "Spaced repetition",
        group: FeatureGroup::LearningTools,
    },
    FeatureInfo {
        key: FeatureKey::MindMaps,
        label: "Mind Maps",
        description: "Visual mapping",
        group: FeatureGroup::LearningTools,
    },
    FeatureInfo {
        key: FeatureKey::FocusMode,
        label: "Focus Mode",
        description: "Pomodoro timer",
        group: FeatureGroup::LearningTools,
    },
    FeatureInfo {
        key: FeatureKey::Calendar,
        label: "Calendar",
        description: "Study scheduling",
        group: FeatureGroup::LearningTools,
    },
    FeatureInfo {
        key: FeatureKey::ExamSimulator,
        label: "Exam Simulator",
        description: "Practice exams",
        group: FeatureGroup::ExamPrep,
    },
    FeatureInfo {
        key: FeatureKey::WeakAreaDrills,
        label: "Weak Area Drills",
        description: "Targeted practice",
        group: FeatureGroup::ExamPrep,
    },
    FeatureInfo {
        key: FeatureKey::Gamification,
        label: "Gamification",
        description: "XP and achievements",
        group: FeatureGroup::Social,
    },
    FeatureInfo {
        key: FeatureKey::Leaderboards,
        label: "Leaderboards",
        description: "Rankings",
        group: FeatureGroup::Social,
    },
    FeatureInfo {
        key: FeatureKey::StudyGroups,
        label: "Study Groups",
        description: "Team learning",
        group: FeatureGroup::Social,
    },
    FeatureInfo {
        key: FeatureKey::Forum,
        label: "Forum",
        description: "Discussions",
        group: FeatureGroup::Social,
    },
    FeatureInfo {
        key: FeatureKey::ProgressSharing,
        label: "Progress Sharing",
        description: "Share milestones",
        group: FeatureGroup::Social,
    },
    FeatureInfo {
        key: FeatureKey::AiAssistant,
        label: "AI Assistant",
        description: "AI help",
        group: FeatureGroup::Advanced,
    },
    FeatureInfo {
        key: FeatureKey::LiveSessions,
        label: "Live Sessions",
        description: "Real-time classes",
        group: FeatureGroup::Advanced,
    },
    FeatureInfo {
        key: FeatureKey::Analytics,
        label: "Analytics",
        description: "Learning insights",
        group: FeatureGroup::Advanced,
    },
    FeatureInfo {
        key: FeatureKey::CustomReporting,
        label: "Reports",
        description: "Custom reports",
        group: FeatureGroup::Advanced,
    },
    FeatureInfo {
        key: FeatureKey::ApiAccess,
        label: "API Access",
        description: "Programmatic access",
        group: FeatureGroup::Advanced,
    },
];

/// Feature toggle state for one tenant. A value object: update operations
/// return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Features {
    pub course_content: bool,
    pub quizzes: bool,
    pub qubits: bool,
    pub certificates: bool,
    pub ai_assistant: bool,
    pub study_groups: bool,
    pub forum: bool,
    pub live_sessions: bool,
    pub analytics: bool,
    pub gamification: bool,
    pub flashcards: bool,
    pub mind_maps: bool,
    pub focus_mode: bool,
    pub calendar: bool,
    pub exam_simulator: bool,
    pub weak_area_drills: bool,
    pub progress_sharing: bool,
    pub leaderboards: bool,
    pub custom_reporting: bool,
    pub api_access: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            course_content: true,
            quizzes: true,
            qubits: true,
            certificates: true,
            ai_assistant: false,
            study_groups: true,
            forum: true,
            live_sessions: false,
            analytics: true,
            gamification: true,
            flashcards: true,
            mind_maps: true,
            focus_mode: true,
            calendar: true,
            exam_simulator: true,
            weak_area_drills: true,
            progress_sharing: true,
            leaderboards: true,
            custom_reporting: false,
            api_access: false,
        }
    }
}

impl Features {
    /// State of one toggle.
    pub fn get(&self, key: FeatureKey) -> bool {
        match key {
            FeatureKey::CourseContent => self.course_content,
            FeatureKey::Quizzes => self.quizzes,
            FeatureKey::Qubits => self.qubits,
            FeatureKey::Certificates => self.certificates,
            FeatureKey::AiAssistant => self.ai_assistant,
            FeatureKey::StudyGroups => self.study_groups,
            FeatureKey::Forum => self.forum,
            FeatureKey::LiveSessions => self.live_sessions,
            FeatureKey::Analytics => self.analytics,
            FeatureKey::Gamification => self.gamification,
            FeatureKey::Flashcards => self.flashcards,
            FeatureKey::MindMaps => self.mind_maps,
            FeatureKey::FocusMode => self.focus_mode,
            FeatureKey::Calendar => self.calendar,
            FeatureKey::ExamSimulator => self.exam_simulator,
            FeatureKey::WeakAreaDrills => self.weak_area_drills,
            FeatureKey::ProgressSharing => self.progress_sharing,
            FeatureKey::Leaderboards => self.leaderboards,
            FeatureKey::CustomReporting => self.custom_reporting,
            FeatureKey::ApiAccess => self.api_access,
        }
    }

    /// Returns a copy with one toggle set to `enabled`.
    pub fn with(&self, key: FeatureKey, enabled: bool) -> Features {
        let mut updated = *self;
        let slot = match key {
            FeatureKey::CourseContent => &mut updated.course_content,
            FeatureKey::Quizzes => &mut updated.quizzes,
            FeatureKey::Qubits => &mut updated.qubits,
            FeatureKey::Certificates => &mut updated.certificates,
            FeatureKey::AiAssistant => &mut updated.ai_assistant,
            FeatureKey::StudyGroups => &mut updated.study_groups,
            FeatureKey::Forum => &mut updated.forum,
            FeatureKey::LiveSessions => &mut updated.live_sessions,
            FeatureKey::Analytics => &mut updated.analytics,
            FeatureKey::Gamification => &mut updated.gamification,
            FeatureKey::Flashcards => &mut updated.flashcards,
            FeatureKey::MindMaps => &mut updated.mind_maps,
            FeatureKey::FocusMode => &mut updated.focus_mode,
            FeatureKey::Calendar => &mut updated.calendar,
            FeatureKey::ExamSimulator => &mut updated.exam_simulator,
            FeatureKey::WeakAreaDrills => &mut updated.weak_area_drills,
            FeatureKey::ProgressSharing => &mut updated.progress_sharing,
            FeatureKey::Leaderboards => &mut updated.leaderboards,
            FeatureKey::CustomReporting => &mut updated.custom_reporting,
            FeatureKey::ApiAccess => &mut updated.api_access,
        };
        *slot = enabled;
        updated
    }

    /// Returns a copy with one toggle flipped.
    pub fn toggled(&self, key: FeatureKey) -> Features {
        self.with(key, !self.get(key))
    }

    /// Number of enabled toggles.
    pub fn enabled_count(&self) -> usize {
        FEATURE_CATALOG.iter().filter(|info| self.get(info.key)).count()
    }
}
