//! Portal access roles and derived credential bundles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three access levels a tenant portal exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coordinator,
    Learner,
}

impl Role {
    /// All roles, in credential display order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Coordinator, Role::Learner];

    /// Human-readable account name shown on the credential sheet.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Company Admin",
            Role::Coordinator => "Training Coordinator",
            Role::Learner => "Student/Learner",
        }
    }

    /// One-line summary of what the role can do.
    pub fn access_summary(&self) -> &'static str {
        match self {
            Role::Admin => {
                "Full access to manage users, view reports, and configure portal settings."
            }
            Role::Coordinator => "Manage learner enrollments, track progress, and generate reports.",
            Role::Learner => "Access courses, take quizzes, and track personal learning progress.",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "coordinator" => Ok(Role::Coordinator),
            "learner" => Ok(Role::Learner),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Coordinator => write!(f, "coordinator"),
            Role::Learner => write!(f, "learner"),
        }
    }
}

/// Login details for one role. Derived on demand from the tenant slug and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub portal_url: String,
}

/// Credentials for all three portal roles of one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialBundle {
    pub admin: Credential,
    pub coordinator: Credential,
    pub learner: Credential,
}

impl CredentialBundle {
    /// The credential for one role.
    pub fn get(&self, role: Role) -> &Credential {
        match role {
            Role::Admin => &self.admin,
            Role::Coordinator => &self.coordinator,
            Role::Learner => &self.learner,
        }
    }

    /// Iterates (role, credential) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Credential)> {
        Role::ALL.iter().map(move |role| (*role, self.get(*role)))
    }
}
