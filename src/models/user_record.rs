use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Pending,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStatus {
    pub pending: u32,
    pub approved: u32,
    pub rejected: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

/// A seeded account, password included. Never leaves the server as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub services: Vec<String>,
    pub approval_status: ApprovalStatus,
    pub projects: Vec<Project>,
}

impl UserRecord {
    pub fn to_user_data(&self) -> UserData {
        UserData {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            services: self.services.clone(),
            approval_status: self.approval_status.clone(),
            projects: self.projects.clone(),
        }
    }
}

/// The `userData` payload: a user record without its password.
///
/// Every field is defaulted on decode so a partially written cookie still
/// yields something displayable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub services: Vec<String>,
    pub approval_status: ApprovalStatus,
    pub projects: Vec<Project>,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            role: Role::User,
            services: Vec::new(),
            approval_status: ApprovalStatus::default(),
            projects: Vec::new(),
        }
    }
}

impl UserData {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    pub fn display_email(&self) -> &str {
        if self.email.is_empty() {
            "user@example.com"
        } else {
            &self.email
        }
    }

    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "U".to_string())
    }

    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_data_serializes_without_password() {
        let record = UserRecord {
            id: "9".into(),
            name: "Test".into(),
            email: "t@example.com".into(),
            password: "secret".into(),
            role: Role::Admin,
            services: vec![],
            approval_status: ApprovalStatus::default(),
            projects: vec![],
        };
        let json = serde_json::to_string(&record.to_user_data()).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"approvalStatus\""));
        assert!(json.contains("\"role\":\"admin\""));
    }

    #[test]
    fn empty_user_data_uses_fallbacks() {
        let data: UserData = serde_json::from_str("{}").unwrap();
        assert_eq!(data.display_name(), "User");
        assert_eq!(data.display_email(), "user@example.com");
        assert_eq!(data.initial(), "U");
        assert!(!data.has_services());
    }
}
