use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{ApprovalStatus, Project, ProjectStatus, Role, UserData, UserRecord};

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("duplicate email in user seed: {0}")]
    DuplicateEmail(String),
    #[error("project '{project}' of {email} has progress {progress}, expected 0..=100")]
    InvalidProgress {
        email: String,
        project: String,
        progress: u8,
    },
    #[error("failed to read users file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid users file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable, in-memory account list standing in for a backend.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.email.as_str()) {
                return Err(DirectoryError::DuplicateEmail(user.email.clone()));
            }
            if let Some(project) = user.projects.iter().find(|p| p.progress > 100) {
                return Err(DirectoryError::InvalidProgress {
                    email: user.email.clone(),
                    project: project.name.clone(),
                    progress: project.progress,
                });
            }
        }
        Ok(Self { users })
    }

    pub fn seeded() -> Self {
        Self { users: mock_users() }
    }

    pub async fn load(path: Option<&Path>) -> Result<Self, DirectoryError> {
        let Some(path) = path else {
            return Ok(Self::seeded());
        };
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DirectoryError::Read { path: path.to_path_buf(), source })?;
        let users: Vec<UserRecord> = serde_json::from_str(&raw)
            .map_err(|source| DirectoryError::Parse { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), count = users.len(), "Loaded user seed from file");
        Self::new(users)
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Exact match on both email and password; no trimming or case folding.
    pub fn validate_login(&self, email: &str, password: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
    }

    pub fn get_user_data(&self, email: &str) -> Option<UserData> {
        self.users
            .iter()
            .find(|u| u.email == email)
            .map(UserRecord::to_user_data)
    }
}

fn project(id: &str, name: &str, status: ProjectStatus, progress: u8) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        status,
        progress,
    }
}

pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "password123".into(),
            role: Role::User,
            services: vec!["Interior Design".into(), "Civil Construction".into()],
            approval_status: ApprovalStatus { pending: 2, approved: 5, rejected: 1 },
            projects: vec![
                project("p1", "Residential Complex", ProjectStatus::Active, 75),
                project("p2", "Office Renovation", ProjectStatus::Pending, 0),
            ],
        },
        UserRecord {
            id: "2".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            password: "password123".into(),
            role: Role::User,
            services: vec!["Electrical Work".into(), "Plumbing".into()],
            approval_status: ApprovalStatus { pending: 1, approved: 3, rejected: 0 },
            projects: vec![project("p3", "Commercial Building", ProjectStatus::Active, 45)],
        },
        UserRecord {
            id: "3".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            password: "admin123".into(),
            role: Role::Admin,
            services: vec!["All Services".into()],
            approval_status: ApprovalStatus::default(),
            projects: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_credentials_validate() {
        let dir = UserDirectory::seeded();
        let user = dir.validate_login("john@example.com", "password123").unwrap();
        assert_eq!(user.name, "John Doe");
        let admin = dir.validate_login("admin@example.com", "admin123").unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn login_is_exact_match() {
        let dir = UserDirectory::seeded();
        assert!(dir.validate_login("john@example.com", "wrong").is_none());
        assert!(dir.validate_login("JOHN@example.com", "password123").is_none());
        assert!(dir.validate_login(" john@example.com", "password123").is_none());
        // Right password, wrong account.
        assert!(dir.validate_login("admin@example.com", "password123").is_none());
    }

    #[test]
    fn user_data_strips_password() {
        let dir = UserDirectory::seeded();
        let data = dir.get_user_data("jane@example.com").unwrap();
        assert_eq!(data.services, vec!["Electrical Work", "Plumbing"]);
        assert_eq!(data.projects[0].progress, 45);
        assert!(dir.get_user_data("nobody@example.com").is_none());
    }

    #[test]
    fn duplicate_emails_are_rejected() {
        let mut users = mock_users();
        users[1].email = users[0].email.clone();
        match UserDirectory::new(users) {
            Err(DirectoryError::DuplicateEmail(email)) => assert_eq!(email, "john@example.com"),
            other => panic!("expected duplicate email error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn progress_above_one_hundred_is_rejected() {
        let mut users = mock_users();
        users[0].projects[0].progress = 250;
        match UserDirectory::new(users) {
            Err(DirectoryError::InvalidProgress { email, progress, .. }) => {
                assert_eq!(email, "john@example.com");
                assert_eq!(progress, 250);
            }
            other => panic!("expected invalid progress error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn users_file_with_bad_progress_fails_to_load() {
        let mut users = mock_users();
        users[1].projects[0].progress = 101;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, serde_json::to_string(&users).unwrap().as_bytes()).unwrap();

        let result = UserDirectory::load(Some(file.path())).await;

        assert!(matches!(result, Err(DirectoryError::InvalidProgress { .. })));
    }

    #[test]
    fn seed_emails_are_unique() {
        assert!(UserDirectory::new(mock_users()).is_ok());
    }

    #[tokio::test]
    async fn loads_users_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let users = vec![mock_users().remove(2)];
        std::io::Write::write_all(&mut file, serde_json::to_string(&users).unwrap().as_bytes()).unwrap();

        let dir = UserDirectory::load(Some(file.path())).await.unwrap();

        assert_eq!(dir.users().len(), 1);
        assert!(dir.validate_login("admin@example.com", "admin123").is_some());
        assert!(dir.validate_login("john@example.com", "password123").is_none());
    }

    #[tokio::test]
    async fn malformed_users_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[{\"id\": 1").unwrap();

        let result = UserDirectory::load(Some(file.path())).await;

        assert!(matches!(result, Err(DirectoryError::Parse { .. })));
    }

    #[tokio::test]
    async fn missing_path_falls_back_to_seed() {
        let dir = UserDirectory::load(None).await.unwrap();
        assert_eq!(dir.users().len(), 3);
    }
}
