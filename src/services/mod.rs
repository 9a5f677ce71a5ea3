pub mod content_service;
pub mod submission_service;
pub mod user_service;

// Re-export commonly used functions
pub use submission_service::{simulate_submission, Submission, SubmissionError};
pub use user_service::{mock_users, DirectoryError, UserDirectory};
