use std::time::Duration;

use thiserror::Error;

use crate::models::{ContactForm, RegisterForm, ServiceRequestForm, TrialRequestForm};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// A form whose "submission" is a fixed delay followed by local validation.
pub trait Submission {
    fn kind(&self) -> &'static str;
    fn validate(&self) -> Result<(), SubmissionError>;
}

fn require(name: &'static str, value: &str) -> Result<(), SubmissionError> {
    if value.trim().is_empty() {
        Err(SubmissionError::MissingField(name))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), SubmissionError> {
    require("email", value)?;
    check_email(value)
}

/// Optional email fields are only checked when filled in.
fn check_email(value: &str) -> Result<(), SubmissionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(SubmissionError::InvalidEmail(trimmed.to_string())),
    }
}

impl Submission for TrialRequestForm {
    fn kind(&self) -> &'static str {
        "trial_request"
    }

    fn validate(&self) -> Result<(), SubmissionError> {
        require("companyName", &self.company_name)?;
        require("phone", &self.phone)?;
        require_email(&self.email)?;
        require("projectBudget", &self.project_budget)?;
        require("projectDuration", &self.project_duration)?;
        require("companyAddress", &self.company_address)?;
        require("projectAddress", &self.project_address)
    }
}

impl Submission for RegisterForm {
    fn kind(&self) -> &'static str {
        "register"
    }

    fn validate(&self) -> Result<(), SubmissionError> {
        require("name", &self.name)?;
        require("company", &self.company)?;
        require_email(&self.email)?;
        require("phone", &self.phone)
    }
}

impl Submission for ServiceRequestForm {
    fn kind(&self) -> &'static str {
        "service_request"
    }

    fn validate(&self) -> Result<(), SubmissionError> {
        require("fullName", &self.full_name)?;
        require("mobile", &self.mobile)?;
        check_email(&self.email)?;
        require("siteAddress", &self.site_address)?;
        require("areaSqft", &self.area_sqft)
    }
}

impl Submission for ContactForm {
    fn kind(&self) -> &'static str {
        "contact"
    }

    fn validate(&self) -> Result<(), SubmissionError> {
        require("fullName", &self.full_name)?;
        require("mobile", &self.mobile)?;
        check_email(&self.email)
    }
}

/// Stand-in for a network call: waits `delay`, then accepts or rejects.
pub async fn simulate_submission<F: Submission>(form: &F, delay: Duration) -> Result<(), SubmissionError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    match form.validate() {
        Ok(()) => {
            tracing::info!(form = form.kind(), "Simulated submission accepted");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(form = form.kind(), error = %e, "Simulated submission rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_trial() -> TrialRequestForm {
        TrialRequestForm {
            company_name: "Acme Builders".into(),
            phone: "+91 98765 43210".into(),
            email: "ops@acme.in".into(),
            company_address: "12 MG Road, Pune".into(),
            project_address: "Plot 4, Hinjewadi".into(),
            project_budget: "2 Cr".into(),
            project_duration: "18 months".into(),
        }
    }

    #[test]
    fn complete_trial_request_is_valid() {
        assert_eq!(filled_trial().validate(), Ok(()));
    }

    #[test]
    fn blank_required_field_is_reported_by_name() {
        let mut form = filled_trial();
        form.project_budget = "   ".into();
        assert_eq!(form.validate(), Err(SubmissionError::MissingField("projectBudget")));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled_trial();
        form.email = "not-an-email".into();
        assert!(matches!(form.validate(), Err(SubmissionError::InvalidEmail(_))));
    }

    #[test]
    fn contact_email_is_optional() {
        let form = ContactForm {
            full_name: "Asha".into(),
            mobile: "9000000000".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[tokio::test]
    async fn submission_waits_for_the_configured_delay() {
        let started = std::time::Instant::now();
        let result = simulate_submission(&filled_trial(), Duration::from_millis(30)).await;
        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn invalid_submission_still_errors_after_delay() {
        let result = simulate_submission(&RegisterForm::default(), Duration::ZERO).await;
        assert_eq!(result, Err(SubmissionError::MissingField("name")));
    }
}
