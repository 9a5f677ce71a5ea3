use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrialRequestForm {
    pub company_name: String,
    pub phone: String,
    pub email: String,
    pub company_address: String,
    pub project_address: String,
    pub project_budget: String,
    pub project_duration: String,
}
