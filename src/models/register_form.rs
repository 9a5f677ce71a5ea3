use serde::Deserialize;

/// Access-code request. Does not create an account.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}
