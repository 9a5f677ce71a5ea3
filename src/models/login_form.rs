use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// HTML checkbox: present ("on") when ticked, absent otherwise.
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn remember_me(&self) -> bool {
        self.remember.is_some()
    }
}
