use std::sync::Arc;
use std::time::Duration;

use crate::services::user_service::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub public_base_url: String,
    /// How long a simulated form submission takes.
    pub submit_delay: Duration,
    /// Pre-rendered hero background; the scene never changes after startup.
    pub hero_svg: Arc<String>,
    pub custom_css: Option<String>,
}
