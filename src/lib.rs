pub mod config;
pub mod error;
pub mod handlers;
pub mod hero;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

use std::sync::Arc;

use config::Settings;
use hero::{render_svg, Scene, Viewport};
use models::AppState;
use services::{DirectoryError, UserDirectory};

/// Assemble the shared state: user directory, pre-rendered hero and settings.
pub async fn build_state(settings: &Settings) -> Result<AppState, DirectoryError> {
    let users = UserDirectory::load(settings.users_file.as_deref()).await?;
    let hero_svg = render_svg(&Scene::generate(settings.hero_seed), Viewport::HERO);
    Ok(AppState {
        users: Arc::new(users),
        public_base_url: settings.public_base_url.clone(),
        submit_delay: settings.submit_delay,
        hero_svg: Arc::new(hero_svg),
        custom_css: None,
    })
}
