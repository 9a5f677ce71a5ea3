use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Datelike;

use crate::error::AppError;
use crate::models::{navigation_for, AppState, NavItem, Notification, UserData};
use crate::templates::BasePage;

pub const IS_LOGGED_IN_COOKIE: &str = "isLoggedIn";
pub const USER_DATA_COOKIE: &str = "userData";
pub const FLASH_COOKIE: &str = "flash";
pub const REMEMBER_ME_DAYS: i64 = 30;

/// The nav bar is authenticated exactly when `isLoggedIn` holds the string "true".
pub fn is_logged_in(jar: &CookieJar) -> bool {
    jar.get(IS_LOGGED_IN_COOKIE)
        .map(|c| c.value() == "true")
        .unwrap_or(false)
}

// The jar percent-encodes cookie values on the way out and decodes them on the way in.
fn decode_json<T: serde::de::DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}

/// Stored profile, or an empty one when the cookie is missing or malformed.
pub fn user_data_from_jar(jar: &CookieJar) -> UserData {
    jar.get(USER_DATA_COOKIE)
        .and_then(|c| decode_json(c.value()))
        .unwrap_or_default()
}

fn site_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

fn removal(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::from(name);
    cookie.set_path("/");
    cookie
}

pub fn sign_in(jar: CookieJar, user: &UserData, remember: bool) -> Result<CookieJar, AppError> {
    let mut flag = site_cookie(IS_LOGGED_IN_COOKIE, "true".to_string());
    let mut data = site_cookie(USER_DATA_COOKIE, encode_json(user)?);
    if remember {
        flag.set_max_age(time::Duration::days(REMEMBER_ME_DAYS));
        data.set_max_age(time::Duration::days(REMEMBER_ME_DAYS));
    }
    Ok(jar.add(flag).add(data))
}

pub fn sign_out(jar: CookieJar) -> CookieJar {
    jar.remove(removal(IS_LOGGED_IN_COOKIE))
        .remove(removal(USER_DATA_COOKIE))
}

pub fn push_flash(jar: CookieJar, notification: &Notification) -> Result<CookieJar, AppError> {
    Ok(jar.add(site_cookie(FLASH_COOKIE, encode_json(notification)?)))
}

/// Read the pending notification, if any, and clear it so it renders once.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Notification>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };
    (jar.remove(removal(FLASH_COOKIE)), decode_json(&raw))
}

/// Values every page template shares: nav bar, session and notification.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub current_path: String,
    pub nav: Vec<NavItem>,
    pub logged_in: bool,
    pub user: UserData,
    pub notification: Option<Notification>,
    pub canonical_url: String,
    pub year: i32,
}

impl PageContext {
    pub fn has_notification(&self) -> bool {
        self.notification.is_some()
    }
}

pub fn build_page_context(state: &AppState, jar: CookieJar, path: &str) -> (CookieJar, PageContext) {
    let (jar, notification) = take_flash(jar);
    let logged_in = is_logged_in(&jar);
    let user = if logged_in { user_data_from_jar(&jar) } else { UserData::default() };
    let ctx = PageContext {
        current_path: path.to_string(),
        nav: navigation_for(path),
        logged_in,
        user,
        notification,
        canonical_url: crate::utils::canonical_url(&state.public_base_url, path),
        year: chrono::Utc::now().year(),
    };
    (jar, ctx)
}

pub fn render_page<T: Template + BasePage>(jar: CookieJar, page: T) -> Result<Response, AppError> {
    render_page_with_status(StatusCode::OK, jar, page)
}

pub fn render_page_with_status<T: Template + BasePage>(
    status: StatusCode,
    jar: CookieJar,
    page: T,
) -> Result<Response, AppError> {
    let body = page.render()?;
    tracing::debug!(path = %page.ctx().current_path, %status, "Rendered page");
    Ok((status, jar, Html(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn logged_in_requires_exact_true() {
        let jar = CookieJar::new().add(Cookie::new(IS_LOGGED_IN_COOKIE, "true"));
        assert!(is_logged_in(&jar));
        let jar = CookieJar::new().add(Cookie::new(IS_LOGGED_IN_COOKIE, "TRUE"));
        assert!(!is_logged_in(&jar));
        assert!(!is_logged_in(&CookieJar::new()));
    }

    #[test]
    fn user_data_round_trips_through_cookie() {
        let user = UserData {
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            role: Role::User,
            services: vec!["Plumbing".into()],
            ..Default::default()
        };
        let jar = sign_in(CookieJar::new(), &user, false).unwrap();
        assert_eq!(user_data_from_jar(&jar), user);
        assert!(is_logged_in(&jar));
    }

    #[test]
    fn malformed_user_data_falls_back_to_empty() {
        let jar = CookieJar::new().add(Cookie::new(USER_DATA_COOKIE, "{not-json"));
        assert_eq!(user_data_from_jar(&jar), UserData::default());
    }

    #[test]
    fn flash_is_read_once() {
        let jar = push_flash(CookieJar::new(), &Notification::success("Saved", "All good")).unwrap();
        let (jar, first) = take_flash(jar);
        assert_eq!(first.map(|n| n.title), Some("Saved".to_string()));
        let (_, second) = take_flash(jar);
        assert!(second.is_none());
    }
}
