use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::handlers::helpers::is_logged_in;

/// Guests asking for the trial form are sent to sign up first.
pub async fn require_login(jar: CookieJar, request: Request, next: Next) -> Response {
    if is_logged_in(&jar) {
        next.run(request).await
    } else {
        Redirect::to("/register").into_response()
    }
}
