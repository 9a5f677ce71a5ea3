use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::models::{AppState, LoginForm, Notification, RegisterForm};
use crate::services::simulate_submission;
use crate::templates::{LoginTemplate, RegisterTemplate};

use super::helpers::{build_page_context, push_flash, render_page, render_page_with_status, sign_in, sign_out};

pub async fn login_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/login");
    render_page(jar, LoginTemplate { ctx, email: String::new() })
}

pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = state
        .users
        .validate_login(&form.email, &form.password)
        .and_then(|record| state.users.get_user_data(&record.email));

    if let Some(user) = user {
        tracing::info!(email = %user.email, role = user.role.as_str(), "Login successful");
        let jar = sign_in(jar, &user, form.remember_me())?;
        let welcome = Notification::success("Login successful", format!("Welcome back, {}!", user.name));
        let jar = push_flash(jar, &welcome)?;
        return Ok((jar, Redirect::to("/")).into_response());
    }

    tracing::warn!(email = %form.email, "Login failed: invalid credentials");
    let (jar, mut ctx) = build_page_context(&state, jar, "/login");
    ctx.notification = Some(Notification::destructive("Login failed", "Invalid email or password"));
    render_page_with_status(StatusCode::UNAUTHORIZED, jar, LoginTemplate { ctx, email: form.email })
}

pub async fn logout_post(jar: CookieJar) -> impl IntoResponse {
    tracing::info!("Logout");
    (sign_out(jar), Redirect::to("/"))
}

pub async fn register_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/register");
    render_page(jar, RegisterTemplate { ctx, form: RegisterForm::default(), submitted: false })
}

/// Access-code request. The directory is immutable, so no account is created.
pub async fn register_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let outcome = simulate_submission(&form, state.submit_delay).await;
    let (jar, mut ctx) = build_page_context(&state, jar, "/register");
    match outcome {
        Ok(()) => {
            ctx.notification = Some(Notification::success(
                "Request Submitted",
                "We will email your access code once your account is approved.",
            ));
            render_page(jar, RegisterTemplate { ctx, form: RegisterForm::default(), submitted: true })
        }
        Err(_) => {
            ctx.notification = Some(Notification::submission_failed());
            render_page_with_status(StatusCode::UNPROCESSABLE_ENTITY, jar, RegisterTemplate { ctx, form, submitted: false })
        }
    }
}
