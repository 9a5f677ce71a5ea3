use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::models::{AppState, ContactForm, Notification, ServiceRequestForm, TrialRequestForm};
use crate::services::{simulate_submission, Submission};
use crate::templates::TrialTemplate;

use super::helpers::{build_page_context, push_flash, render_page, render_page_with_status};

pub async fn trial_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/trial");
    render_page(jar, TrialTemplate { ctx, form: TrialRequestForm::default(), submitted: false })
}

pub async fn trial_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<TrialRequestForm>,
) -> Result<Response, AppError> {
    let outcome = simulate_submission(&form, state.submit_delay).await;
    let (jar, mut ctx) = build_page_context(&state, jar, "/trial");
    match outcome {
        Ok(()) => {
            ctx.notification = Some(Notification::success(
                "Request Submitted",
                "Our team will contact you soon with more details.",
            ));
            // A fresh form: the submitted values are not echoed back.
            render_page(jar, TrialTemplate { ctx, form: TrialRequestForm::default(), submitted: true })
        }
        Err(_) => {
            ctx.notification = Some(Notification::submission_failed());
            render_page_with_status(StatusCode::UNPROCESSABLE_ENTITY, jar, TrialTemplate { ctx, form, submitted: false })
        }
    }
}

/// Shared tail for the two services-page forms: flash the outcome and go back.
async fn submit_and_return<F: Submission>(
    state: &AppState,
    jar: CookieJar,
    form: &F,
    success: &str,
) -> Result<Response, AppError> {
    let notification = match simulate_submission(form, state.submit_delay).await {
        Ok(()) => Notification::success("Thank You!", success),
        Err(_) => Notification::submission_failed(),
    };
    let jar = push_flash(jar, &notification)?;
    Ok((jar, Redirect::to("/services#request-form")).into_response())
}

pub async fn service_request_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ServiceRequestForm>,
) -> Result<Response, AppError> {
    submit_and_return(
        &state,
        jar,
        &form,
        "Thank you for registering our service. Our team will contact you soon within 24-48 hours.",
    )
    .await
}

pub async fn contact_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    submit_and_return(
        &state,
        jar,
        &form,
        "Thank you for requesting our team. We will contact you within 24-48 hours.",
    )
    .await
}
