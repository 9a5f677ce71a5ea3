use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{AppState, BillingCycle, PlanView};
use crate::services::content_service;
use crate::templates::{
    AboutTemplate, BlogPostTemplate, BlogTemplate, IndexTemplate, NotFoundTemplate, PricingTemplate, ServicesTemplate,
};
use crate::utils::store_url_for_user_agent;

use super::helpers::{build_page_context, render_page, render_page_with_status};

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/fwkqWyGwI78?autoplay=1&playsinline=1";
pub const SERVICES_VIDEO_URL: &str = "https://www.youtube.com/embed/IjlYXtI2-GU?autoplay=1";

pub async fn index_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/");
    render_page(
        jar,
        IndexTemplate {
            ctx,
            features: content_service::features(),
            stats: content_service::landing_stats(),
            testimonials: content_service::testimonials(),
            demo_video_url: DEMO_VIDEO_URL,
        },
    )
}

pub async fn about_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/about");
    render_page(
        jar,
        AboutTemplate {
            ctx,
            achievements: content_service::achievements(),
            team: content_service::team(),
        },
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct PricingQuery {
    pub billing: Option<String>,
}

pub async fn pricing_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<PricingQuery>,
) -> Result<Response, AppError> {
    let cycle = BillingCycle::from_query(query.billing.as_deref());
    let (jar, ctx) = build_page_context(&state, jar, "/pricing");
    let plans = content_service::pricing_plans()
        .iter()
        .map(|plan| PlanView::new(plan, cycle))
        .collect();
    render_page(
        jar,
        PricingTemplate {
            ctx,
            plans,
            yearly: cycle.is_yearly(),
            faqs: content_service::pricing_faqs(),
        },
    )
}

pub async fn services_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/services");
    render_page(
        jar,
        ServicesTemplate {
            ctx,
            services: content_service::service_offerings(),
            room_options: (1..=5u8).map(|n| (n, if n == 1 { "Room" } else { "Rooms" })).collect(),
            overview_video_url: SERVICES_VIDEO_URL,
        },
    )
}

pub async fn blog_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, ctx) = build_page_context(&state, jar, "/blog");
    render_page(jar, BlogTemplate { ctx, posts: content_service::blog_posts() })
}

pub async fn blog_post_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let path = format!("/blog/{}", slug);
    match content_service::find_blog_post(&slug) {
        Some(post) => {
            let (jar, ctx) = build_page_context(&state, jar, &path);
            render_page(jar, BlogPostTemplate { ctx, post })
        }
        None => render_not_found(&state, jar, &path),
    }
}

pub async fn not_found(State(state): State<AppState>, jar: CookieJar, uri: Uri) -> Result<Response, AppError> {
    render_not_found(&state, jar, uri.path())
}

fn render_not_found(state: &AppState, jar: CookieJar, path: &str) -> Result<Response, AppError> {
    tracing::warn!(path, "404: attempted to access non-existent route");
    let (jar, ctx) = build_page_context(state, jar, path);
    render_page_with_status(StatusCode::NOT_FOUND, jar, NotFoundTemplate { ctx })
}

/// "Became a Builder": send the visitor to the app store for their platform.
pub async fn builder_get(headers: HeaderMap) -> Redirect {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let target = store_url_for_user_agent(user_agent);
    tracing::info!(user_agent, target, "Builder redirect");
    Redirect::to(target)
}

pub async fn hero_svg_get(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        state.hero_svg.as_str().to_owned(),
    )
}

pub async fn stylesheet_get(State(state): State<AppState>) -> impl IntoResponse {
    let css = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css)
}
