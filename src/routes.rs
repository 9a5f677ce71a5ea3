use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, forms, middleware, pages};
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    let member_routes = Router::new()
        .route("/trial", get(forms::trial_get).post(forms::trial_post))
        .route_layer(axum::middleware::from_fn(middleware::require_login));

    Router::new()
        .route("/", get(pages::index_get))
        .route("/about", get(pages::about_get))
        .route("/pricing", get(pages::pricing_get))
        .route("/services", get(pages::services_get))
        .route("/services/request", post(forms::service_request_post))
        .route("/services/contact", post(forms::contact_post))
        .route("/blog", get(pages::blog_get))
        .route("/blog/:slug", get(pages::blog_post_get))
        .route("/login", get(auth::login_get).post(auth::login_post))
        .route("/logout", post(auth::logout_post))
        .route("/register", get(auth::register_get).post(auth::register_post))
        .route("/builder", get(pages::builder_get))
        .route("/hero.svg", get(pages::hero_svg_get))
        .route("/styles.css", get(pages::stylesheet_get))
        .merge(member_routes)
        // Serve static files with cache-control header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
