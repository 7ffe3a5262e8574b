use axum::{
    routing::{get, post},
    Router,
    http::Method,
    Json,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod deals;
pub mod error;
pub mod middleware;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
            middleware::identity::GUEST_HEADER,
            middleware::identity::SUBJECT_HEADER,
            middleware::identity::PROVIDER_HEADER,
            middleware::identity::EMAIL_HEADER,
        ]);

    let gated = Router::new()
        .route("/v1/catalog", get(catalog::list_items))
        .route("/v1/catalog/{id}", get(catalog::get_item))
        .route("/v1/deals/search", post(deals::search_deals))
        .route("/v1/deals/recommend", post(deals::recommend))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::identity_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(gated)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
