//! nephrite-server
//!
//! HTTP surface for the Nephrite system: form schema and prediction
//! gating, identity proxy routes, and clinic record CRUD.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full route tree over the given state. Record routes sit
/// behind the session-token middleware; form schema, prediction, and the
/// identity proxy are public.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let records = Router::new()
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients", post(routes::patients::create_patient))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route("/patients/{id}", put(routes::patients::update_patient))
        .route("/patients/{id}", delete(routes::patients::delete_patient))
        .route("/doctors", get(routes::doctors::list_doctors))
        .route("/doctors", post(routes::doctors::create_doctor))
        .route("/doctors/{id}", get(routes::doctors::get_doctor))
        .route("/doctors/{id}", put(routes::doctors::update_doctor))
        .route("/doctors/{id}", delete(routes::doctors::delete_doctor))
        .route("/appointments", get(routes::appointments::list_appointments))
        .route("/appointments", post(routes::appointments::create_appointment))
        .route("/appointments/{id}", get(routes::appointments::get_appointment))
        .route("/appointments/{id}", put(routes::appointments::update_appointment))
        .route("/appointments/{id}", delete(routes::appointments::delete_appointment))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/fields", get(routes::form::list_fields))
        .route("/profiles", get(routes::form::list_profiles))
        .route("/profiles/{name}", get(routes::form::get_profile))
        .route("/predict", post(routes::predict::predict))
        .route("/auth/signup", post(routes::auth::signup))
        .route("/auth/login", post(routes::auth::login))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::logout))
        .merge(records)
        .layer(cors)
        .with_state(state)
}
