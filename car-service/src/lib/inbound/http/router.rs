use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::api_not_found;
use super::handlers::auth::sign_in;
use super::handlers::auth::sign_up;
use super::handlers::cars::create_car;
use super::handlers::cars::delete_car;
use super::handlers::cars::get_car;
use super::handlers::cars::list_cars;
use super::handlers::cars::update_car;
use super::handlers::makes::create_make;
use super::handlers::makes::list_makes;
use super::handlers::me::get_current_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::car::ports::CarServicePort;
use crate::domain::make::ports::MakeServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub car_service: Arc<dyn CarServicePort>,
    pub make_service: Arc<dyn MakeServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    car_service: Arc<dyn CarServicePort>,
    make_service: Arc<dyn MakeServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        car_service,
        make_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in));

    // Layered with a fallback so unrouted /api paths also require a token
    let protected_routes = Router::new()
        .route("/me", get(get_current_user))
        .route("/makes", get(list_makes).post(create_make))
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:car_id", get(get_car).put(update_car).delete(delete_car))
        .fallback(api_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .nest("/api", protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
