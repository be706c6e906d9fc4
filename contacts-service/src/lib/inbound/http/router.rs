use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::refresh_token::refresh_token;
use super::handlers::auth::signup::signup;
use super::handlers::contacts::create_contact::create_contact;
use super::handlers::contacts::delete_contact::delete_contact;
use super::handlers::contacts::get_contact::get_contact;
use super::handlers::contacts::list_contacts::list_contacts;
use super::handlers::contacts::search_contacts::search_contacts;
use super::handlers::contacts::update_contact::update_contact;
use super::handlers::contacts::upcoming_birthdays::upcoming_birthdays;
use super::handlers::email::confirm_email::confirm_email;
use super::handlers::email::forget_password::forget_password;
use super::handlers::email::request_email::request_email;
use super::handlers::email::reset_password::reset_password;
use super::handlers::users::update_avatar::update_avatar;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::contact::service::ContactService;
use crate::outbound::cache::RedisSnapshotStore;
use crate::outbound::email::SmtpMailDispatcher;
use crate::outbound::media::HttpImageHost;
use crate::outbound::repositories::PostgresContactRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository, RedisSnapshotStore>>,
    pub contact_service: Arc<ContactService<PostgresContactRepository>>,
    pub mail: Arc<SmtpMailDispatcher>,
    pub images: Arc<HttpImageHost>,
    pub base_url: String,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository, RedisSnapshotStore>>,
    contact_service: Arc<ContactService<PostgresContactRepository>>,
    mail: Arc<SmtpMailDispatcher>,
    images: Arc<HttpImageHost>,
    base_url: String,
) -> Router {
    let state = AppState {
        auth_service,
        contact_service,
        mail,
        images,
        base_url,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh_token))
        .route("/api/email/confirm/:token", get(confirm_email))
        .route("/api/email/request", post(request_email))
        .route("/api/email/forget-password", post(forget_password))
        .route("/api/email/reset-password/:token", post(reset_password));

    let protected_routes = Router::new()
        .route("/api/contacts", get(list_contacts).post(create_contact))
        .route("/api/contacts/birthdays", get(upcoming_birthdays))
        .route("/api/contacts/search", get(search_contacts))
        .route(
            "/api/contacts/:contact_id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .route("/api/users/avatar", patch(update_avatar))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
