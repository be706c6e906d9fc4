use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::MessageData;
use super::RequestEmailBody;
use crate::domain::user::ports::MailDispatcher;
use crate::inbound::http::router::AppState;

pub async fn forget_password(
    State(state): State<AppState>,
    Json(body): Json<RequestEmailBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let (user, token) = state
        .auth_service
        .request_password_reset(&body.email)
        .await?;

    let mail = Arc::clone(&state.mail);
    let base_url = state.base_url.clone();
    let recipient = user.email.to_string();
    let username = user.username.to_string();
    tokio::spawn(async move {
        if let Err(e) = mail
            .send_password_reset(&recipient, &username, &base_url, &token)
            .await
        {
            tracing::error!(recipient = %recipient, error = %e, "Failed to send password reset email");
        }
    });

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Check your email for reset."),
    ))
}
