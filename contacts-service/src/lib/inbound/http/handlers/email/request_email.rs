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

pub async fn request_email(
    State(state): State<AppState>,
    Json(body): Json<RequestEmailBody>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let (user, token) = state.auth_service.request_verification(&body.email).await?;

    let Some(token) = token else {
        return Ok(ApiSuccess::new(
            StatusCode::OK,
            MessageData::new("Your email is already confirmed"),
        ));
    };

    let mail = Arc::clone(&state.mail);
    let base_url = state.base_url.clone();
    let recipient = user.email.to_string();
    let username = user.username.to_string();
    tokio::spawn(async move {
        if let Err(e) = mail
            .send_verification(&recipient, &username, &base_url, &token)
            .await
        {
            tracing::error!(recipient = %recipient, error = %e, "Failed to send verification email");
        }
    });

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Check your email for confirmation."),
    ))
}
