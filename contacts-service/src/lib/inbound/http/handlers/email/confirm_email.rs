use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::MessageData;
use crate::domain::auth::service::EmailConfirmation;
use crate::inbound::http::router::AppState;

pub async fn confirm_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let outcome = state.auth_service.confirm_email(&token).await?;

    let message = match outcome {
        EmailConfirmation::Confirmed => "Email confirmed",
        EmailConfirmation::AlreadyConfirmed => "Your email is already confirmed",
    };

    Ok(ApiSuccess::new(StatusCode::OK, MessageData::new(message)))
}
