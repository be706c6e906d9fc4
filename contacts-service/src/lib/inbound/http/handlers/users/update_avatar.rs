use axum::extract::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use crate::domain::user::models::User;
use crate::domain::user::ports::ImageHost;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Upload a new avatar image for the authenticated user.
///
/// The image bytes go to the external image host; only the returned public
/// URL is persisted on the user row.
pub async fn update_avatar(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?;
            data = Some(bytes.to_vec());
            break;
        }
    }

    let data = data.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    let public_id = format!("contacts_app/{}", user.username);
    let url = state
        .images
        .upload(data, &public_id)
        .await
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    let updated = state
        .auth_service
        .update_avatar(user.email.as_str(), &url)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&updated).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            confirmed: user.confirmed,
            created_at: user.created_at,
        }
    }
}
