use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactBody;
use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<ContactBody>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let fields = body.try_into_fields()?;

    let contact = state
        .contact_service
        .create_contact(fields, user.id)
        .await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, (&contact).into()))
}
