use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<i64>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let contact = state
        .contact_service
        .get_contact(ContactId(contact_id), user.id)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, (&contact).into()))
}
