use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListContactsParams>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    let contacts = state
        .contact_service
        .list_contacts(
            user.id,
            params.limit.unwrap_or(100),
            params.offset.unwrap_or(0),
        )
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        contacts.iter().map(ContactData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListContactsParams {
    limit: Option<i64>,
    offset: Option<i64>,
}
