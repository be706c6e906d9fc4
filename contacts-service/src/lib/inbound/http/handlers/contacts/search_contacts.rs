use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::ContactData;
use crate::domain::contact::models::SearchFilters;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn search_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<SearchContactsParams>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    let filters = SearchFilters {
        first_name: params.first_name,
        last_name: params.last_name,
        email: params.email,
    };

    let limit = params.limit.unwrap_or(10).clamp(10, 500);
    let offset = params.offset.unwrap_or(0).max(0);

    let contacts = state
        .contact_service
        .search_contacts(filters, user.id, limit, offset)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        contacts.iter().map(ContactData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchContactsParams {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}
