use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use super::super::ApiError;
use super::super::ApiSuccess;
use super::TokenData;
use crate::inbound::http::router::AppState;

/// Rotate a token pair from the refresh token presented as a bearer
/// credential. A mismatch against the stored token revokes it, so the old
/// pair cannot be replayed.
pub async fn refresh_token(
    State(state): State<AppState>,
    TypedHeader(authorization): TypedHeader<Authorization<Bearer>>,
) -> Result<ApiSuccess<TokenData>, ApiError> {
    let pair = state.auth_service.refresh(authorization.token()).await?;

    Ok(ApiSuccess::new(StatusCode::OK, pair.into()))
}
