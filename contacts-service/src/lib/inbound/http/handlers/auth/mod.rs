use serde::Serialize;

use crate::domain::auth::service::TokenPair;

pub mod login;
pub mod refresh_token;
pub mod signup;

/// Token pair response body shared by the login and refresh endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl From<TokenPair> for TokenData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
