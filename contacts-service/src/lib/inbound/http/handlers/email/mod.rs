use serde::Deserialize;
use serde::Serialize;

pub mod confirm_email;
pub mod forget_password;
pub mod request_email;
pub mod reset_password;

/// Plain message response body shared by the email flow endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

impl MessageData {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Request body carrying a bare email address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestEmailBody {
    pub email: String,
}
