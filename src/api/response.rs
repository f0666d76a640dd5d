use serde::{Deserialize, Serialize};

use super::error::{ApiError, OK};
use crate::atm::AccountSnapshot;

/// Message payload returned for errors and acknowledgements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    pub is_error: bool,
    pub message: String,
}

/// Status code plus optional JSON body, as written back to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    /// 200 with no body.
    pub fn empty() -> Self {
        Self {
            status: OK,
            body: None,
        }
    }

    /// 200 with a non-error message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::with_message(OK, false, message.into())
    }

    pub fn account(snapshot: &AccountSnapshot) -> Self {
        Self {
            status: OK,
            // Snapshot serialization is infallible.
            body: serde_json::to_value(snapshot).ok(),
        }
    }

    fn with_message(status: u16, is_error: bool, message: String) -> Self {
        let body = MessageBody { is_error, message };
        Self {
            status,
            body: serde_json::to_value(body).ok(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as an error/acknowledgement message.
    pub fn message_body(&self) -> Option<MessageBody> {
        self.body
            .clone()
            .and_then(|body| serde_json::from_value(body).ok())
    }

    /// Decode the body as an account snapshot.
    pub fn account_body(&self) -> Option<AccountSnapshot> {
        self.body
            .clone()
            .and_then(|body| serde_json::from_value(body).ok())
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self::with_message(err.status(), true, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atm::AtmError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_response_shape() {
        let response = ApiResponse::from(ApiError::from(AtmError::InvalidCredentials));
        assert_eq!(response.status, 400);
        assert_eq!(
            response.body,
            Some(serde_json::json!({
                "isError": true,
                "message": "Invalid Account Number/PIN"
            }))
        );
        assert!(!response.is_success());
    }

    #[test]
    fn test_empty_response_omits_body() {
        let line = serde_json::to_string(&ApiResponse::empty()).unwrap();
        assert_eq!(line, r#"{"status":200}"#);
    }

    #[test]
    fn test_account_response_round_trips_snapshot() {
        let snapshot = AccountSnapshot {
            name: "Jane Doe".to_string(),
            account_number: "112244".to_string(),
            balance: dec!(120),
        };
        let response = ApiResponse::account(&snapshot);
        assert!(response.is_success());
        assert_eq!(response.account_body(), Some(snapshot));
    }

    #[test]
    fn test_message_response() {
        let response = ApiResponse::message("Logout success");
        assert_eq!(
            response.message_body(),
            Some(MessageBody {
                is_error: false,
                message: "Logout success".to_string()
            })
        );
    }
}
