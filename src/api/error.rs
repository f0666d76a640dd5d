use crate::atm::{AtmError, BAD_REQUEST};

pub const OK: u16 = 200;
pub const UNAUTHORIZED: u16 = 401;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;

/// Failures reported by the request layer, each with its own status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] AtmError),

    #[error("Failed unmarshalling json : {0}")]
    MalformedBody(String),

    /// Query amount that is not a whole number.
    #[error("Invalid ammount")]
    InvalidAmountParameter,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Domain(err) => err.status(),
            ApiError::MalformedBody(_) | ApiError::InvalidAmountParameter => BAD_REQUEST,
            ApiError::Unauthorized => UNAUTHORIZED,
            ApiError::NotFound => NOT_FOUND,
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}
