//! Request layer.
//!
//! Maps the ATM endpoints onto `AccountService` operations without tying
//! them to a transport:
//! - `AtmApi` - Endpoint dispatch and request-script replay
//! - `Session` - Per-client authentication state
//! - `ApiRequest` / `ApiResponse` - Request and JSON response shapes

mod error;
mod handler;
mod request;
mod response;
mod session;

pub use error::{ApiError, METHOD_NOT_ALLOWED, NOT_FOUND, OK, UNAUTHORIZED};
pub use handler::{
    AtmApi, RunSummary, BALANCE_PATH, DEFAULT_SESSION, EXIT_PATH, TRANSFER_PATH, VALIDATE_PATH,
    WITHDRAW_PATH,
};
pub use request::{ApiRequest, Method};
pub use response::{ApiResponse, MessageBody};
pub use session::Session;
