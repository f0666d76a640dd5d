use std::collections::HashMap;
use std::io::{BufRead, Write};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use super::request::{ApiRequest, Method};
use super::response::ApiResponse;
use super::session::Session;
use crate::atm::{AccountService, Decimal, Error, TransferRequest};

pub const VALIDATE_PATH: &str = "/api/v1/account/validate";
pub const WITHDRAW_PATH: &str = "/api/v1/account/withdraw";
pub const BALANCE_PATH: &str = "/api/v1/account/balance";
pub const TRANSFER_PATH: &str = "/api/v1/account/transfer";
pub const EXIT_PATH: &str = "/api/v1/account/exit";

/// Session name used for requests that do not name one.
pub const DEFAULT_SESSION: &str = "default";

/// Body of a PIN validation request. Only the credentials are read; the
/// `name` and `balance` fields clients send along are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Credentials {
    #[serde(default)]
    account_number: String,
    #[serde(default)]
    pin: String,
}

/// Counters from replaying a request script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: u64,
    pub failed: u64,
}

/// Maps ATM requests onto [`AccountService`] operations.
#[derive(Debug, Default)]
pub struct AtmApi {
    service: AccountService,
}

impl AtmApi {
    pub fn new(service: AccountService) -> Self {
        log::trace!("AtmApi initialized");
        Self { service }
    }

    pub fn service(&self) -> &AccountService {
        &self.service
    }

    /// Handle one request in the context of `session`.
    pub fn handle(&self, session: &mut Session, request: &ApiRequest) -> ApiResponse {
        log::trace!("Handling {request}");
        match self.dispatch(session, request) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{request} - Rejected ({}): {e}", e.status());
                e.into()
            }
        }
    }

    /// Replay newline-delimited JSON requests from `reader`, writing one JSON
    /// response per request to `writer`.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line that is not
    /// a valid request produces a 400 response; processing continues.
    pub fn process_requests<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<RunSummary, Error> {
        log::info!("Starting request processing");

        let mut sessions: HashMap<String, Session> = HashMap::new();
        let mut summary = RunSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_num = index + 1;

            let response = match serde_json::from_str::<ApiRequest>(line) {
                Ok(request) => {
                    let key = request.session.as_deref().unwrap_or(DEFAULT_SESSION);
                    let session = sessions.entry(key.to_string()).or_default();
                    self.handle(session, &request)
                }
                Err(e) => {
                    log::warn!("[line {line_num}] - Malformed request: {e}");
                    ApiError::from(e).into()
                }
            };

            if response.is_success() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }

            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        log::info!(
            "Processing complete: {} succeeded, {} failed, {} sessions",
            summary.succeeded,
            summary.failed,
            sessions.len()
        );
        Ok(summary)
    }

    fn dispatch(&self, session: &mut Session, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        match (request.route(), request.method) {
            (VALIDATE_PATH, Method::Post) => self.validate(session, request),
            (WITHDRAW_PATH, Method::Get) => self.withdraw(session, request),
            (BALANCE_PATH, Method::Get) => self.balance(session),
            (TRANSFER_PATH, Method::Post) => self.transfer(session, request),
            (EXIT_PATH, Method::Get) => Ok(Self::exit(session)),
            (VALIDATE_PATH | WITHDRAW_PATH | BALANCE_PATH | TRANSFER_PATH | EXIT_PATH, _) => {
                Err(ApiError::MethodNotAllowed)
            }
            _ => Err(ApiError::NotFound),
        }
    }
}

// =============================================================================
// Endpoint Handlers
// =============================================================================

impl AtmApi {
    fn validate(&self, session: &mut Session, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let credentials: Credentials = parse_body(request)?;
        self.service
            .validate_pin(&credentials.account_number, &credentials.pin)?;

        session.login(credentials.account_number);
        log::info!(
            "[validate] session authenticated for account {}",
            session.account_number().unwrap_or_default()
        );
        Ok(ApiResponse::empty())
    }

    fn withdraw(&self, session: &Session, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let account_number = require_login(session)?;
        let amount: i64 = request
            .query("amount")
            .and_then(|amount| amount.parse().ok())
            .ok_or(ApiError::InvalidAmountParameter)?;

        let snapshot = self.service.withdraw(account_number, Decimal::from(amount))?;
        Ok(ApiResponse::account(&snapshot))
    }

    fn balance(&self, session: &Session) -> Result<ApiResponse, ApiError> {
        let account_number = require_login(session)?;
        let snapshot = self.service.balance_check(account_number)?;
        Ok(ApiResponse::account(&snapshot))
    }

    fn transfer(&self, session: &Session, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let account_number = require_login(session)?;
        let mut transfer: TransferRequest = parse_body(request)?;
        // The source is always the logged-in account, whatever the body says.
        transfer.from_account_number = account_number.to_string();

        let snapshot = self.service.transfer(&transfer)?;
        Ok(ApiResponse::account(&snapshot))
    }

    fn exit(session: &mut Session) -> ApiResponse {
        if let Some(account_number) = session.account_number() {
            log::info!("[exit] session closed for account {account_number}");
        }
        session.logout();
        ApiResponse::message("Logout success")
    }
}

fn require_login(session: &Session) -> Result<&str, ApiError> {
    session.account_number().ok_or(ApiError::Unauthorized)
}

fn parse_body<T: DeserializeOwned>(request: &ApiRequest) -> Result<T, ApiError> {
    let body = request.body.clone().unwrap_or_default();
    Ok(serde_json::from_value(body)?)
}
