//! Telephony client: the remote side of every twerp command.

mod error;
mod rest;
mod twimlets;
mod types;

use async_trait::async_trait;

pub use error::TelephonyError;
pub use rest::*;
pub use twimlets::{forward_url, message_url, TWIMLETS_BASE};
pub use types::{
    Application, AvailableNumber, Call, Conference, IncomingNumber, Message, Notification,
    Participant,
};

/// Remote operations twerp can perform against a telephony account.
///
/// Implementations print their own results; callers only see success or a
/// [`TelephonyError`].
#[async_trait]
pub trait TelephonyClient: Send + Sync {
    async fn list_numbers(&self, verbose: bool) -> Result<(), TelephonyError>;

    /// Place a call to each number and return the SID of the last one placed.
    async fn call_numbers(
        &self,
        numbers: &[String],
        verbose: bool,
        callerid: Option<&str>,
        url: Option<&str>,
        say: Option<&str>,
    ) -> Result<String, TelephonyError>;

    async fn purchase_number(&self, number: &str) -> Result<(), TelephonyError>;

    async fn numbers_contain_areacode(
        &self,
        area_code: &str,
        contains: &str,
    ) -> Result<(), TelephonyError>;

    async fn numbers_contain(&self, contains: &str) -> Result<(), TelephonyError>;

    async fn search_numbers(&self, area_code: &str) -> Result<(), TelephonyError>;

    async fn list_applications(&self) -> Result<(), TelephonyError>;

    async fn list_conference_participants(&self) -> Result<(), TelephonyError>;

    async fn list_conferences(&self) -> Result<(), TelephonyError>;

    async fn list_sms(&self) -> Result<(), TelephonyError>;

    async fn get_sms_sid(&self, sid: &str) -> Result<(), TelephonyError>;

    async fn send_sms(
        &self,
        numbers: &[String],
        message: Option<&str>,
        verbose: bool,
    ) -> Result<(), TelephonyError>;

    async fn notifications(&self, verbose: bool) -> Result<(), TelephonyError>;

    /// Show details for one call.
    async fn sid_call(&self, sid: &str) -> Result<(), TelephonyError>;

    async fn hangup(&self, sid: &str) -> Result<(), TelephonyError>;

    /// Hang up every call in progress on the account.
    async fn hangup_all_calls(&self) -> Result<(), TelephonyError>;

    /// List calls in progress on the account.
    async fn list_calls(&self) -> Result<(), TelephonyError>;

    /// Redirect a live call to the TwiML at `url`.
    async fn call_url(&self, sid: &str, url: &str) -> Result<(), TelephonyError>;
}
