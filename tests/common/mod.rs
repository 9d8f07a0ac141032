//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use twerp::client::{TelephonyClient, TelephonyError};

/// SID returned by [`RecordingClient::call_numbers`].
pub const DIALED_SID: &str = "CAfeedface0123456789";

/// Fake client that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every method fails with an HTTP 500.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), TelephonyError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(TelephonyError::Http {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TelephonyClient for RecordingClient {
    async fn list_numbers(&self, verbose: bool) -> Result<(), TelephonyError> {
        self.record(format!("list_numbers({verbose})"))
    }

    async fn call_numbers(
        &self,
        numbers: &[String],
        verbose: bool,
        callerid: Option<&str>,
        url: Option<&str>,
        say: Option<&str>,
    ) -> Result<String, TelephonyError> {
        self.record(format!(
            "call_numbers({numbers:?}, {verbose}, {callerid:?}, {url:?}, {say:?})"
        ))?;
        Ok(DIALED_SID.to_string())
    }

    async fn purchase_number(&self, number: &str) -> Result<(), TelephonyError> {
        self.record(format!("purchase_number({number})"))
    }

    async fn numbers_contain_areacode(
        &self,
        area_code: &str,
        contains: &str,
    ) -> Result<(), TelephonyError> {
        self.record(format!("numbers_contain_areacode({area_code}, {contains})"))
    }

    async fn numbers_contain(&self, contains: &str) -> Result<(), TelephonyError> {
        self.record(format!("numbers_contain({contains})"))
    }

    async fn search_numbers(&self, area_code: &str) -> Result<(), TelephonyError> {
        self.record(format!("search_numbers({area_code})"))
    }

    async fn list_applications(&self) -> Result<(), TelephonyError> {
        self.record("list_applications()".to_string())
    }

    async fn list_conference_participants(&self) -> Result<(), TelephonyError> {
        self.record("list_conference_participants()".to_string())
    }

    async fn list_conferences(&self) -> Result<(), TelephonyError> {
        self.record("list_conferences()".to_string())
    }

    async fn list_sms(&self) -> Result<(), TelephonyError> {
        self.record("list_sms()".to_string())
    }

    async fn get_sms_sid(&self, sid: &str) -> Result<(), TelephonyError> {
        self.record(format!("get_sms_sid({sid})"))
    }

    async fn send_sms(
        &self,
        numbers: &[String],
        message: Option<&str>,
        verbose: bool,
    ) -> Result<(), TelephonyError> {
        self.record(format!("send_sms({numbers:?}, {message:?}, {verbose})"))
    }

    async fn notifications(&self, verbose: bool) -> Result<(), TelephonyError> {
        self.record(format!("notifications({verbose})"))
    }

    async fn sid_call(&self, sid: &str) -> Result<(), TelephonyError> {
        self.record(format!("sid_call({sid})"))
    }

    async fn hangup(&self, sid: &str) -> Result<(), TelephonyError> {
        self.record(format!("hangup({sid})"))
    }

    async fn hangup_all_calls(&self) -> Result<(), TelephonyError> {
        self.record("hangup_all_calls()".to_string())
    }

    async fn list_calls(&self) -> Result<(), TelephonyError> {
        self.record("list_calls()".to_string())
    }

    async fn call_url(&self, sid: &str, url: &str) -> Result<(), TelephonyError> {
        self.record(format!("call_url({sid}, {url})"))
    }
}
