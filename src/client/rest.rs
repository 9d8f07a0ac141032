//! Twilio REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::twimlets::message_url;
use super::types::{
    ApiErrorBody, ApplicationList, AvailableNumberList, Call, CallList, Conference,
    ConferenceList, IncomingNumber, IncomingNumberList, Message, MessageList, NotificationList,
    ParticipantList,
};
use super::{TelephonyClient, TelephonyError};
use crate::config::TwerpConfig;
use crate::display;

/// Connection timeout for HTTP requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout for HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of retries for transient failures.
const MAX_RETRIES: u32 = 3;

fn build_http_client() -> Result<Client, TelephonyError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| TelephonyError::Client(e.to_string()))
}

/// Determine if a request should be retried based on status code and attempt count.
fn should_retry(status_code: u16, attempt: u32) -> bool {
    if attempt >= MAX_RETRIES {
        return false;
    }
    (500..600).contains(&status_code)
}

/// Exponential backoff: 1s, 2s, 4s.
fn calculate_backoff(attempt: u32) -> Duration {
    Duration::from_secs(1 << attempt)
}

fn request_error(e: &reqwest::Error) -> TelephonyError {
    if e.is_timeout() {
        TelephonyError::Timeout
    } else {
        TelephonyError::RequestFailed(e.to_string())
    }
}

async fn api_error(response: Response) -> TelephonyError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(ApiErrorBody {
            code: Some(code),
            message,
        }) => format!("{message} (code {code})"),
        Ok(body) if !body.message.is_empty() => body.message,
        _ => text,
    };
    TelephonyError::Http { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TelephonyError> {
    response
        .json()
        .await
        .map_err(|e| TelephonyError::ParseError(e.to_string()))
}

#[derive(Debug, Clone)]
struct Credentials {
    account_sid: String,
    auth_token: String,
}

/// [`TelephonyClient`] backed by the Twilio 2010-04-01 REST API.
///
/// Credentials are checked per request, so commands that never reach the API
/// work without them.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
    sid_env: String,
    token_env: String,
    caller_id: Option<String>,
    country: String,
}

impl RestClient {
    /// Create a client from configuration and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TelephonyError::Client`] if the HTTP client cannot be built.
    pub fn from_config(config: &TwerpConfig) -> Result<Self, TelephonyError> {
        let credentials = match (config.resolved_account_sid(), config.resolved_auth_token()) {
            (Some(account_sid), Some(auth_token)) => Some(Credentials {
                account_sid,
                auth_token,
            }),
            _ => None,
        };

        Ok(Self {
            http: build_http_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            sid_env: config.account_sid_env.clone(),
            token_env: config.auth_token_env.clone(),
            caller_id: config.caller_id.clone(),
            country: config.country.clone(),
        })
    }

    /// Whether an account SID and auth token are available.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> Result<&Credentials, TelephonyError> {
        self.credentials
            .as_ref()
            .ok_or_else(|| TelephonyError::MissingCredentials {
                sid_env: self.sid_env.clone(),
                token_env: self.token_env.clone(),
            })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<RequestBuilder, TelephonyError> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/Accounts/{}/{path}",
            self.base_url, credentials.account_sid
        );
        Ok(self
            .http
            .request(method, url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token)))
    }

    /// GET a resource, retrying server errors.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TelephonyError> {
        let mut attempt = 0;
        loop {
            tracing::debug!(path, attempt, "GET");
            let response = self
                .request(reqwest::Method::GET, path)?
                .query(query)
                .send()
                .await
                .map_err(|e| request_error(&e))?;

            let status = response.status();
            if status.is_success() {
                return decode(response).await;
            }

            if should_retry(status.as_u16(), attempt) {
                let backoff = calculate_backoff(attempt);
                tracing::warn!(path, status = status.as_u16(), ?backoff, "Retrying request");
                tokio::time::sleep(backoff).await;
                attempt += 1;
                continue;
            }

            return Err(api_error(response).await);
        }
    }

    /// POST a form. Never retried: a repeated POST may dial or charge twice.
    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, TelephonyError> {
        tracing::debug!(path, "POST");
        let response = self
            .request(reqwest::Method::POST, path)?
            .form(form)
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        if response.status().is_success() {
            decode(response).await
        } else {
            Err(api_error(response).await)
        }
    }

    fn from_number<'a>(&'a self, callerid: Option<&'a str>) -> Result<&'a str, TelephonyError> {
        callerid
            .filter(|c| !c.is_empty())
            .or(self.caller_id.as_deref())
            .ok_or(TelephonyError::MissingCallerId)
    }

    async fn in_progress_calls(&self) -> Result<Vec<Call>, TelephonyError> {
        let list: CallList = self
            .get("Calls.json", &[("Status", "in-progress")])
            .await?;
        Ok(list.calls)
    }

    async fn in_progress_conferences(&self) -> Result<Vec<Conference>, TelephonyError> {
        let list: ConferenceList = self
            .get("Conferences.json", &[("Status", "in-progress")])
            .await?;
        Ok(list.conferences)
    }

    async fn search(&self, query: &[(&str, &str)]) -> Result<(), TelephonyError> {
        let path = format!("AvailablePhoneNumbers/{}/Local.json", self.country);
        let list: AvailableNumberList = self.get(&path, query).await?;
        if list.available_phone_numbers.is_empty() {
            display::print_empty("matching numbers available");
        }
        for number in &list.available_phone_numbers {
            display::print_available(number);
        }
        Ok(())
    }
}

#[async_trait]
impl TelephonyClient for RestClient {
    async fn list_numbers(&self, verbose: bool) -> Result<(), TelephonyError> {
        let list: IncomingNumberList = self.get("IncomingPhoneNumbers.json", &[]).await?;
        if list.incoming_phone_numbers.is_empty() {
            display::print_empty("phone numbers");
        }
        for number in &list.incoming_phone_numbers {
            display::print_number(number, verbose);
        }
        Ok(())
    }

    async fn call_numbers(
        &self,
        numbers: &[String],
        verbose: bool,
        callerid: Option<&str>,
        url: Option<&str>,
        say: Option<&str>,
    ) -> Result<String, TelephonyError> {
        if numbers.is_empty() {
            return Err(TelephonyError::NoDestinations);
        }
        let from = self.from_number(callerid)?;
        let twiml = match (url.filter(|u| !u.is_empty()), say.filter(|s| !s.is_empty())) {
            (Some(url), _) => url.to_string(),
            (None, Some(text)) => message_url(text),
            (None, None) => return Err(TelephonyError::MissingTwiml),
        };

        let mut last_sid = String::new();
        for to in numbers {
            let call: Call = self
                .post(
                    "Calls.json",
                    &[("To", to.as_str()), ("From", from), ("Url", twiml.as_str())],
                )
                .await?;
            tracing::info!(sid = %call.sid, to = %to, "Call placed");
            display::print_dialed(&call, verbose);
            last_sid = call.sid;
        }
        Ok(last_sid)
    }

    async fn purchase_number(&self, number: &str) -> Result<(), TelephonyError> {
        let purchased: IncomingNumber = self
            .post("IncomingPhoneNumbers.json", &[("PhoneNumber", number)])
            .await?;
        tracing::info!(sid = %purchased.sid, number, "Number purchased");
        display::print_purchased(&purchased);
        Ok(())
    }

    async fn numbers_contain_areacode(
        &self,
        area_code: &str,
        contains: &str,
    ) -> Result<(), TelephonyError> {
        self.search(&[("AreaCode", area_code), ("Contains", contains)])
            .await
    }

    async fn numbers_contain(&self, contains: &str) -> Result<(), TelephonyError> {
        self.search(&[("Contains", contains)]).await
    }

    async fn search_numbers(&self, area_code: &str) -> Result<(), TelephonyError> {
        self.search(&[("AreaCode", area_code)]).await
    }

    async fn list_applications(&self) -> Result<(), TelephonyError> {
        let list: ApplicationList = self.get("Applications.json", &[]).await?;
        if list.applications.is_empty() {
            display::print_empty("applications");
        }
        for app in &list.applications {
            display::print_application(app);
        }
        Ok(())
    }

    async fn list_conference_participants(&self) -> Result<(), TelephonyError> {
        let conferences = self.in_progress_conferences().await?;
        if conferences.is_empty() {
            display::print_empty("conferences in progress");
        }
        for conference in &conferences {
            display::print_conference(conference);
            let path = format!("Conferences/{}/Participants.json", conference.sid);
            let list: ParticipantList = self.get(&path, &[]).await?;
            for participant in &list.participants {
                display::print_participant(participant);
            }
        }
        Ok(())
    }

    async fn list_conferences(&self) -> Result<(), TelephonyError> {
        let conferences = self.in_progress_conferences().await?;
        if conferences.is_empty() {
            display::print_empty("conferences in progress");
        }
        for conference in &conferences {
            display::print_conference(conference);
        }
        Ok(())
    }

    async fn list_sms(&self) -> Result<(), TelephonyError> {
        let list: MessageList = self.get("Messages.json", &[]).await?;
        if list.messages.is_empty() {
            display::print_empty("messages");
        }
        for message in &list.messages {
            display::print_message(message);
        }
        Ok(())
    }

    async fn get_sms_sid(&self, sid: &str) -> Result<(), TelephonyError> {
        let message: Message = self.get(&format!("Messages/{sid}.json"), &[]).await?;
        display::print_message_detail(&message);
        Ok(())
    }

    async fn send_sms(
        &self,
        numbers: &[String],
        message: Option<&str>,
        verbose: bool,
    ) -> Result<(), TelephonyError> {
        if numbers.is_empty() {
            return Err(TelephonyError::NoDestinations);
        }
        let body = message
            .filter(|m| !m.is_empty())
            .ok_or(TelephonyError::MissingMessage)?;
        let from = self.from_number(None)?;

        for to in numbers {
            let sent: Message = self
                .post(
                    "Messages.json",
                    &[("To", to.as_str()), ("From", from), ("Body", body)],
                )
                .await?;
            tracing::info!(sid = %sent.sid, to = %to, "SMS sent");
            display::print_sent(&sent, verbose);
        }
        Ok(())
    }

    async fn notifications(&self, verbose: bool) -> Result<(), TelephonyError> {
        let list: NotificationList = self.get("Notifications.json", &[]).await?;
        if list.notifications.is_empty() {
            display::print_empty("notifications");
        }
        for notification in &list.notifications {
            display::print_notification(notification, verbose);
        }
        Ok(())
    }

    async fn sid_call(&self, sid: &str) -> Result<(), TelephonyError> {
        let call: Call = self.get(&format!("Calls/{sid}.json"), &[]).await?;
        display::print_call_detail(&call);
        Ok(())
    }

    async fn hangup(&self, sid: &str) -> Result<(), TelephonyError> {
        let call: Call = self
            .post(&format!("Calls/{sid}.json"), &[("Status", "completed")])
            .await?;
        tracing::info!(sid = %call.sid, "Call hung up");
        display::print_hangup(&call.sid);
        Ok(())
    }

    async fn hangup_all_calls(&self) -> Result<(), TelephonyError> {
        let calls = self.in_progress_calls().await?;
        if calls.is_empty() {
            display::print_empty("calls in progress");
        }
        for call in &calls {
            self.hangup(&call.sid).await?;
        }
        Ok(())
    }

    async fn list_calls(&self) -> Result<(), TelephonyError> {
        let calls = self.in_progress_calls().await?;
        if calls.is_empty() {
            display::print_empty("calls in progress");
        }
        for call in &calls {
            display::print_call(call);
        }
        Ok(())
    }

    async fn call_url(&self, sid: &str, url: &str) -> Result<(), TelephonyError> {
        let call: Call = self
            .post(
                &format!("Calls/{sid}.json"),
                &[("Url", url), ("Method", "GET")],
            )
            .await?;
        tracing::info!(sid = %call.sid, url, "Call redirected");
        display::print_redirect(&call.sid, url);
        Ok(())
    }
}
