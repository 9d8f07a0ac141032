//! Twilio REST resources, as much of them as twerp displays.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Call {
    pub sid: String,
    pub from: String,
    pub to: String,
    pub status: String,
    pub direction: String,
    pub duration: Option<String>,
    pub start_time: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Message {
    pub sid: String,
    pub from: String,
    pub to: String,
    pub body: String,
    pub status: String,
    pub direction: String,
    pub date_sent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct IncomingNumber {
    pub sid: String,
    pub phone_number: String,
    pub friendly_name: String,
    pub voice_url: Option<String>,
    pub sms_url: Option<String>,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AvailableNumber {
    pub phone_number: String,
    pub friendly_name: String,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Application {
    pub sid: String,
    pub friendly_name: String,
    pub voice_url: Option<String>,
    pub sms_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Conference {
    pub sid: String,
    pub friendly_name: String,
    pub status: String,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Participant {
    pub call_sid: String,
    pub conference_sid: String,
    pub muted: bool,
    pub hold: bool,
}

/// API notification. `log` is `"0"` for errors and `"1"` for warnings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Notification {
    pub sid: String,
    pub log: String,
    pub error_code: Option<String>,
    pub message_text: Option<String>,
    pub message_date: Option<String>,
    pub more_info: Option<String>,
    pub request_url: Option<String>,
}

impl Notification {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.log == "0"
    }
}

// List envelopes. Twilio names the collection after the resource.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CallList {
    pub calls: Vec<Call>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MessageList {
    pub messages: Vec<Message>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct IncomingNumberList {
    pub incoming_phone_numbers: Vec<IncomingNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AvailableNumberList {
    pub available_phone_numbers: Vec<AvailableNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApplicationList {
    pub applications: Vec<Application>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConferenceList {
    pub conferences: Vec<Conference>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ParticipantList {
    pub participants: Vec<Participant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NotificationList {
    pub notifications: Vec<Notification>,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiErrorBody {
    pub code: Option<u32>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_list() {
        let json = r#"{
            "calls": [{
                "sid": "CA1234567890abcdef",
                "from": "+14155551212",
                "to": "+12135551212",
                "status": "in-progress",
                "direction": "outbound-api",
                "duration": null,
                "start_time": "Tue, 10 Aug 2010 08:02:17 +0000"
            }],
            "page": 0
        }"#;
        let list: CallList = serde_json::from_str(json).unwrap();
        assert_eq!(list.calls.len(), 1);
        assert_eq!(list.calls[0].status, "in-progress");
        assert!(list.calls[0].duration.is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let message: Message = serde_json::from_str(r#"{"sid": "SM1"}"#).unwrap();
        assert_eq!(message.sid, "SM1");
        assert!(message.body.is_empty());
    }

    #[test]
    fn test_notification_error_level() {
        let notification: Notification =
            serde_json::from_str(r#"{"sid": "NO1", "log": "0", "error_code": "11200"}"#).unwrap();
        assert!(notification.is_error());
        assert_eq!(notification.error_code.as_deref(), Some("11200"));
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code": 20404, "message": "Not Found", "status": 404}"#)
                .unwrap();
        assert_eq!(body.code, Some(20404));
        assert_eq!(body.message, "Not Found");
    }
}
