//! URLs for hosted twimlets (canned TwiML scripts).

/// Base of the hosted twimlet service.
pub const TWIMLETS_BASE: &str = "http://twimlets.com";

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Twimlet that forwards the call to `number`.
#[must_use]
pub fn forward_url(number: &str) -> String {
    format!("{TWIMLETS_BASE}/forward?PhoneNumber={}", encode(number))
}

/// Twimlet that speaks `text` to the callee.
#[must_use]
pub fn message_url(text: &str) -> String {
    format!("{TWIMLETS_BASE}/message?Message%5B0%5D={}", encode(text))
}
