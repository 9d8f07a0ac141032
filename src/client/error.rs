//! Telephony client error types.

/// Errors surfaced by a [`TelephonyClient`](super::TelephonyClient).
#[derive(thiserror::Error, Debug)]
pub enum TelephonyError {
    /// Account SID or auth token not configured.
    #[error("Twilio credentials not configured (set {sid_env} and {token_env})")]
    MissingCredentials { sid_env: String, token_env: String },

    /// No caller id on the command line or in the config file.
    #[error("No caller id: pass --callerid or set caller_id in the config file")]
    MissingCallerId,

    /// Dial or SMS invoked with an empty destination list.
    #[error("No destination numbers given")]
    NoDestinations,

    /// Dial invoked with neither a TwiML URL nor text to say.
    #[error("A call needs a TwiML URL or text to say")]
    MissingTwiml,

    /// SMS invoked without a message body.
    #[error("No message text: pass --message")]
    MissingMessage,

    /// HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Transport-level request failure.
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// The API answered with a non-success status.
    #[error("Twilio API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request exceeded the configured timeout.
    #[error("Twilio API request timed out")]
    Timeout,
}
