//! Configuration types.

use serde::{Deserialize, Serialize};

/// Account and API settings for twerp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwerpConfig {
    /// Account SID. Overridden by the `account_sid_env` variable when set.
    pub account_sid: Option<String>,
    /// Auth token. Overridden by the `auth_token_env` variable when set.
    pub auth_token: Option<String>,
    /// Environment variable holding the account SID.
    pub account_sid_env: String,
    /// Environment variable holding the auth token.
    pub auth_token_env: String,
    /// Base URL of the REST API, without trailing slash.
    pub base_url: String,
    /// Default number to call or text from when `--callerid` is absent.
    pub caller_id: Option<String>,
    /// ISO country used when searching for numbers to buy.
    pub country: String,
}

fn default_account_sid_env() -> String {
    "TWILIO_ACCOUNT_SID".to_string()
}

fn default_auth_token_env() -> String {
    "TWILIO_AUTH_TOKEN".to_string()
}

fn default_base_url() -> String {
    "https://api.twilio.com/2010-04-01".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

impl Default for TwerpConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            account_sid_env: default_account_sid_env(),
            auth_token_env: default_auth_token_env(),
            base_url: default_base_url(),
            caller_id: None,
            country: default_country(),
        }
    }
}

impl TwerpConfig {
    /// Account SID, preferring the environment over the file.
    #[must_use]
    pub fn resolved_account_sid(&self) -> Option<String> {
        env_or(&self.account_sid_env, self.account_sid.as_ref())
    }

    /// Auth token, preferring the environment over the file.
    #[must_use]
    pub fn resolved_auth_token(&self) -> Option<String> {
        env_or(&self.auth_token_env, self.auth_token.as_ref())
    }
}

fn env_or(var: &str, fallback: Option<&String>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TwerpConfig::default();
        assert_eq!(config.base_url, "https://api.twilio.com/2010-04-01");
        assert_eq!(config.account_sid_env, "TWILIO_ACCOUNT_SID");
        assert_eq!(config.auth_token_env, "TWILIO_AUTH_TOKEN");
        assert_eq!(config.country, "US");
        assert!(config.caller_id.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
            account_sid = "AC123"
            caller_id = "+14155551212"
        "#;
        let config: TwerpConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.account_sid.as_deref(), Some("AC123"));
        assert_eq!(config.caller_id.as_deref(), Some("+14155551212"));
        assert_eq!(config.country, "US");
    }

    #[test]
    fn test_env_overrides_file_credentials() {
        std::env::set_var("TWERP_TEST_SID_OVERRIDE", "ACfromenv");
        let config = TwerpConfig {
            account_sid: Some("ACfromfile".to_string()),
            account_sid_env: "TWERP_TEST_SID_OVERRIDE".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved_account_sid().as_deref(), Some("ACfromenv"));
        std::env::remove_var("TWERP_TEST_SID_OVERRIDE");
    }

    #[test]
    fn test_file_credentials_used_without_env() {
        let config = TwerpConfig {
            auth_token: Some("secret".to_string()),
            auth_token_env: "TWERP_TEST_TOKEN_UNSET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved_auth_token().as_deref(), Some("secret"));
    }
}
