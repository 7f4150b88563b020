use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the target and behavior of the
/// Pushify Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use pushify_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "http://localhost:3000".to_string(),
///     user_agent: "Pushify Rust-SDK".to_string(),
///     client_version: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ClientSettings {
    /// The api url of the targeted Pushify instance. Defaults to `http://localhost:3000`
    pub api_url: String,
    /// The user_agent to sent to Pushify. Defaults to `Pushify Rust-SDK`
    pub user_agent: String,
    /// Pushify Client Version to send to Pushify.
    pub client_version: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".into(),
            user_agent: "Pushify Rust-SDK".into(),
            client_version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: ClientSettings =
            serde_json::from_str(r#"{"apiUrl":"https://push.example.com"}"#).unwrap();

        assert_eq!(settings.api_url, "https://push.example.com");
        assert_eq!(settings.user_agent, "Pushify Rust-SDK");
        assert!(settings.client_version.is_none());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<ClientSettings>(r#"{"identityUrl":"x"}"#);
        assert!(result.is_err());
    }
}
