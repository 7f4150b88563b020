use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Authorization state of notifications for this app, as reported by the OS.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// The user declined, asking again is a no-op on every platform.
    Denied,
    /// Notifications are fully granted.
    Authorized,
    /// Quiet delivery only (iOS).
    Provisional,
    /// Temporary authorization for App Clips (iOS).
    Ephemeral,
}

impl AuthorizationStatus {
    /// Only [AuthorizationStatus::Authorized] is considered granted for push delivery.
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthorizationStatus::Authorized)
    }
}

/// iOS specific capabilities requested along with notification permission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[allow(missing_docs)]
pub struct IosPermissionRequest {
    pub allow_alert: bool,
    pub allow_badge: bool,
    pub allow_sound: bool,
    pub allow_critical_alerts: bool,
    pub allow_announcements: bool,
    pub allow_display_in_car_play: bool,
    pub provide_app_notification_settings: bool,
    pub allow_provisional: bool,
}

impl Default for IosPermissionRequest {
    fn default() -> Self {
        Self {
            allow_alert: true,
            allow_badge: true,
            allow_sound: true,
            allow_critical_alerts: true,
            allow_announcements: true,
            allow_display_in_car_play: false,
            provide_app_notification_settings: false,
            allow_provisional: false,
        }
    }
}

/// Capabilities to request from the OS. Platforms without extra options use the OS default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct PermissionRequest {
    #[allow(missing_docs)]
    pub ios: Option<IosPermissionRequest>,
}

/// Importance of an Android notification channel.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[allow(missing_docs)]
pub enum AndroidImportance {
    Min,
    Low,
    Default,
    High,
    Max,
}

/// Android notification channel descriptor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[allow(missing_docs)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub importance: AndroidImportance,
    pub vibration_pattern: Vec<u32>,
    pub light_color: String,
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self {
            id: "default".to_owned(),
            name: "default".to_owned(),
            importance: AndroidImportance::Max,
            vibration_pattern: vec![0, 250, 250, 250],
            light_color: "#FF231F7C".to_owned(),
        }
    }
}

/// Notification permission and push token provisioning, implemented by the host application.
#[cfg_attr(feature = "uniffi", uniffi::export(with_foreign))]
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    /// Create or update a notification channel. Calling it repeatedly with the same channel
    /// must be harmless.
    async fn set_notification_channel(
        &self,
        channel: NotificationChannel,
    ) -> Result<(), PlatformError>;

    /// Current authorization state, without prompting the user.
    async fn get_permissions(&self) -> Result<AuthorizationStatus, PlatformError>;

    /// Prompt the user for permission and return the resulting state.
    async fn request_permissions(
        &self,
        request: PermissionRequest,
    ) -> Result<AuthorizationStatus, PlatformError>;

    /// Fetch the push token issued by the platform notification service.
    async fn get_push_token(&self) -> Result<String, PlatformError>;
}
