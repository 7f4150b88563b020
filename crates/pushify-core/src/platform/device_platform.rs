use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::notifications::{IosPermissionRequest, NotificationChannel, PermissionRequest};

/// The operating system the SDK is running on. Resolved once when the host constructs its
/// [PlatformServices](super::PlatformServices), every platform specific behavior of the
/// registration workflow is derived from it.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum DevicePlatform {
    #[allow(missing_docs)]
    Ios,
    #[allow(missing_docs)]
    Android,
    #[allow(missing_docs)]
    Web,
    #[allow(missing_docs)]
    MacOs,
    #[allow(missing_docs)]
    Windows,
}

impl DevicePlatform {
    /// Android requires a notification channel to exist before notifications can be shown.
    pub fn requires_notification_channel(&self) -> bool {
        matches!(self, DevicePlatform::Android)
    }

    /// Channel to create before asking for permission, if the platform uses channels.
    pub fn notification_channel(&self) -> Option<NotificationChannel> {
        self.requires_notification_channel()
            .then(NotificationChannel::default)
    }

    /// Whether the setup flow asks the user to name the device before registering it.
    pub fn prompts_for_device_name(&self) -> bool {
        matches!(self, DevicePlatform::Ios)
    }

    /// The set of notification capabilities requested from the OS.
    pub fn permission_request(&self) -> PermissionRequest {
        match self {
            DevicePlatform::Ios => PermissionRequest {
                ios: Some(IosPermissionRequest::default()),
            },
            DevicePlatform::Android
            | DevicePlatform::Web
            | DevicePlatform::MacOs
            | DevicePlatform::Windows => PermissionRequest { ios: None },
        }
    }
}

impl fmt::Display for DevicePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DevicePlatform::Ios => "IOS",
            DevicePlatform::Android => "ANDROID",
            DevicePlatform::Web => "WEB",
            DevicePlatform::MacOs => "MACOS",
            DevicePlatform::Windows => "WINDOWS",
        };
        write!(f, "{}", s)
    }
}

/// Physical class of the device as reported by the OS.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[allow(missing_docs)]
pub enum DeviceClass {
    #[default]
    Unknown,
    Phone,
    Tablet,
    Desktop,
    Tv,
}

/// Device category sent to the Pushify API.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[allow(missing_docs)]
pub enum DeviceType {
    Phone,
    Tablet,
    Desktop,
    Tv,
    Unknown,
}

impl From<DeviceClass> for DeviceType {
    fn from(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Phone => DeviceType::Phone,
            DeviceClass::Tablet => DeviceType::Tablet,
            DeviceClass::Desktop => DeviceType::Desktop,
            DeviceClass::Tv => DeviceType::Tv,
            DeviceClass::Unknown => DeviceType::Unknown,
        }
    }
}
