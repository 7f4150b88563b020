use serde::{Deserialize, Serialize};

use super::DeviceClass;
use crate::error::PlatformError;

/// Static information about the device, read from the OS.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DeviceDetails {
    /// Name the user gave the device in the OS settings.
    pub device_name: Option<String>,
    #[allow(missing_docs)]
    pub device_class: DeviceClass,
    /// Estimated year the device hardware was released.
    pub device_year_class: Option<u32>,
    #[allow(missing_docs)]
    pub manufacturer: Option<String>,
    #[allow(missing_docs)]
    pub model_name: Option<String>,
    #[allow(missing_docs)]
    pub os_name: Option<String>,
    #[allow(missing_docs)]
    pub os_version: Option<String>,
    /// `false` on simulators and emulators, which cannot receive push notifications.
    pub is_physical_device: bool,
}

/// Device introspection, implemented by the host application.
#[cfg_attr(feature = "uniffi", uniffi::export(with_foreign))]
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DeviceIntrospection: Send + Sync {
    /// Hardware and OS details of the current device.
    fn device_details(&self) -> DeviceDetails;

    /// Persistent identifier scoped to this app installation. It must stay stable across app
    /// launches and is independent from the push token.
    async fn unique_device_id(&self) -> Result<String, PlatformError>;
}
