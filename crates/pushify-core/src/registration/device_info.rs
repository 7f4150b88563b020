use serde::{Deserialize, Serialize};

use crate::platform::{DeviceDetails, DevicePlatform, DeviceType};

/// Name used when neither the user nor the OS provides one.
pub const UNKNOWN_DEVICE_NAME: &str = "Unknown Device";

/// Device metadata submitted to `POST /device`.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_name: String,
    pub device_type: DeviceType,
    pub device_platform: DevicePlatform,
    pub device_year_class: Option<u32>,
    pub device_manufacturer: Option<String>,
    pub device_model_name: Option<String>,
    pub device_os_name: Option<String>,
    pub device_os_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
    pub unique_device_id: String,
}

impl DeviceInfo {
    pub(crate) fn assemble(
        platform: DevicePlatform,
        details: DeviceDetails,
        device_name: Option<String>,
        push_token: Option<String>,
        unique_device_id: String,
    ) -> Self {
        Self {
            device_name: resolve_device_name(device_name, details.device_name),
            device_type: details.device_class.into(),
            device_platform: platform,
            device_year_class: details.device_year_class,
            device_manufacturer: details.manufacturer,
            device_model_name: details.model_name,
            device_os_name: details.os_name,
            device_os_version: details.os_version,
            push_token,
            unique_device_id,
        }
    }
}

/// Pick the user supplied name, then the OS name, then [UNKNOWN_DEVICE_NAME]. Blank names are
/// treated as missing, other names are sent as given.
fn resolve_device_name(requested: Option<String>, reported: Option<String>) -> String {
    requested
        .into_iter()
        .chain(reported)
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_DEVICE_NAME.to_owned())
}
