//! Capabilities the host application provides to the SDK.
//!
//! The SDK never talks to the OS directly. Permission dialogs, push token provisioning, device
//! introspection, alerts and navigation are all delegated to trait objects supplied when the
//! [Client](crate::Client) is created.

use std::sync::Arc;

mod device;
mod device_platform;
mod notifications;
mod shell;

pub use device::{DeviceDetails, DeviceIntrospection};
pub use device_platform::{DeviceClass, DevicePlatform, DeviceType};
pub use notifications::{
    AndroidImportance, AuthorizationStatus, IosPermissionRequest, NotificationChannel,
    NotificationService, PermissionRequest,
};
pub use shell::AppShell;

#[cfg(test)]
pub(crate) use device::MockDeviceIntrospection;
#[cfg(test)]
pub(crate) use notifications::MockNotificationService;
#[cfg(test)]
pub(crate) use shell::MockAppShell;

/// The set of platform capabilities, resolved once at application startup.
#[derive(Clone)]
pub struct PlatformServices {
    pub(crate) platform: DevicePlatform,
    pub(crate) notifications: Arc<dyn NotificationService>,
    pub(crate) device: Arc<dyn DeviceIntrospection>,
    pub(crate) shell: Arc<dyn AppShell>,
}

impl PlatformServices {
    #[allow(missing_docs)]
    pub fn new(
        platform: DevicePlatform,
        notifications: Arc<dyn NotificationService>,
        device: Arc<dyn DeviceIntrospection>,
        shell: Arc<dyn AppShell>,
    ) -> Self {
        Self {
            platform,
            notifications,
            device,
            shell,
        }
    }

    /// The platform these services were resolved for.
    pub fn platform(&self) -> DevicePlatform {
        self.platform
    }
}

impl std::fmt::Debug for PlatformServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformServices")
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}
