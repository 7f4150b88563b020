use std::sync::{Arc, Mutex};

use pushify_core::{
    platform::{
        AppShell, AuthorizationStatus, DeviceClass, DeviceDetails, DeviceIntrospection,
        DevicePlatform, NotificationChannel, NotificationService, PermissionRequest,
        PlatformServices,
    },
    session::AppRoute,
    PlatformError,
};
use tokio::sync::Notify;

/// Push token issued by [FakePlatform] unless configured otherwise.
pub const FAKE_PUSH_TOKEN: &str = "ExponentPushToken[fake-token]";
/// Unique device id reported by [FakePlatform] unless configured otherwise.
pub const FAKE_DEVICE_ID: &str = "fake-install-id";

/// Everything a [FakePlatform] did, in call order per kind.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlatformCalls {
    pub channels: Vec<NotificationChannel>,
    pub permission_requests: Vec<PermissionRequest>,
    pub push_token_requests: usize,
    pub alerts: Vec<String>,
    pub navigations: Vec<AppRoute>,
    pub name_prompts: usize,
}

/// Scriptable in-memory implementation of every platform capability.
///
/// Configure it through the public fields before handing it to a client, then inspect
/// [FakePlatform::calls].
#[allow(missing_docs)]
pub struct FakePlatform {
    pub platform: DevicePlatform,
    pub details: DeviceDetails,
    /// Status returned by `get_permissions`.
    pub existing_status: AuthorizationStatus,
    /// Status returned after prompting the user.
    pub prompt_result: AuthorizationStatus,
    pub push_token: Result<String, PlatformError>,
    pub unique_device_id: Result<String, PlatformError>,
    pub device_name_answer: Option<String>,
    /// When set, `unique_device_id` waits for a notification before returning. Lets tests hold a
    /// registration in flight.
    pub identifier_gate: Option<Arc<Notify>>,
    /// When set, `prompt_device_name` waits for a notification before answering.
    pub prompt_gate: Option<Arc<Notify>>,
    calls: Mutex<PlatformCalls>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            platform: DevicePlatform::Android,
            details: DeviceDetails {
                device_name: Some("Fake Phone".to_string()),
                device_class: DeviceClass::Phone,
                device_year_class: Some(2022),
                manufacturer: Some("Fake Inc.".to_string()),
                model_name: Some("Fake 1".to_string()),
                os_name: Some("Android".to_string()),
                os_version: Some("14".to_string()),
                is_physical_device: true,
            },
            existing_status: AuthorizationStatus::Authorized,
            prompt_result: AuthorizationStatus::Authorized,
            push_token: Ok(FAKE_PUSH_TOKEN.to_string()),
            unique_device_id: Ok(FAKE_DEVICE_ID.to_string()),
            device_name_answer: None,
            identifier_gate: None,
            prompt_gate: None,
            calls: Mutex::new(PlatformCalls::default()),
        }
    }
}

impl FakePlatform {
    /// Snapshot of the calls made so far.
    pub fn calls(&self) -> PlatformCalls {
        self.calls.lock().expect("Mutex is not poisoned").clone()
    }

    /// Bundle this fake as the platform services of a client.
    pub fn services(self: &Arc<Self>) -> PlatformServices {
        PlatformServices::new(
            self.platform,
            self.clone(),
            self.clone(),
            self.clone(),
        )
    }

    fn record(&self, f: impl FnOnce(&mut PlatformCalls)) {
        f(&mut self.calls.lock().expect("Mutex is not poisoned"));
    }
}

#[async_trait::async_trait]
impl NotificationService for FakePlatform {
    async fn set_notification_channel(
        &self,
        channel: NotificationChannel,
    ) -> Result<(), PlatformError> {
        self.record(|calls| calls.channels.push(channel));
        Ok(())
    }

    async fn get_permissions(&self) -> Result<AuthorizationStatus, PlatformError> {
        Ok(self.existing_status)
    }

    async fn request_permissions(
        &self,
        request: PermissionRequest,
    ) -> Result<AuthorizationStatus, PlatformError> {
        self.record(|calls| calls.permission_requests.push(request));
        Ok(self.prompt_result)
    }

    async fn get_push_token(&self) -> Result<String, PlatformError> {
        self.record(|calls| calls.push_token_requests += 1);
        self.push_token.clone()
    }
}

#[async_trait::async_trait]
impl DeviceIntrospection for FakePlatform {
    fn device_details(&self) -> DeviceDetails {
        self.details.clone()
    }

    async fn unique_device_id(&self) -> Result<String, PlatformError> {
        if let Some(gate) = &self.identifier_gate {
            gate.notified().await;
        }
        self.unique_device_id.clone()
    }
}

#[async_trait::async_trait]
impl AppShell for FakePlatform {
    fn show_alert(&self, message: String) {
        self.record(|calls| calls.alerts.push(message));
    }

    async fn prompt_device_name(&self) -> Option<String> {
        self.record(|calls| calls.name_prompts += 1);
        if let Some(gate) = &self.prompt_gate {
            gate.notified().await;
        }
        self.device_name_answer.clone()
    }

    fn navigate(&self, route: AppRoute) {
        self.record(|calls| calls.navigations.push(route));
    }
}
