use pushify_core::registration::RegistrationOutcome;

use crate::Result;

#[derive(uniffi::Object)]
pub struct RegistrationClient(pub(crate) pushify_core::registration::RegistrationClient);

#[uniffi::export(async_runtime = "tokio")]
impl RegistrationClient {
    /// Whether a registration attempt is running. Drives the busy indicator of the setup screen.
    pub fn is_registering(&self) -> bool {
        self.0.is_registering()
    }

    /// Entry point of the setup screen: prompts for a device name where the platform asks for
    /// one, then registers the device
    pub async fn setup_device(&self) -> Result<RegistrationOutcome> {
        Ok(self.0.setup_device().await?)
    }

    /// Register the device and establish the session
    pub async fn register_device(&self, device_name: Option<String>) -> Result<RegistrationOutcome> {
        Ok(self.0.register_device(device_name).await?)
    }
}
