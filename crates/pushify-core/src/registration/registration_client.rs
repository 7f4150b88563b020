use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::MutexGuard;
use tracing::{debug, error, info, instrument};

use super::{
    api,
    push_token::{acquire_push_token, PushTokenStatus},
    DeviceInfo,
};
use crate::{
    client::internal::InternalClient,
    error::{PlatformError, SessionAlreadyEstablishedError},
    session::{AppRoute, Session},
    ApiError, Client,
};

/// Errors that abort a registration attempt. The attempt can be retried by calling
/// [RegistrationClient::register_device] again.
#[derive(Debug, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum RegisterDeviceError {
    /// The platform could not provide the unique device identifier.
    #[error("Could not read the device identifier: {0}")]
    DeviceIdentifier(#[source] PlatformError),
    /// The platform returned an empty unique device identifier.
    #[error("The device identifier is empty")]
    MissingDeviceIdentifier,
    /// `POST /device` failed.
    #[error("Failed to register the device: {0}")]
    Submission(#[source] ApiError),
    /// The credential exchange failed after the device was registered.
    #[error("Failed to start a session: {0}")]
    CredentialExchange(#[source] ApiError),
    #[allow(missing_docs)]
    #[error(transparent)]
    SessionAlreadyEstablished(#[from] SessionAlreadyEstablishedError),
}

impl RegisterDeviceError {
    /// Message shown to the user when the attempt fails.
    pub fn user_message(&self) -> String {
        match self {
            RegisterDeviceError::Submission(e) | RegisterDeviceError::CredentialExchange(e) => {
                e.user_message()
            }
            other => other.to_string(),
        }
    }
}

/// A completed registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RegisteredDevice {
    /// The session established for this device.
    pub session: Session,
    /// Whether the push token is part of the registration, and why not if it isn't.
    pub push_token_status: PushTokenStatus,
}

/// Result of a call to [RegistrationClient::register_device] that did not fail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum RegistrationOutcome {
    /// The device was registered and the session established.
    Registered {
        #[allow(missing_docs)]
        device: RegisteredDevice,
    },
    /// Another registration attempt is running. Nothing was done.
    AlreadyInProgress,
    /// A session already exists. Nothing was done.
    AlreadyRegistered,
}

/// Registers this device with the Pushify API.
#[derive(Clone)]
pub struct RegistrationClient {
    pub(crate) internal: Arc<InternalClient>,
}

impl RegistrationClient {
    pub(crate) fn new(client: &Client) -> Self {
        Self {
            internal: client.internal.clone(),
        }
    }

    /// Whether a registration attempt is currently running.
    pub fn is_registering(&self) -> bool {
        self.internal.registration_lock.try_lock().is_err()
    }

    /// Entry point of the setup screen. Asks the user for a device name on platforms that name
    /// devices explicitly, then registers the device. The registration guard is held while the
    /// user answers, so repeated taps are ignored.
    #[instrument(skip_all, fields(platform = %self.internal.platform.platform))]
    pub async fn setup_device(&self) -> Result<RegistrationOutcome, RegisterDeviceError> {
        let guard = match self.begin() {
            Ok(guard) => guard,
            Err(outcome) => return Ok(outcome),
        };

        let platform = &self.internal.platform;
        let device_name = if platform.platform.prompts_for_device_name() {
            platform.shell.prompt_device_name().await
        } else {
            None
        };

        self.complete(guard, device_name).await
    }

    /// Register this device and establish the session.
    ///
    /// Concurrent calls are ignored while an attempt is running. A missing push token never fails
    /// the registration. API failures are shown to the user through
    /// [AppShell::show_alert](crate::platform::AppShell::show_alert) and returned, leaving the
    /// session untouched. On success the shell navigates to [AppRoute::Main].
    #[instrument(skip_all, fields(platform = %self.internal.platform.platform))]
    pub async fn register_device(
        &self,
        device_name: Option<String>,
    ) -> Result<RegistrationOutcome, RegisterDeviceError> {
        let guard = match self.begin() {
            Ok(guard) => guard,
            Err(outcome) => return Ok(outcome),
        };

        self.complete(guard, device_name).await
    }

    /// Acquire the registration guard, or the outcome to return when nothing should be done.
    fn begin(&self) -> Result<MutexGuard<'_, ()>, RegistrationOutcome> {
        let Ok(guard) = self.internal.registration_lock.try_lock() else {
            debug!("registration already in progress, ignoring");
            return Err(RegistrationOutcome::AlreadyInProgress);
        };

        if self.internal.session.is_established() {
            debug!("session already established, ignoring");
            return Err(RegistrationOutcome::AlreadyRegistered);
        }

        Ok(guard)
    }

    async fn complete(
        &self,
        _guard: MutexGuard<'_, ()>,
        device_name: Option<String>,
    ) -> Result<RegistrationOutcome, RegisterDeviceError> {
        match self.register(device_name).await {
            Ok(device) => {
                self.internal.platform.shell.navigate(AppRoute::Main);
                Ok(RegistrationOutcome::Registered { device })
            }
            Err(e) => {
                error!("device registration failed: {e}");
                self.internal.platform.shell.show_alert(e.user_message());
                Err(e)
            }
        }
    }

    async fn register(
        &self,
        device_name: Option<String>,
    ) -> Result<RegisteredDevice, RegisterDeviceError> {
        let platform = &self.internal.platform;
        let details = platform.device.device_details();

        let push_token = acquire_push_token(platform, &details).await;

        let unique_device_id = platform
            .device
            .unique_device_id()
            .await
            .map_err(RegisterDeviceError::DeviceIdentifier)?;
        if unique_device_id.trim().is_empty() {
            return Err(RegisterDeviceError::MissingDeviceIdentifier);
        }

        let device_info = DeviceInfo::assemble(
            platform.platform,
            details,
            device_name,
            push_token.token.clone(),
            unique_device_id,
        );
        debug!(
            device_name = %device_info.device_name,
            device_type = ?device_info.device_type,
            push_token_status = ?push_token.status,
            "submitting device"
        );

        let config = self.internal.get_api_configuration();
        api::post_device(&config, &device_info)
            .await
            .map_err(RegisterDeviceError::Submission)?;

        let credential = api::post_refresh_token(&config, &device_info.unique_device_id)
            .await
            .map_err(RegisterDeviceError::CredentialExchange)?;

        let session = Session {
            session_token: device_info.unique_device_id,
            push_token: push_token.token,
        };
        self.internal.session.establish(session.clone())?;
        if let Some(token) = credential.into_token() {
            self.internal.set_api_token(token);
        }

        info!("device registered");

        Ok(RegisteredDevice {
            session,
            push_token_status: push_token.status,
        })
    }
}
