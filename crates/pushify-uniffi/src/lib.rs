#![doc = include_str!("../README.md")]

uniffi::setup_scaffolding!();

use std::sync::Arc;

use pushify_core::{
    platform::{AppShell, DeviceIntrospection, DevicePlatform, NotificationService, PlatformServices},
    ClientSettings,
};
use tracing_subscriber::{
    fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
};

#[allow(missing_docs)]
pub mod error;
mod log_callback;
#[allow(missing_docs)]
pub mod registration;
#[allow(missing_docs)]
pub mod session;

#[cfg(target_os = "android")]
mod android_support;

pub use error::{Error, PushifyError, Result};
pub use log_callback::LogCallback;
use log_callback::CallbackLayer;
use registration::RegistrationClient;
use session::SessionClient;

#[allow(missing_docs)]
#[derive(uniffi::Object)]
pub struct Client(pub(crate) pushify_core::Client);

#[uniffi::export(async_runtime = "tokio")]
impl Client {
    /// Initialize a new instance of the SDK client
    #[uniffi::constructor]
    pub fn new(
        settings: Option<ClientSettings>,
        platform: DevicePlatform,
        notifications: Arc<dyn NotificationService>,
        device: Arc<dyn DeviceIntrospection>,
        shell: Arc<dyn AppShell>,
    ) -> Self {
        #[cfg(target_os = "android")]
        android_support::init();

        Self(pushify_core::Client::new(
            settings,
            PlatformServices::new(platform, notifications, device, shell),
        ))
    }

    /// Device registration
    pub fn registration(&self) -> RegistrationClient {
        RegistrationClient(self.0.registration())
    }

    /// Session state
    pub fn session(&self) -> SessionClient {
        SessionClient(self.0.session())
    }
}

/// Install the SDK log subscriber.
///
/// Events are filtered with `RUST_LOG` (default `info`) and written to stderr. When `callback` is
/// set they are also forwarded to the host application. Only the first call has an effect.
#[uniffi::export]
pub fn init_logger(callback: Option<Arc<dyn LogCallback>>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(callback.map(CallbackLayer::new))
        .try_init();
}
