use std::sync::{Arc, RwLock};

use reqwest::header::{self, HeaderValue};

use super::internal::{ApiConfiguration, InternalClient};
use crate::{
    client::client_settings::ClientSettings, platform::PlatformServices,
    registration::RegistrationClient, session::SessionClient,
};

/// The main struct to interact with the Pushify SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. This is required to properly use the FFI API, where we can't
    // just use normal Rust references effectively. For this to happen, any mutable state needs
    // to be behind an Arc, ideally as part of the existing [`InternalClient`] struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new Pushify client using the platform capabilities of the host application.
    pub fn new(settings: Option<ClientSettings>, platform: PlatformServices) -> Self {
        let settings = settings.unwrap_or_default();

        let headers = build_default_headers(&settings, &platform);

        let http_client = new_http_client_builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                __api_configuration: RwLock::new(ApiConfiguration::new(
                    settings.api_url,
                    http_client,
                )),
                platform,
                session: Default::default(),
                registration_lock: tokio::sync::Mutex::new(()),
            }),
        }
    }

    /// Device registration.
    pub fn registration(&self) -> RegistrationClient {
        RegistrationClient::new(self)
    }

    /// Session state.
    pub fn session(&self) -> SessionClient {
        SessionClient::new(self)
    }
}

fn new_http_client_builder() -> reqwest::ClientBuilder {
    #[allow(unused_mut)]
    let mut client_builder = reqwest::Client::builder();

    #[cfg(not(target_arch = "wasm32"))]
    {
        use rustls::ClientConfig;
        use rustls_platform_verifier::ConfigVerifierExt;
        client_builder = client_builder.use_preconfigured_tls(
            ClientConfig::with_platform_verifier().expect("Failed to create platform verifier"),
        );

        // Enforce HTTPS for all requests in non-debug builds
        #[cfg(not(debug_assertions))]
        {
            client_builder = client_builder.https_only(true);
        }
    }

    client_builder
}

/// Build default headers for the Pushify HttpClient
fn build_default_headers(settings: &ClientSettings, platform: &PlatformServices) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    if let Some(version) = &settings.client_version {
        headers.append(
            "Pushify-Client-Version",
            HeaderValue::from_str(version).expect("Version should be a valid header value"),
        );
    }

    headers.append(
        "Device-Platform",
        HeaderValue::from_str(&platform.platform().to_string())
            .expect("All ASCII strings are valid header values"),
    );

    headers.append(
        header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
