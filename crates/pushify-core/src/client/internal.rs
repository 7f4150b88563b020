use std::sync::{Arc, RwLock};

use crate::{platform::PlatformServices, session::SessionState};

/// Everything needed to send a request to the Pushify API.
#[derive(Clone)]
pub struct ApiConfiguration {
    /// Base url of the API, without a trailing slash.
    pub base_path: String,
    /// HTTP client preconfigured with the default headers.
    pub client: reqwest::Client,
    /// Bearer token attached to requests once the session credential has been exchanged.
    pub access_token: Option<String>,
}

impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfiguration")
            .field("base_path", &self.base_path)
            .field("access_token", &self.access_token.as_ref().map(|_| "********"))
            .finish_non_exhaustive()
    }
}

impl ApiConfiguration {
    pub(crate) fn new(base_path: String, client: reqwest::Client) -> Arc<Self> {
        Arc::new(Self {
            base_path: base_path.trim_end_matches('/').to_owned(),
            client,
            access_token: None,
        })
    }

    pub(crate) fn set_access_token(self: &mut Arc<Self>, token: Option<String>) {
        let mut config = self.as_ref().clone();
        config.access_token = token;
        *self = Arc::new(config);
    }

    /// Build a request to `path` relative to the API base, with the bearer token if one is set.
    pub(crate) fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_path, path.trim_start_matches('/'));
        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(ref access_token) = self.access_token {
            request = request.bearer_auth(access_token);
        }

        request
    }
}

#[allow(missing_docs)]
pub struct InternalClient {
    /// Use InternalClient::get_api_configuration() to access this.
    #[doc(hidden)]
    pub(crate) __api_configuration: RwLock<Arc<ApiConfiguration>>,

    pub(crate) platform: PlatformServices,

    pub(crate) session: SessionState,

    /// Held for the whole duration of a registration attempt.
    pub(crate) registration_lock: tokio::sync::Mutex<()>,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("__api_configuration", &self.__api_configuration)
            .field("platform", &self.platform)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    #[allow(missing_docs)]
    pub fn get_api_configuration(&self) -> Arc<ApiConfiguration> {
        self.__api_configuration
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    /// Attach `token` as bearer token to every subsequent API request.
    pub(crate) fn set_api_token(&self, token: String) {
        self.__api_configuration
            .write()
            .expect("RwLock is not poisoned")
            .set_access_token(Some(token));
    }

    pub(crate) fn clear_api_token(&self) {
        self.__api_configuration
            .write()
            .expect("RwLock is not poisoned")
            .set_access_token(None);
    }
}
