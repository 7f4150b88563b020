//! In-memory session state of the application.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{client::internal::InternalClient, error::SessionAlreadyEstablishedError, Client};

/// Credentials held once the device has been registered.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Session {
    /// Credential used to authenticate subsequent API calls.
    pub session_token: String,
    /// Push token of this device, absent when notifications were not authorized.
    pub push_token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_token", &"********")
            .field("push_token", &self.push_token.as_ref().map(|_| "********"))
            .finish()
    }
}

/// Top level screens the application can be on.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum AppRoute {
    /// Device setup, shown until a session exists.
    Setup,
    /// The main application.
    Main,
}

/// Holder for the current [Session]. It is written once by the registration workflow and
/// cleared on teardown.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    inner: RwLock<Option<Session>>,
}

impl SessionState {
    pub(crate) fn get(&self) -> Option<Session> {
        self.inner.read().expect("RwLock is not poisoned").clone()
    }

    pub(crate) fn is_established(&self) -> bool {
        self.inner.read().expect("RwLock is not poisoned").is_some()
    }

    pub(crate) fn establish(&self, session: Session) -> Result<(), SessionAlreadyEstablishedError> {
        let mut inner = self.inner.write().expect("RwLock is not poisoned");
        if inner.is_some() {
            return Err(SessionAlreadyEstablishedError);
        }
        *inner = Some(session);
        Ok(())
    }

    pub(crate) fn clear(&self) -> bool {
        self.inner
            .write()
            .expect("RwLock is not poisoned")
            .take()
            .is_some()
    }
}

/// Read access to the session, and teardown.
#[derive(Clone)]
pub struct SessionClient {
    pub(crate) internal: Arc<InternalClient>,
}

impl SessionClient {
    pub(crate) fn new(client: &Client) -> Self {
        Self {
            internal: client.internal.clone(),
        }
    }

    /// The current session, if the device has been registered.
    pub fn session(&self) -> Option<Session> {
        self.internal.session.get()
    }

    /// The session credential, if any.
    pub fn session_token(&self) -> Option<String> {
        self.session().map(|s| s.session_token)
    }

    /// The push token stored with the session, if any.
    pub fn push_token(&self) -> Option<String> {
        self.session().and_then(|s| s.push_token)
    }

    /// Which top level flow the application should show.
    pub fn route(&self) -> AppRoute {
        if self.internal.session.is_established() {
            AppRoute::Main
        } else {
            AppRoute::Setup
        }
    }

    /// Drop the session and any API credentials derived from it. Used when the application is
    /// stopped or the user signs out.
    pub fn clear(&self) {
        if self.internal.session.clear() {
            info!("session cleared");
        }
        self.internal.clear_api_token();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session {
            session_token: token.to_owned(),
            push_token: Some("ExponentPushToken[abc]".to_owned()),
        }
    }

    #[test]
    fn test_establish_once() {
        let state = SessionState::default();
        assert!(!state.is_established());

        state.establish(session("first")).unwrap();
        assert!(state.is_established());

        let err = state.establish(session("second")).unwrap_err();
        assert_eq!(err, SessionAlreadyEstablishedError);
        assert_eq!(state.get().unwrap().session_token, "first");
    }

    #[test]
    fn test_clear_allows_new_session() {
        let state = SessionState::default();
        state.establish(session("first")).unwrap();

        assert!(state.clear());
        assert!(!state.clear());
        assert!(state.get().is_none());

        state.establish(session("second")).unwrap();
        assert_eq!(state.get().unwrap().session_token, "second");
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug = format!("{:?}", session("secret-token"));
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("ExponentPushToken"));
    }
}
