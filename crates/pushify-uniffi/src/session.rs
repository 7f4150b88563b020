use pushify_core::session::{AppRoute, Session};

#[derive(uniffi::Object)]
pub struct SessionClient(pub(crate) pushify_core::session::SessionClient);

#[uniffi::export]
impl SessionClient {
    /// The current session, if the device has been registered
    pub fn session(&self) -> Option<Session> {
        self.0.session()
    }

    /// Which top level flow the application should show
    pub fn route(&self) -> AppRoute {
        self.0.route()
    }

    /// Drop the session, e.g. when the application stops
    pub fn clear(&self) {
        self.0.clear()
    }
}
