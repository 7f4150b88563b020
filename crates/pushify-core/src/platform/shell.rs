use crate::session::AppRoute;

/// User facing surface of the host application: alerts, prompts and navigation.
#[cfg_attr(feature = "uniffi", uniffi::export(with_foreign))]
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AppShell: Send + Sync {
    /// Show a blocking message to the user.
    fn show_alert(&self, message: String);

    /// Ask the user to name this device. `None` when the prompt was dismissed.
    async fn prompt_device_name(&self) -> Option<String>;

    /// Replace the current screen with `route`.
    fn navigate(&self, route: AppRoute);
}
