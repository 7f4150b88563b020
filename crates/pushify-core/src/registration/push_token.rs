use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::platform::{AuthorizationStatus, DeviceDetails, PlatformServices};

/// Why a push token is, or is not, part of the registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PushTokenStatus {
    /// A token was issued by the platform.
    Acquired,
    /// Notifications were denied earlier. The user is not asked again.
    PermissionDenied,
    /// The user was asked and did not fully grant notifications.
    PermissionNotGranted,
    /// Notifications are authorized but the platform could not issue a token.
    Unavailable {
        #[allow(missing_docs)]
        reason: String,
    },
    /// Simulators and emulators cannot receive push notifications.
    NotPhysicalDevice,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PushTokenOutcome {
    pub(crate) token: Option<String>,
    pub(crate) status: PushTokenStatus,
}

impl PushTokenOutcome {
    fn skipped(status: PushTokenStatus) -> Self {
        Self {
            token: None,
            status,
        }
    }
}

/// Ask for notification permission and fetch the push token. Never fails: every problem
/// degrades to a registration without a push token.
pub(crate) async fn acquire_push_token(
    platform: &PlatformServices,
    details: &DeviceDetails,
) -> PushTokenOutcome {
    if let Some(channel) = platform.platform.notification_channel() {
        if let Err(e) = platform
            .notifications
            .set_notification_channel(channel)
            .await
        {
            warn!("failed to set up notification channel: {e}");
        }
    }

    if !details.is_physical_device {
        info!("not running on a physical device, skipping push token");
        return PushTokenOutcome::skipped(PushTokenStatus::NotPhysicalDevice);
    }

    let existing = match platform.notifications.get_permissions().await {
        Ok(status) => status,
        Err(e) => {
            warn!("failed to read notification permissions: {e}");
            return PushTokenOutcome::skipped(PushTokenStatus::Unavailable {
                reason: e.to_string(),
            });
        }
    };
    debug!(?existing, "current notification permission");

    let status = match existing {
        AuthorizationStatus::Denied => {
            info!("notifications were denied, registering without push token");
            return PushTokenOutcome::skipped(PushTokenStatus::PermissionDenied);
        }
        AuthorizationStatus::Authorized => existing,
        AuthorizationStatus::NotDetermined
        | AuthorizationStatus::Provisional
        | AuthorizationStatus::Ephemeral => {
            let request = platform.platform.permission_request();
            match platform.notifications.request_permissions(request).await {
                Ok(status) => status,
                Err(e) => {
                    warn!("failed to request notification permissions: {e}");
                    AuthorizationStatus::NotDetermined
                }
            }
        }
    };

    if !status.is_granted() {
        info!(?status, "notifications not granted, registering without push token");
        return PushTokenOutcome::skipped(PushTokenStatus::PermissionNotGranted);
    }

    match platform.notifications.get_push_token().await {
        Ok(token) if !token.trim().is_empty() => PushTokenOutcome {
            token: Some(token),
            status: PushTokenStatus::Acquired,
        },
        Ok(_) => {
            warn!("platform returned an empty push token");
            PushTokenOutcome::skipped(PushTokenStatus::Unavailable {
                reason: "empty push token".to_owned(),
            })
        }
        Err(e) => {
            warn!("failed to get push token: {e}");
            PushTokenOutcome::skipped(PushTokenStatus::Unavailable {
                reason: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        error::PlatformError,
        platform::{
            DevicePlatform, MockAppShell, MockDeviceIntrospection, MockNotificationService,
        },
    };

    const TOKEN: &str = "ExponentPushToken[abc]";

    fn services(platform: DevicePlatform, notifications: MockNotificationService) -> PlatformServices {
        PlatformServices::new(
            platform,
            Arc::new(notifications),
            Arc::new(MockDeviceIntrospection::new()),
            Arc::new(MockAppShell::new()),
        )
    }

    fn physical() -> DeviceDetails {
        DeviceDetails {
            is_physical_device: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_already_granted_fetches_token_without_prompt() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::Authorized));
        notifications.expect_request_permissions().never();
        notifications
            .expect_get_push_token()
            .once()
            .returning(|| Ok(TOKEN.to_owned()));

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert_eq!(outcome.token.as_deref(), Some(TOKEN));
        assert_eq!(outcome.status, PushTokenStatus::Acquired);
    }

    #[tokio::test]
    async fn test_denied_does_not_prompt_again() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::Denied));
        notifications.expect_request_permissions().never();
        notifications.expect_get_push_token().never();

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert!(outcome.token.is_none());
        assert_eq!(outcome.status, PushTokenStatus::PermissionDenied);
    }

    #[tokio::test]
    async fn test_undetermined_then_granted() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::NotDetermined));
        notifications
            .expect_request_permissions()
            .once()
            .withf(|request| request.ios.as_ref().is_some_and(|ios| ios.allow_critical_alerts))
            .returning(|_| Ok(AuthorizationStatus::Authorized));
        notifications
            .expect_get_push_token()
            .returning(|| Ok(TOKEN.to_owned()));

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert_eq!(outcome.token.as_deref(), Some(TOKEN));
    }

    #[tokio::test]
    async fn test_undetermined_then_denied() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::NotDetermined));
        notifications
            .expect_request_permissions()
            .returning(|_| Ok(AuthorizationStatus::Denied));
        notifications.expect_get_push_token().never();

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert!(outcome.token.is_none());
        assert_eq!(outcome.status, PushTokenStatus::PermissionNotGranted);
    }

    #[tokio::test]
    async fn test_provisional_is_upgraded_or_dropped() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::Provisional));
        notifications
            .expect_request_permissions()
            .once()
            .returning(|_| Ok(AuthorizationStatus::Provisional));
        notifications.expect_get_push_token().never();

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert_eq!(outcome.status, PushTokenStatus::PermissionNotGranted);
    }

    #[tokio::test]
    async fn test_token_failure_degrades() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::Authorized));
        notifications
            .expect_get_push_token()
            .returning(|| Err(PlatformError::failure("no network")));

        let outcome =
            acquire_push_token(&services(DevicePlatform::Ios, notifications), &physical()).await;

        assert!(outcome.token.is_none());
        assert_eq!(
            outcome.status,
            PushTokenStatus::Unavailable {
                reason: "Platform error: no network".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_android_sets_up_channel_and_ignores_failure() {
        let mut notifications = MockNotificationService::new();
        notifications
            .expect_set_notification_channel()
            .once()
            .withf(|channel| channel.id == "default" && channel.vibration_pattern == [0, 250, 250, 250])
            .returning(|_| Err(PlatformError::failure("channel")));
        notifications
            .expect_get_permissions()
            .returning(|| Ok(AuthorizationStatus::Authorized));
        notifications
            .expect_get_push_token()
            .returning(|| Ok(TOKEN.to_owned()));

        let outcome = acquire_push_token(
            &services(DevicePlatform::Android, notifications),
            &physical(),
        )
        .await;

        assert_eq!(outcome.status, PushTokenStatus::Acquired);
    }

    #[tokio::test]
    async fn test_simulator_skips_permission() {
        let mut notifications = MockNotificationService::new();
        notifications.expect_get_permissions().never();
        notifications.expect_get_push_token().never();

        let outcome = acquire_push_token(
            &services(DevicePlatform::Ios, notifications),
            &DeviceDetails::default(),
        )
        .await;

        assert_eq!(outcome.status, PushTokenStatus::NotPhysicalDevice);
    }
}
