use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::DeviceInfo;
use crate::{client::ApiConfiguration, ApiError};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequestModel<'a> {
    unique_device_id: &'a str,
}

/// Response of the credential exchange. The body is optional, servers that only acknowledge the
/// exchange respond with an empty body.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub(crate) struct RefreshTokenResponseModel {
    token: Option<String>,
    #[serde(rename = "accessToken", alias = "access_token")]
    access_token: Option<String>,
}

impl RefreshTokenResponseModel {
    /// Bearer token for later calls, if the server issued one.
    pub(crate) fn into_token(self) -> Option<String> {
        self.token.or(self.access_token)
    }
}

/// `POST /device`
pub(crate) async fn post_device(
    config: &ApiConfiguration,
    device_info: &DeviceInfo,
) -> Result<(), ApiError> {
    let response = config
        .request(Method::POST, "device")
        .body(serde_json::to_string(device_info)?)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::from_response(response).await);
    }

    Ok(())
}

/// `POST /auth/refresh-token`, exchanges the unique device id for a session credential.
pub(crate) async fn post_refresh_token(
    config: &ApiConfiguration,
    unique_device_id: &str,
) -> Result<RefreshTokenResponseModel, ApiError> {
    let response = config
        .request(Method::POST, "auth/refresh-token")
        .body(serde_json::to_string(&RefreshTokenRequestModel { unique_device_id })?)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::from_response(response).await);
    }

    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(RefreshTokenResponseModel::default());
    }

    // Any 2xx completes the exchange, the body only carries an optional bearer token.
    match serde_json::from_str(&body) {
        Ok(model) => Ok(model),
        Err(e) => {
            warn!("ignoring unexpected credential exchange response: {e}");
            Ok(RefreshTokenResponseModel::default())
        }
    }
}
