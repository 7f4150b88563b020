//! Device registration: permission, push token, device metadata and the two step handshake
//! with the Pushify API.

mod api;
mod device_info;
mod push_token;
mod registration_client;

pub use device_info::{DeviceInfo, UNKNOWN_DEVICE_NAME};
pub use push_token::PushTokenStatus;
pub use registration_client::{
    RegisterDeviceError, RegisteredDevice, RegistrationClient, RegistrationOutcome,
};
