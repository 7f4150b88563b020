use pushify_core::registration::RegisterDeviceError;

pub type Result<T, E = PushifyError> = std::result::Result<T, E>;
pub type Error = PushifyError;

// Name is converted from *Error to *Exception, so we can't just name the enum Error because
// Exception already exists
#[derive(uniffi::Error, thiserror::Error, Debug)]
pub enum PushifyError {
    #[error(transparent)]
    RegisterDevice(#[from] RegisterDeviceError),

    #[error("Callback invocation failed")]
    CallbackError,
}

/// Required From implementation for UNIFFI callback error handling
/// Converts unexpected mobile exceptions into PushifyError
impl From<uniffi::UnexpectedUniFFICallbackError> for PushifyError {
    fn from(_: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::CallbackError
    }
}
