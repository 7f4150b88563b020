#![doc = include_str!("../README.md")]

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub mod client;
mod error;
pub use error::{
    ApiError, PlatformError, SessionAlreadyEstablishedError, UNKNOWN_ERROR_MESSAGE,
};
pub mod platform;
pub mod registration;
pub mod session;

pub use client::{Client, ClientSettings};
