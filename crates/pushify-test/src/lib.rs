#![doc = include_str!("../README.md")]

mod api;
pub use api::*;
mod platform;
pub use platform::*;
