//! Shopfront SDK Client

#[allow(clippy::module_inception)]
mod client;
pub mod client_settings;
pub(crate) mod internal;

pub use client::Client;
pub use client_settings::ClientSettings;
pub use internal::InternalClient;
