#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
mod error;
pub mod pipeline;

pub use auth::{AuthClient, SessionExpiredHandler};
pub use client::{Client, ClientSettings};
pub use error::{ApiError, ErrorKind};
pub use pipeline::{FilePart, RawResponse, RequestOptions};
pub use shopfront_state::{Session, SessionStore, StoreKey, UserRecord};
