#![doc = include_str!("../README.md")]

/// The storage interface and its keys.
pub mod store;

/// The session record and the user it belongs to.
pub mod session;

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
pub use session::{Session, UserId, UserRecord};
pub use store::{SessionStore, StoreError, StoreKey};
