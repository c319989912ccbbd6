use std::fmt;

/// An error resulting from operations on a session store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// An internal unspecified error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A serialization or deserialization error.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The keys a session is stored under. The string forms are part of the persisted layout and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreKey {
    /// Short-lived credential authorizing API calls.
    AccessToken,
    /// Longer-lived credential used solely to obtain a new access token.
    RefreshToken,
    /// JSON-serialized [`UserRecord`](crate::UserRecord).
    User,
    /// Identifier of the cart belonging to the logged in user.
    CartId,
}

impl StoreKey {
    /// Every key making up a session.
    pub const ALL: [StoreKey; 4] = [
        StoreKey::AccessToken,
        StoreKey::RefreshToken,
        StoreKey::User,
        StoreKey::CartId,
    ];

    /// The persisted name of the key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StoreKey::AccessToken => "accessToken",
            StoreKey::RefreshToken => "refreshToken",
            StoreKey::User => "user",
            StoreKey::CartId => "cartId",
        }
    }

    /// Parse a persisted key name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage for session credentials.
///
/// Implementations must be internally synchronized: a write (including [`SessionStore::clear`]
/// and [`SessionStore::set_many`]) is observed either completely or not at all by concurrent
/// readers.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Retrieves a value by its key.
    async fn get(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Sets a value for the specified key.
    async fn set(&self, key: StoreKey, value: String) -> Result<(), StoreError>;

    /// Removes a value by its key.
    ///
    /// Returns Ok even if the key doesn't exist.
    async fn remove(&self, key: StoreKey) -> Result<(), StoreError>;

    /// Removes every value in a single step.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Applies several writes in a single step. `None` removes the key.
    async fn set_many(&self, entries: Vec<(StoreKey, Option<String>)>) -> Result<(), StoreError>;
}
