use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SessionStore, StoreError, StoreKey};

/// Name of the role granting access to the admin back-office.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// The credentials and identity of a logged in user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Short-lived credential authorizing API calls.
    pub access_token: String,
    /// Credential used to obtain a new access token.
    pub refresh_token: String,
    /// The logged in user.
    pub user: UserRecord,
    /// The user's cart, once known.
    pub cart_id: Option<String>,
}

impl Session {
    /// Read the session from `store`.
    ///
    /// Returns `None` unless both the access token and the user record are present, which is
    /// the condition under which a previous session can be restored.
    pub async fn load(store: &dyn SessionStore) -> Result<Option<Self>, StoreError> {
        let Some(access_token) = store.get(StoreKey::AccessToken).await? else {
            return Ok(None);
        };
        let Some(user) = store.get(StoreKey::User).await? else {
            return Ok(None);
        };

        Ok(Some(Session {
            access_token,
            refresh_token: store
                .get(StoreKey::RefreshToken)
                .await?
                .unwrap_or_default(),
            user: serde_json::from_str(&user)?,
            cart_id: store.get(StoreKey::CartId).await?,
        }))
    }

    /// Write every field of the session to `store` in a single step.
    pub async fn save(&self, store: &dyn SessionStore) -> Result<(), StoreError> {
        store
            .set_many(vec![
                (StoreKey::AccessToken, Some(self.access_token.clone())),
                (StoreKey::RefreshToken, Some(self.refresh_token.clone())),
                (StoreKey::User, Some(serde_json::to_string(&self.user)?)),
                (StoreKey::CartId, self.cart_id.clone()),
            ])
            .await
    }
}

/// Identifier of a user. The API issues numeric ids, but string ids are accepted as well.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum UserId {
    #[allow(missing_docs)]
    Number(i64),
    #[allow(missing_docs)]
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// A role as sent by the server, either a bare name or an object carrying one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum RoleEntry {
    Name(String),
    Object { name: String },
}

impl RoleEntry {
    fn name(&self) -> &str {
        match self {
            RoleEntry::Name(name) | RoleEntry::Object { name } => name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum Roles {
    List(Vec<RoleEntry>),
    Single(RoleEntry),
}

/// The user record returned at login and by the profile endpoint.
///
/// Fields this SDK doesn't interpret are kept in `extra`, so the record survives a round trip
/// through the store unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server identifier of the user.
    pub id: UserId,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roles: Option<Roles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<RoleEntry>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    /// Role names of the user, whichever of the accepted shapes the server used.
    pub fn roles(&self) -> Vec<String> {
        match (&self.roles, &self.role) {
            (Some(Roles::List(list)), _) => list.iter().map(|r| r.name().to_string()).collect(),
            (Some(Roles::Single(role)), _) | (None, Some(role)) => vec![role.name().to_string()],
            (None, None) => Vec::new(),
        }
    }

    /// Whether the user may use the admin back-office.
    pub fn is_admin(&self) -> bool {
        self.roles().iter().any(|r| r == ADMIN_ROLE)
    }
}
