//! User resource: DTO and consumer.
//!
//! The consumer side of the user contract. It only cares about the user's
//! id, name, and creation date; whatever else the provider returns is
//! ignored, and the contract fixtures pin exactly what is used here.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use tracing::{debug, info};

use crate::client;
use crate::error::{ConsumerError, Result, ValidationError};
use crate::timestamp;
use crate::types::{CreateResourceRequest, ResourcePayload};

/// Resource kind, as it appears in validation messages and labels.
const RESOURCE: &str = "User";
/// Collection path segment.
const PLURAL: &str = "users";

/// A user fetched from the Roster provider.
///
/// Validated on construction: the name is never empty and the id is never
/// negative. Fields are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: i64,
    name: String,
    created_on: DateTime<FixedOffset>,
}

impl User {
    /// Build a validated user.
    ///
    /// Fails if the name is empty or the id is negative; no
    /// partially-constructed value escapes.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        created_on: DateTime<FixedOffset>,
    ) -> std::result::Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName { resource: RESOURCE });
        }
        if id < 0 {
            return Err(ValidationError::NegativeId {
                resource: RESOURCE,
                id,
            });
        }
        Ok(Self {
            id,
            name,
            created_on,
        })
    }

    /// The user's identity.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The user's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the provider created this user.
    pub fn created_on(&self) -> DateTime<FixedOffset> {
        self.created_on
    }

    fn from_payload(payload: ResourcePayload) -> Result<Self> {
        let created_on = timestamp::parse_created_on(&payload.created_on)?;
        Ok(Self::new(payload.id, payload.name, created_on)?)
    }
}

impl fmt::Display for User {
    /// Renders as `User(123:Verna Hampton)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RESOURCE}({}:{})", self.id, self.name)
    }
}

/// Either a raw user id or a borrowed [`User`].
///
/// [`UserConsumer::delete_user`] accepts both, resolving to the id before
/// the request is built.
#[derive(Debug, Clone, Copy)]
pub enum UserRef<'a> {
    /// A raw identity
    Id(i64),
    /// A full user instance
    User(&'a User),
}

impl UserRef<'_> {
    fn id(self) -> i64 {
        match self {
            UserRef::Id(id) => id,
            UserRef::User(user) => user.id,
        }
    }
}

impl From<i64> for UserRef<'static> {
    fn from(id: i64) -> Self {
        UserRef::Id(id)
    }
}

impl<'a> From<&'a User> for UserRef<'a> {
    fn from(user: &'a User) -> Self {
        UserRef::User(user)
    }
}

/// Consumer for the provider's user endpoints.
///
/// Holds only a base URL and an HTTP client; there is no mutable state, so
/// one instance can be shared freely across tasks.
pub struct UserConsumer {
    http: Client,
    base_url: String,
}

impl UserConsumer {
    /// Create a consumer for the provider at `base_url`.
    ///
    /// The URL must be non-empty and `http`/`https`; trailing slashes are
    /// trimmed. Requests carry a fixed 5 second deadline.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let (http, base_url) = client::build(base_url.as_ref())?;
        Ok(Self { http, base_url })
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, id: i64) -> Result<User> {
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Fetching user");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse user response: {}", e))
            })?;
            User::from_payload(payload)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Create a new user on the provider.
    pub async fn create_user(&self, name: &str) -> Result<User> {
        let url = format!("{}/{}/", self.base_url, PLURAL);
        debug!(url = %url, name = %name, "Creating user");

        let request = CreateResourceRequest {
            name: name.to_string(),
        };
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse user response: {}", e))
            })?;
            let user = User::from_payload(payload)?;
            info!(user = %user, "User created");
            Ok(user)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Delete a user, by id or by instance.
    pub async fn delete_user<'a>(&self, user: impl Into<UserRef<'a>>) -> Result<()> {
        let id = user.into().id();
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Deleting user");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(id, "User deleted");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }
}
