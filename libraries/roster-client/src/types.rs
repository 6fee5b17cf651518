//! Wire types for Roster provider requests and responses.

use serde::{Deserialize, Serialize};

/// A resource as returned by the provider.
///
/// Only the fields the consumers actually use. The provider returns more,
/// but unknown fields are ignored on deserialization; the contract fixtures
/// pin exactly this shape and nothing else.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePayload {
    pub id: i64,
    pub name: String,
    /// ISO-8601 string; parsed by [`crate::timestamp::parse_created_on`]
    pub created_on: String,
}

/// Request body for creating a resource.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResourceRequest {
    pub name: String,
}
