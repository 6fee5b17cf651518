//! Company resource: DTO and consumer.
//!
//! Same shape as the user consumer, pointed at the company collection.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use tracing::{debug, info};

use crate::client;
use crate::error::{ConsumerError, Result, ValidationError};
use crate::timestamp;
use crate::types::{CreateResourceRequest, ResourcePayload};

/// Resource kind, as it appears in validation messages and labels.
const RESOURCE: &str = "Company";
/// Collection path segment.
const PLURAL: &str = "companies";

/// A company fetched from the Roster provider.
///
/// Validated on construction: the name is never empty and the id is never
/// negative. Fields are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    id: i64,
    name: String,
    created_on: DateTime<FixedOffset>,
}

impl Company {
    /// Build a validated company.
    ///
    /// Fails if the name is empty or the id is negative.
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

    /// The company's identity.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The company's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the provider created this company.
    pub fn created_on(&self) -> DateTime<FixedOffset> {
        self.created_on
    }

    fn from_payload(payload: ResourcePayload) -> Result<Self> {
        let created_on = timestamp::parse_created_on(&payload.created_on)?;
        Ok(Self::new(payload.id, payload.name, created_on)?)
    }
}

impl fmt::Display for Company {
    /// Renders as `Company(456:Tech Innovators)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RESOURCE}({}:{})", self.id, self.name)
    }
}

/// Either a raw company id or a borrowed [`Company`].
#[derive(Debug, Clone, Copy)]
pub enum CompanyRef<'a> {
    /// A raw identity
    Id(i64),
    /// A full company instance
    Company(&'a Company),
}

impl CompanyRef<'_> {
    fn id(self) -> i64 {
        match self {
            CompanyRef::Id(id) => id,
            CompanyRef::Company(company) => company.id,
        }
    }
}

impl From<i64> for CompanyRef<'static> {
    fn from(id: i64) -> Self {
        CompanyRef::Id(id)
    }
}

impl<'a> From<&'a Company> for CompanyRef<'a> {
    fn from(company: &'a Company) -> Self {
        CompanyRef::Company(company)
    }
}

/// Consumer for the provider's company endpoints.
pub struct CompanyConsumer {
    http: Client,
    base_url: String,
}

impl CompanyConsumer {
    /// Create a consumer for the provider at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let (http, base_url) = client::build(base_url.as_ref())?;
        Ok(Self { http, base_url })
    }

    /// Fetch a company by id.
    pub async fn get_company(&self, id: i64) -> Result<Company> {
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Fetching company");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse company response: {}", e))
            })?;
            Company::from_payload(payload)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Create a new company on the provider.
    pub async fn create_company(&self, name: &str) -> Result<Company> {
        let url = format!("{}/{}/", self.base_url, PLURAL);
        debug!(url = %url, name = %name, "Creating company");

        let request = CreateResourceRequest {
            name: name.to_string(),
        };
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse company response: {}", e))
            })?;
            let company = Company::from_payload(payload)?;
            info!(company = %company, "Company created");
            Ok(company)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Delete a company, by id or by instance.
    pub async fn delete_company<'a>(&self, company: impl Into<CompanyRef<'a>>) -> Result<()> {
        let id = company.into().id();
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Deleting company");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(id, "Company deleted");
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
