//! Employee resource: DTO and consumer.
//!
//! Same shape as the user consumer, pointed at the employee collection.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use tracing::{debug, info};

use crate::client;
use crate::error::{ConsumerError, Result, ValidationError};
use crate::timestamp;
use crate::types::{CreateResourceRequest, ResourcePayload};

/// Resource kind, as it appears in validation messages and labels.
const RESOURCE: &str = "Employee";
/// Collection path segment.
const PLURAL: &str = "employees";

/// An employee fetched from the Roster provider.
///
/// Validated on construction: the name is never empty and the id is never
/// negative. Fields are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: i64,
    name: String,
    created_on: DateTime<FixedOffset>,
}

impl Employee {
    /// Build a validated employee.
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

    /// The employee's identity.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The employee's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the provider created this employee.
    pub fn created_on(&self) -> DateTime<FixedOffset> {
        self.created_on
    }

    fn from_payload(payload: ResourcePayload) -> Result<Self> {
        let created_on = timestamp::parse_created_on(&payload.created_on)?;
        Ok(Self::new(payload.id, payload.name, created_on)?)
    }
}

impl fmt::Display for Employee {
    /// Renders as `Employee(123:Verna Hampton)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RESOURCE}({}:{})", self.id, self.name)
    }
}

/// Either a raw employee id or a borrowed [`Employee`].
#[derive(Debug, Clone, Copy)]
pub enum EmployeeRef<'a> {
    /// A raw identity
    Id(i64),
    /// A full employee instance
    Employee(&'a Employee),
}

impl EmployeeRef<'_> {
    fn id(self) -> i64 {
        match self {
            EmployeeRef::Id(id) => id,
            EmployeeRef::Employee(employee) => employee.id,
        }
    }
}

impl From<i64> for EmployeeRef<'static> {
    fn from(id: i64) -> Self {
        EmployeeRef::Id(id)
    }
}

impl<'a> From<&'a Employee> for EmployeeRef<'a> {
    fn from(employee: &'a Employee) -> Self {
        EmployeeRef::Employee(employee)
    }
}

/// Consumer for the provider's employee endpoints.
pub struct EmployeeConsumer {
    http: Client,
    base_url: String,
}

impl EmployeeConsumer {
    /// Create a consumer for the provider at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let (http, base_url) = client::build(base_url.as_ref())?;
        Ok(Self { http, base_url })
    }

    /// Fetch an employee by id.
    pub async fn get_employee(&self, id: i64) -> Result<Employee> {
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Fetching employee");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse employee response: {}", e))
            })?;
            Employee::from_payload(payload)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Create a new employee on the provider.
    pub async fn create_employee(&self, name: &str) -> Result<Employee> {
        let url = format!("{}/{}/", self.base_url, PLURAL);
        debug!(url = %url, name = %name, "Creating employee");

        let request = CreateResourceRequest {
            name: name.to_string(),
        };
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status.is_success() {
            let payload: ResourcePayload = response.json().await.map_err(|e| {
                ConsumerError::Parse(format!("Failed to parse employee response: {}", e))
            })?;
            let employee = Employee::from_payload(payload)?;
            info!(employee = %employee, "Employee created");
            Ok(employee)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ConsumerError::Provider {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Delete an employee, by id or by instance.
    pub async fn delete_employee<'a>(&self, employee: impl Into<EmployeeRef<'a>>) -> Result<()> {
        let id = employee.into().id();
        let url = format!("{}/{}/{}", self.base_url, PLURAL, id);
        debug!(url = %url, id, "Deleting employee");

        let response = self.http.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            debug!(id, "Employee deleted");
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
