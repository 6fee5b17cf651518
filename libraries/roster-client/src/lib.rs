//! Roster consumer library
//!
//! HTTP consumers for the Roster provider API: thin clients for the
//! `users`, `companies`, and `employees` resources, each exposing
//! get/create/delete and deserializing responses into validated DTOs.
//!
//! The consumers define the interactions the provider must satisfy; the
//! contract fixtures under `tests/` record those interactions against an
//! ephemeral mock server. Nothing in this crate knows about the fixtures —
//! this is the production side of the contract.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::UserConsumer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let consumer = UserConsumer::new("https://roster.example.com")?;
//!
//!     let user = consumer.create_user("Verna Hampton").await?;
//!     println!("created {user}");
//!
//!     let fetched = consumer.get_user(user.id()).await?;
//!     assert_eq!(fetched.name(), "Verna Hampton");
//!
//!     consumer.delete_user(&fetched).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod company;
mod employee;
mod error;
mod timestamp;
mod types;
mod user;

// Re-export main types
pub use company::{Company, CompanyConsumer, CompanyRef};
pub use employee::{Employee, EmployeeConsumer, EmployeeRef};
pub use error::{ConsumerError, Result, ValidationError};
pub use user::{User, UserConsumer, UserRef};

// Re-export the timestamp parser for callers that validate stamps directly
pub use timestamp::parse_created_on;
