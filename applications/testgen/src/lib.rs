//! Roster test generator library
//!
//! Drafts contract tests for the Roster consumers by prompting a chat
//! completions model with the consumer source code and an existing test
//! file to imitate. The draft still needs a human pass before it lands.
//!
//! This library exposes the core components for testing purposes.

pub mod client;
pub mod error;
pub mod generate;

// Re-export commonly used types for convenience
pub use client::{CompletionClient, OpenAiClient};
pub use error::{Result, TestgenError};
pub use generate::{build_prompt, generate_tests, strip_code_fences};
