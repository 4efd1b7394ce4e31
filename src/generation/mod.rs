// Generation endpoint module.
// Client and response types for the backend that writes the review text.

pub mod client;
pub mod submit;
pub mod types;

pub use client::GenerationClient;
pub use types::{DEFAULT_FAILURE_MESSAGE, GenerationResponse};
