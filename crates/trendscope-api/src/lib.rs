pub mod client;
pub mod error;
pub mod schema;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use schema::{ErrorBody, TrendsResponse};
