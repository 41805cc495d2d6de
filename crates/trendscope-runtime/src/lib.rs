pub mod config;
pub mod error;
pub mod state;

pub use config::{resolve_api_base, Config};
pub use error::{Error, Result};
pub use state::{DashState, Phase, Snapshot};
