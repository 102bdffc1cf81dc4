pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod hiring;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use config::HarvestConfig;
pub use error::{AuthError, DownloadError, FetchError, NetworkError, ParseError, RunError};
pub use pipeline::Harvester;
pub use types::{Candidate, DownloadOutcome, RunSummary, SkipReason};
