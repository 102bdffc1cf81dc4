pub mod candidate;
pub mod outcome;

pub use candidate::Candidate;
pub use outcome::{DownloadOutcome, RunSummary, SkipReason};
