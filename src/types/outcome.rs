// src/types/outcome.rs
use std::fmt;
use std::path::PathBuf;

use crate::error::DownloadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyExists,
    NoResume,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyExists => write!(f, "already downloaded"),
            SkipReason::NoResume => write!(f, "no resume on file"),
        }
    }
}

/// Result of one resume download attempt.
#[derive(Debug)]
pub enum DownloadOutcome {
    Downloaded(PathBuf),
    Skipped(SkipReason),
    Failed(DownloadError),
}

impl DownloadOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, DownloadOutcome::Downloaded(_))
    }
}

/// Aggregated outcomes of a run. Only `downloaded` is reported to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub candidates: usize,
    pub downloaded: usize,
    pub already_present: usize,
    pub without_resume: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded(_) => self.downloaded += 1,
            DownloadOutcome::Skipped(SkipReason::AlreadyExists) => self.already_present += 1,
            DownloadOutcome::Skipped(SkipReason::NoResume) => self.without_resume += 1,
            DownloadOutcome::Failed(_) => self.failed += 1,
        }
    }
}
