// src/pipeline.rs
//! Login, one candidate query, then a sequential download loop

use std::path::Path;

use tracing::info;

use crate::config::HarvestConfig;
use crate::core::{FsOps, Session};
use crate::error::RunError;
use crate::hiring::{self, Credentials, Endpoints, ResumeDownloader};
use crate::types::RunSummary;

pub struct Harvester<'a> {
    config: &'a HarvestConfig,
    endpoints: Endpoints,
}

impl<'a> Harvester<'a> {
    pub fn new(config: &'a HarvestConfig, endpoints: Endpoints) -> Self {
        Self { config, endpoints }
    }

    /// Login and query failures abort the run; per-candidate failures only
    /// show up in the summary.
    pub async fn run(&self, credentials: &Credentials, download_dir: &Path) -> Result<RunSummary, RunError> {
        let session = Session::new(&self.config.http()).map_err(RunError::Session)?;
        let session = hiring::login(session, &self.endpoints, credentials).await?;

        let candidates =
            hiring::fetch_candidates(&session, &self.endpoints, &self.config.query()).await?;

        FsOps::ensure_dir_exists(download_dir)
            .await
            .map_err(|source| RunError::Io {
                path: download_dir.to_path_buf(),
                source,
            })?;

        let downloader =
            ResumeDownloader::new(&session, &self.endpoints, download_dir, self.config.naming);

        let mut summary = RunSummary {
            candidates: candidates.len(),
            ..RunSummary::default()
        };
        for candidate in &candidates {
            let outcome = downloader.download_resume(candidate).await;
            summary.record(&outcome);
        }

        info!(
            candidates = summary.candidates,
            downloaded = summary.downloaded,
            already_present = summary.already_present,
            without_resume = summary.without_resume,
            failed = summary.failed,
            "Run complete"
        );
        Ok(summary)
    }
}
