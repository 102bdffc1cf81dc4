// src/hiring/resumes.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::auth::AuthenticatedSession;
use super::endpoints::Endpoints;
use crate::core::FsOps;
use crate::error::DownloadError;
use crate::types::{Candidate, DownloadOutcome, SkipReason};
use crate::utils::{dotted_extension, sanitize_base_name, sanitize_file_name};

/// How downloaded resumes are named on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNaming {
    /// `<First>-<Last>-<Rating>-[<Position>]<ext>`
    #[default]
    Descriptive,
    /// The file name the candidate uploaded.
    Original,
}

/// Target path of a candidate's resume under `base_dir`.
pub fn resume_path(candidate: &Candidate, base_dir: &Path, naming: FileNaming) -> PathBuf {
    let file_name = match naming {
        FileNaming::Descriptive => descriptive_name(candidate),
        FileNaming::Original => {
            let name = sanitize_file_name(&candidate.resume_file_name);
            if name.is_empty() {
                descriptive_name(candidate)
            } else {
                name
            }
        }
    };
    base_dir.join(file_name)
}

fn descriptive_name(candidate: &Candidate) -> String {
    format!(
        "{}-{}-{}-[{}]{}",
        sanitize_base_name(&candidate.first_name),
        sanitize_base_name(&candidate.last_name),
        sanitize_base_name(&candidate.rating),
        sanitize_base_name(&candidate.position),
        dotted_extension(&candidate.resume_file_name)
    )
}

pub struct ResumeDownloader<'a> {
    session: &'a AuthenticatedSession,
    endpoints: &'a Endpoints,
    base_dir: PathBuf,
    naming: FileNaming,
}

impl<'a> ResumeDownloader<'a> {
    pub fn new(
        session: &'a AuthenticatedSession,
        endpoints: &'a Endpoints,
        base_dir: impl Into<PathBuf>,
        naming: FileNaming,
    ) -> Self {
        Self {
            session,
            endpoints,
            base_dir: base_dir.into(),
            naming,
        }
    }

    /// Download one resume unless it is missing or already on disk.
    pub async fn download_resume(&self, candidate: &Candidate) -> DownloadOutcome {
        if !candidate.has_resume() {
            debug!("{} has no resume", candidate.display_name());
            return DownloadOutcome::Skipped(SkipReason::NoResume);
        }

        let path = resume_path(candidate, &self.base_dir, self.naming);
        match FsOps::file_exists(&path).await {
            Ok(true) => {
                debug!("Already downloaded: {}", path.display());
                return DownloadOutcome::Skipped(SkipReason::AlreadyExists);
            }
            Ok(false) => {}
            Err(e) => return DownloadOutcome::Failed(e),
        }

        let url = self.endpoints.download(&candidate.resume_file_id);
        let cookies = self.session.cookies_for(&url);
        if cookies.is_empty() {
            warn!("No session cookies apply to {}", url);
        }

        let response = match self.session.get_with_cookies(&url, &cookies).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = &e as &(dyn Error + 'static),
                    "Resume download for {} failed",
                    candidate.display_name()
                );
                return DownloadOutcome::Failed(e.into());
            }
        };

        match FsOps::stream_to_file(response, &path).await {
            Ok(bytes) => {
                info!(bytes, "{}", path.display());
                DownloadOutcome::Downloaded(path)
            }
            Err(DownloadError::Exists { path }) => {
                debug!("Already downloaded: {}", path.display());
                DownloadOutcome::Skipped(SkipReason::AlreadyExists)
            }
            Err(e) => {
                warn!(
                    error = &e as &(dyn Error + 'static),
                    "Could not save resume of {}",
                    candidate.display_name()
                );
                DownloadOutcome::Failed(e)
            }
        }
    }
}
