// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::session::{HttpSettings, DEFAULT_USER_AGENT};
use crate::hiring::{CandidateQuery, Endpoints, FileNaming, SortOrder};
use crate::utils::expand_tilde;

const DEFAULT_CONFIG_FILE: &str = "harvest.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub subdomain: String,
    pub host: String,
    /// Replaces `https://<subdomain>.<host>/` entirely when set.
    pub base_url: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub sort_order: SortOrder,
    pub download_dir: PathBuf,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub naming: FileNaming,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            subdomain: "cloudops".to_string(),
            host: "bamboohr.com".to_string(),
            base_url: None,
            limit: 500,
            offset: 0,
            sort_order: SortOrder::Desc,
            download_dir: default_download_dir(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
            naming: FileNaming::Descriptive,
        }
    }
}

fn default_download_dir() -> PathBuf {
    PathBuf::from("~")
        .join("Google Drive File Stream")
        .join("Team Drives")
        .join("HR Drive")
        .join("Bamboo Resumes")
}

impl HarvestConfig {
    /// Load configuration: YAML file (explicit path, or `harvest.yaml` when
    /// present), then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply `HARVEST_*` overrides read through `lookup`.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(subdomain) = lookup("HARVEST_SUBDOMAIN") {
            self.subdomain = subdomain;
        }
        if let Some(base_url) = lookup("HARVEST_BASE_URL") {
            self.base_url = Some(base_url);
        }
        if let Some(dir) = lookup("HARVEST_DOWNLOAD_DIR") {
            self.download_dir = PathBuf::from(dir);
        }
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        let endpoints = match &self.base_url {
            Some(base_url) => Endpoints::new(base_url)?,
            None => Endpoints::for_subdomain(&self.subdomain, &self.host)?,
        };
        Ok(endpoints)
    }

    pub fn query(&self) -> CandidateQuery {
        CandidateQuery {
            offset: self.offset,
            limit: self.limit,
            sort_order: self.sort_order,
        }
    }

    pub fn http(&self) -> HttpSettings {
        HttpSettings {
            user_agent: self.user_agent.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// Absolute download directory: `~/` expanded, relative paths resolved
    /// against the working directory.
    pub fn resolved_download_dir(&self) -> Result<PathBuf> {
        let path = expand_tilde(&self.download_dir);
        if path.is_absolute() {
            Ok(path)
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
