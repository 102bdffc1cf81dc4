// src/hiring/endpoints.rs
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::NetworkError;

const LOGIN_ENDPOINT: &str = "login.php";
const CANDIDATES_ENDPOINT: &str = "hiring/candidates";
const DOWNLOAD_ENDPOINT: &str = "files/download.php";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// One bounded page of the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateQuery {
    pub offset: u32,
    pub limit: u32,
    pub sort_order: SortOrder,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 500,
            sort_order: SortOrder::Desc,
        }
    }
}

/// URLs of one BambooHR tenant.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// `https://<subdomain>.<host>/`
    pub fn for_subdomain(subdomain: &str, host: &str) -> Result<Self, NetworkError> {
        Self::new(&format!("https://{}.{}/", subdomain, host))
    }

    pub fn new(base_url: &str) -> Result<Self, NetworkError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized).map_err(|source| NetworkError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn login(&self) -> Url {
        self.join(LOGIN_ENDPOINT)
    }

    pub fn candidates(&self, query: &CandidateQuery) -> Url {
        let mut url = self.join(CANDIDATES_ENDPOINT);
        url.query_pairs_mut()
            .append_pair("offset", &query.offset.to_string())
            .append_pair("limit", &query.limit.to_string())
            .append_pair("sortOrder", query.sort_order.as_str());
        url
    }

    pub fn download(&self, file_id: &str) -> Url {
        let mut url = self.join(DOWNLOAD_ENDPOINT);
        url.query_pairs_mut().append_pair("id", file_id);
        url
    }

    fn join(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        let prefix = self.base.path().trim_end_matches('/');
        url.set_path(&format!("{}/{}", prefix, path));
        url
    }
}
