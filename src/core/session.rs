// src/core/session.rs
//! Cookie-carrying HTTP session shared by login, query and downloads

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderValue, ACCEPT, COOKIE};
use reqwest::{Client, Response};
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::error::NetworkError;

const JSON_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/69.0.3497.100 Safari/537.36";

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// A single `name=value` pair from the cookie jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    /// Render a list of cookies as one `Cookie` request header value.
    pub fn header_value(cookies: &[Cookie]) -> String {
        cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn parse_header(header: &str) -> Vec<Cookie> {
        header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                if name.is_empty() {
                    return None;
                }
                Some(Cookie {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

pub struct Session {
    client: Client,
    raw_client: Client,
    jar: Arc<Jar>,
}

impl Session {
    pub fn new(settings: &HttpSettings) -> Result<Self, NetworkError> {
        let jar = Arc::new(Jar::default());
        let timeout = Duration::from_secs(settings.timeout_seconds);

        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .cookie_provider(Arc::clone(&jar))
            .timeout(timeout)
            .build()
            .map_err(NetworkError::Client)?;

        // No cookie store: downloads carry the session cookies by hand.
        let raw_client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(timeout)
            .build()
            .map_err(NetworkError::Client)?;

        Ok(Self {
            client,
            raw_client,
            jar,
        })
    }

    /// GET an HTML page. Cookies set along the way land in the jar.
    pub async fn fetch_page(&self, url: &Url) -> Result<String, NetworkError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        read_text(url, check_status(url, response)?).await
    }

    /// GET a JSON document and return the raw body.
    pub async fn fetch_json(&self, url: &Url) -> Result<String, NetworkError> {
        debug!("GET {} (json)", url);
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, JSON_ACCEPT)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        read_text(url, check_status(url, response)?).await
    }

    /// POST form-encoded fields with the jar's cookies attached.
    pub async fn submit_form(&self, url: &Url, fields: &[(&str, &str)]) -> Result<(), NetworkError> {
        debug!("POST {} ({} fields)", url, fields.len());
        let response = self
            .client
            .post(url.clone())
            .form(fields)
            .send()
            .await
            .map_err(|e| transport(url, e))?;

        check_status(url, response)?;
        Ok(())
    }

    /// Cookies in the jar that apply to `url`.
    pub fn cookies_for(&self, url: &Url) -> Vec<Cookie> {
        self.jar
            .cookies(url)
            .and_then(|header| header.to_str().map(Cookie::parse_header).ok())
            .unwrap_or_default()
    }

    /// GET on the cookie-less client with `cookies` attached by hand. The
    /// response body is left untouched so callers can stream raw bytes.
    pub async fn get_with_cookies(
        &self,
        url: &Url,
        cookies: &[Cookie],
    ) -> Result<Response, NetworkError> {
        let mut request = self.raw_client.get(url.clone());
        if !cookies.is_empty() {
            let value = HeaderValue::from_str(&Cookie::header_value(cookies)).map_err(|source| {
                NetworkError::InvalidCookie {
                    url: url.to_string(),
                    source,
                }
            })?;
            request = request.header(COOKIE, value);
        }

        let response = request.send().await.map_err(|e| transport(url, e))?;
        if !response.status().is_success() {
            return Err(NetworkError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }
}

/// Value attribute of the first element matching `selector`, or an empty
/// string when nothing matches.
pub fn extract_field(html: &str, selector: &str) -> String {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("Invalid selector {}: {}", selector, e);
            return String::new();
        }
    };

    Html::parse_document(html)
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("value"))
        .unwrap_or_default()
        .to_string()
}

fn transport(url: &Url, source: reqwest::Error) -> NetworkError {
    NetworkError::Transport {
        url: url.to_string(),
        source,
    }
}

fn check_status(url: &Url, response: Response) -> Result<Response, NetworkError> {
    let status = response.status();
    if status.is_success() || status.is_redirection() {
        Ok(response)
    } else {
        Err(NetworkError::Status {
            url: url.to_string(),
            status,
        })
    }
}

async fn read_text(url: &Url, response: Response) -> Result<String, NetworkError> {
    response.text().await.map_err(|e| transport(url, e))
}
