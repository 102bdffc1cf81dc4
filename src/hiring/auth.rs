// src/hiring/auth.rs
use std::fmt;
use std::ops::Deref;

use tracing::{info, warn};

use super::endpoints::Endpoints;
use crate::core::{extract_field, Session};
use crate::error::AuthError;

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Hidden fields the login form expects back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub csrf_token: String,
    pub login: String,
    pub tz: String,
    pub redirect: String,
}

impl LoginForm {
    /// Scrape the hidden fields from the login page. Missing fields stay
    /// empty; the POST is attempted anyway.
    pub fn from_page(html: &str) -> Self {
        let form = Self {
            csrf_token: extract_field(html, "input[name='CSRFToken']"),
            login: extract_field(html, "input[name='login']"),
            tz: extract_field(html, "input[name='tz']"),
            redirect: extract_field(html, "input[name='r']"),
        };

        if form.csrf_token.is_empty() {
            warn!("Login page has no CSRFToken field; the page layout may have changed");
        }
        if form.login.is_empty() {
            warn!("Login page has no login token field");
        }
        form
    }

    pub fn fields<'a>(&'a self, credentials: &'a Credentials) -> [(&'static str, &'a str); 6] {
        [
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
            ("login", self.login.as_str()),
            ("tz", self.tz.as_str()),
            ("r", self.redirect.as_str()),
            ("CSRFToken", self.csrf_token.as_str()),
        ]
    }
}

/// A session whose jar holds the cookies of a completed login POST.
pub struct AuthenticatedSession {
    session: Session,
}

impl Deref for AuthenticatedSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

/// Two-step login: GET the form, POST it back with the credentials.
///
/// Only transport failures are reported. A wrong password still "succeeds"
/// here and shows up later as an unauthenticated candidate query.
pub async fn login(
    session: Session,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<AuthenticatedSession, AuthError> {
    let url = endpoints.login();
    info!("Logging in to {} as {}", url, credentials.username);

    let page = session
        .fetch_page(&url)
        .await
        .map_err(AuthError::LoginPage)?;
    let form = LoginForm::from_page(&page);

    session
        .submit_form(&url, &form.fields(credentials))
        .await
        .map_err(AuthError::Submit)?;

    info!("Login form submitted");
    Ok(AuthenticatedSession { session })
}
