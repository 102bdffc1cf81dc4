// src/hiring/mod.rs
//! BambooHR hiring endpoints: login, candidate query, resume downloads

pub mod auth;
pub mod candidates;
pub mod endpoints;
pub mod resumes;

pub use auth::{login, AuthenticatedSession, Credentials, LoginForm};
pub use candidates::{fetch_candidates, parse_candidates};
pub use endpoints::{CandidateQuery, Endpoints, SortOrder};
pub use resumes::{resume_path, FileNaming, ResumeDownloader};
