// src/core/mod.rs
//! HTTP session and file system plumbing shared by the hiring pipeline

pub mod fs_ops;
pub mod session;

pub use fs_ops::FsOps;
pub use session::{extract_field, Cookie, HttpSettings, Session};
