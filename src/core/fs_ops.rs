// src/core/fs_ops.rs
//! File system operations used by the download loop

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reqwest::Response;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::{DownloadError, NetworkError};

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
        if !fs::try_exists(path).await? {
            fs::create_dir_all(path).await?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn file_exists(path: &Path) -> Result<bool, DownloadError> {
        fs::try_exists(path).await.map_err(|source| DownloadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Sibling path used while a download is in flight.
    pub fn part_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("download"));
        name.push(".part");
        path.with_file_name(name)
    }

    /// Stream a response body verbatim into `dest`.
    ///
    /// Bytes go to `dest.part` first and are linked into place once the
    /// body is complete, so an interrupted transfer never leaves a file that
    /// the next run would mistake for a finished download. Neither the
    /// `.part` file nor `dest` is ever overwritten: an existing `dest` gives
    /// `DownloadError::Exists`, an existing `.part` gives an I/O error.
    pub async fn stream_to_file(mut response: Response, dest: &Path) -> Result<u64, DownloadError> {
        let part = Self::part_path(dest);
        let io_err = |source: std::io::Error| DownloadError::Io {
            path: part.clone(),
            source,
        };

        let url = response.url().to_string();
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&part)
            .await
            .map_err(io_err)?;
        let mut written: u64 = 0;

        let streamed = async {
            while let Some(chunk) = response.chunk().await.map_err(|source| {
                DownloadError::Network(NetworkError::Transport {
                    url: url.clone(),
                    source,
                })
            })? {
                file.write_all(&chunk).await.map_err(io_err)?;
                written += chunk.len() as u64;
            }
            file.flush().await.map_err(io_err)?;
            file.sync_all().await.map_err(io_err)
        }
        .await;

        drop(file);
        if let Err(e) = streamed {
            Self::discard(&part).await;
            return Err(e);
        }

        let committed = Self::commit(&part, dest).await;
        Self::discard(&part).await;
        committed?;

        debug!("Wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }

    /// Publish `part` at `dest` without replacing an existing file. Uses a
    /// hard link, falling back to an exclusive-create copy on file systems
    /// without link support.
    async fn commit(part: &Path, dest: &Path) -> Result<(), DownloadError> {
        let exists = || DownloadError::Exists {
            path: dest.to_path_buf(),
        };
        let dest_err = |source: std::io::Error| DownloadError::Io {
            path: dest.to_path_buf(),
            source,
        };

        match fs::hard_link(part, dest).await {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(exists()),
            Err(e) => debug!("Hard link to {} failed ({}), copying instead", dest.display(), e),
        }

        let mut target = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dest)
            .await
        {
            Ok(target) => target,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(exists()),
            Err(e) => return Err(dest_err(e)),
        };

        let copied = async {
            let mut source = fs::File::open(part).await?;
            tokio::io::copy(&mut source, &mut target).await?;
            target.sync_all().await
        }
        .await;

        drop(target);
        if let Err(e) = copied {
            Self::discard(dest).await;
            return Err(dest_err(e));
        }
        Ok(())
    }

    async fn discard(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            if e.kind() != ErrorKind::NotFound {
                warn!("Could not remove partial file {}: {}", path.display(), e);
            }
        }
    }
}
