use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use reqwest::Client;
use tokio::{fs, io::AsyncWriteExt};

use crate::error::DownloadError;

/// Where a file is written while it is still being downloaded.
pub fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

/// Streams `url` into `dest` and returns the number of bytes written.
///
/// The body goes to a `.part` file next to `dest`, which is renamed once the
/// transfer completes and removed if it fails. Parent directories are
/// created as needed. `pb` advances with every chunk and gets its length
/// from `Content-Length` when the server sends one.
pub async fn download_file(
    http: &Client,
    url: &str,
    dest: &Path,
    pb: &ProgressBar,
) -> Result<u64, DownloadError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DownloadError::Status(status));
    }
    if let Some(length) = response.content_length() {
        pb.set_length(length);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).await?;
    }

    let partial = partial_path(dest);
    match write_body(response, &partial, pb).await {
        Ok(written) => {
            fs::rename(&partial, dest).await?;
            Ok(written)
        }
        Err(e) => {
            let _ = fs::remove_file(&partial).await;
            Err(e)
        }
    }
}

async fn write_body(
    mut response: reqwest::Response,
    path: &Path,
    pb: &ProgressBar,
) -> Result<u64, DownloadError> {
    let mut file = fs::File::create(path).await?;
    let mut written: u64 = 0;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        pb.inc(chunk.len() as u64);
    }

    file.flush().await?;
    Ok(written)
}
