//! Dataset download into the local cache
//!
//! Uses a blocking reqwest client with a bounded timeout. There is no retry:
//! a failed download aborts the run and the previous cache file stays as it was.

use crate::error::{CatalogError, Result};
use crate::locale::Locale;
use reqwest::blocking::Client;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = "fab_catalog/1.0";

/// Build the HTTP client used for dataset downloads
pub fn http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download the body at `url`, failing on any non-success status
pub fn fetch_dataset(client: &Client, url: &str) -> Result<Vec<u8>> {
    log::debug!("Fetching dataset from URL: {}", url);

    let response = client.get(url).send()?;

    if !response.status().is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response.bytes()?.to_vec())
}

/// Download the dataset of `locale` at `branch` and store it in `cache_dir`.
///
/// Returns the path of the refreshed cache file.
pub fn update_cache(
    client: &Client,
    locale: &Locale,
    branch: &str,
    cache_dir: &Path,
) -> Result<PathBuf> {
    let url = locale.url(branch);
    log::info!("Downloading {}...", locale.code());

    let bytes = fetch_dataset(client, &url)?;
    let path = locale.cache_file(cache_dir);
    store(&path, &bytes)?;

    log::info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

/// Write through a sibling file and rename, so an interrupted write never
/// truncates the previous cache. The sibling is removed if either step fails.
fn store(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(cache_error(parent))?;
    }

    let partial = path.with_extension("json.part");
    let stored = std::fs::write(&partial, bytes).and_then(|()| std::fs::rename(&partial, path));

    if let Err(source) = stored {
        if let Err(e) = std::fs::remove_file(&partial) {
            log::debug!("Could not remove {}: {}", partial.display(), e);
        }
        return Err(cache_error(path)(source));
    }
    Ok(())
}

fn cache_error(path: &Path) -> impl FnOnce(io::Error) -> CatalogError + '_ {
    move |source| CatalogError::CacheWrite {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
