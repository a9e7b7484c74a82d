//! End-to-end export run
//!
//! Download (optional) → decode every locale → build → write. All locales are
//! decoded before the output file is touched, so a failure never leaves a
//! partial catalog behind.

use crate::catalog::build_catalog;
use crate::error::{CatalogError, Result};
use crate::fetcher::{http_client, update_cache, DEFAULT_TIMEOUT};
use crate::locale::{default_locales, Locale};
use crate::writer::write_catalog;
use fab_common::{decode_cards, CardRecord};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Download every locale before building; otherwise use the cache as is
    pub update: bool,
    /// Branch or tag substituted into the locale URL templates
    pub branch: String,
    pub locales: Vec<Locale>,
    /// Directory holding `<locale>.json` dataset files
    pub cache_dir: PathBuf,
    /// CSV file to write
    pub output: PathBuf,
    /// Per-request download timeout
    pub timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            update: true,
            branch: "develop".to_string(),
            locales: default_locales(),
            cache_dir: PathBuf::from("cards"),
            output: PathBuf::from("cards.csv"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub locales: usize,
    pub rows: usize,
    pub output: PathBuf,
}

/// Run the export described by `config`
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    log::info!("Working with '{}' branch.", config.branch);

    if config.update {
        let client = http_client(config.timeout)?;
        for locale in &config.locales {
            update_cache(&client, locale, &config.branch, &config.cache_dir)?;
        }
    } else {
        log::info!(
            "Update disabled, using cached datasets in {}",
            config.cache_dir.display()
        );
    }

    log::info!("Generating CSV...");

    let mut records_by_locale = Vec::with_capacity(config.locales.len());
    for locale in &config.locales {
        records_by_locale.push(load_cards(locale, &config.cache_dir)?);
    }

    let rows = build_catalog(&records_by_locale);
    write_catalog(&rows, &config.output)?;

    Ok(RunSummary {
        locales: config.locales.len(),
        rows: rows.len(),
        output: config.output.clone(),
    })
}

/// Read and decode the cached dataset of one locale
pub fn load_cards(locale: &Locale, cache_dir: &Path) -> Result<Vec<CardRecord>> {
    let path = locale.cache_file(cache_dir);

    let bytes = std::fs::read(&path).map_err(|source| CatalogError::CacheRead {
        path: path.clone(),
        source,
    })?;

    let cards = decode_cards(&bytes).map_err(|source| CatalogError::Decode {
        locale: locale.code().to_string(),
        path: path.clone(),
        source,
    })?;

    log::info!(
        "Loaded {} cards for '{}' from {}",
        cards.len(),
        locale.code(),
        path.display()
    );
    Ok(cards)
}
