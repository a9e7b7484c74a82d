//! CSV catalog output

use crate::catalog::CatalogRow;
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Write the catalog to `path`, replacing any existing file.
///
/// One line per row, no header, every line terminated by `\n`.
pub fn write_catalog(rows: &[CatalogRow], path: &Path) -> Result<()> {
    log::info!("Writing {} rows to {}", rows.len(), path.display());

    let write_error = |source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    write_rows(rows, file).map_err(write_error)
}

/// Write rows into any writer.
///
/// Fields are already rendered, so quoting is switched off and every field is
/// emitted verbatim.
pub fn write_rows<W: io::Write>(rows: &[CatalogRow], writer: W) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in rows {
        wtr.write_record(row.fields())?;
    }

    wtr.flush()
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
