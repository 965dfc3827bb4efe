use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AppError;
use crate::models::Quote;

/// Write the header row and one row per quote to `writer`.
///
/// The header is always written, even for an empty collection.
pub fn write_quotes<W: Write>(quotes: &[Quote], writer: W) -> Result<(), AppError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(Quote::field_names()?)?;
    for quote in quotes {
        csv_writer.serialize(quote)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write all quotes to `path` as CSV.
///
/// A regular file (or a symlink to one) is only replaced once the new
/// content is complete: rows go to a temp file next to the target, which is
/// renamed over it on success and dropped on failure. A missing target is
/// created the same way. An existing non-regular target such as a device or
/// pipe is written in place and never removed.
pub fn write_quotes_to_path(quotes: &[Quote], path: &Path) -> Result<(), AppError> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_file() && !meta.is_dir() => {
            write_quotes(quotes, File::create(path)?)?;
        }
        Ok(_) => {
            let target = fs::canonicalize(path)?;
            replace_atomically(&target, |file| write_quotes(quotes, file))?;
        }
        Err(_) => replace_atomically(path, |file| write_quotes(quotes, file))?,
    }

    tracing::info!(path = %path.display(), rows = quotes.len(), "Quotes written");
    Ok(())
}

/// Run `write` against a temp file in `target`'s directory, then rename it
/// over `target`. The temp file is deleted on every error path.
fn replace_atomically<F>(target: &Path, write: F) -> Result<(), AppError>
where
    F: FnOnce(&mut File) -> Result<(), AppError>,
{
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    write(temp.as_file_mut())?;
    temp.as_file().sync_all()?;

    // Keep the mode of the file being replaced.
    if let Ok(meta) = fs::metadata(target)
        && meta.is_file()
    {
        temp.as_file().set_permissions(meta.permissions())?;
    }

    temp.persist(target).map_err(|e| AppError::WriteError(e.error))?;
    Ok(())
}

/// Parse CSV produced by [`write_quotes`] back into quotes.
pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<Quote>, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .map(|row| row.map_err(AppError::from))
        .collect()
}
