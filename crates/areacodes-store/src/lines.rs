use crate::error::{Result, StoreError};
use crate::paths;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Reads a text file as lines. Surrounding whitespace of the whole file is
/// trimmed first, so a trailing newline does not produce an empty entry.
/// Invalid UTF-8 is replaced rather than rejected; such lines are garbage
/// for the normalization pipeline to drop.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    paths::ensure_file(path)?;
    let bytes = fs::read(path).map_err(|err| StoreError::from_io(path, err))?;
    let contents = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = contents.trim().lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "file read");
    Ok(lines)
}

/// Writes each line followed by `\n`, replacing any file already at `path`.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths::ensure_parent_dir(path)?;
    paths::remove_file_if_exists(path)?;

    let file = File::create(path).map_err(|err| StoreError::from_io(path, err))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    debug!(path = %path.display(), lines = written, "file written");
    Ok(())
}
