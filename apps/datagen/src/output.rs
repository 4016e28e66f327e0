use crate::counties::CountyIndex;
use crate::error::DatagenError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the index as 2-space indented JSON, replacing any previous file.
///
/// The JSON goes to a temporary file next to `path` that is renamed over it,
/// so a failed run leaves the previous file intact.
pub fn write_index(path: &Path, index: &CountyIndex) -> Result<(), DatagenError> {
    let io_error = |source| DatagenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let mut json = serde_json::to_string_pretty(index).map_err(DatagenError::Encode)?;
    json.push('\n');

    let mut staged = NamedTempFile::new_in(parent).map_err(io_error)?;
    staged.write_all(json.as_bytes()).map_err(io_error)?;
    staged.as_file().sync_all().map_err(io_error)?;
    staged.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}
