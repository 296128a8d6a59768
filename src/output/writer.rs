// src/output/writer.rs
// =============================================================================
// Writes results as pretty-printed JSON (4-space indent) and failure causes
// as log files.
//
// Destination names get their extension appended when it is missing:
//   "external_resources"      -> "external_resources.json"
//   "external_resources.JSON" -> unchanged (the check ignores case)
//   "error"                   -> "error.log"
// Existing files are overwritten.
// =============================================================================

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ScrapeError};

// Serializes `data` into `<name>.json` and returns the path written
pub fn write_json<T: Serialize + ?Sized>(data: &T, name: &str) -> Result<PathBuf> {
    let path = with_extension(name, "json");
    write_pretty(data, &path)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

// Records a failure message in `<name>.log`
//
// The message is stored JSON-encoded (a quoted string), so the file stays
// machine-readable like the result files.
pub fn write_log(message: &str, name: &str) -> Result<PathBuf> {
    let path = with_extension(name, "log");
    write_pretty(message, &path)?;
    log::debug!("logged failure to {}", path.display());
    Ok(path)
}

fn with_extension(name: &str, extension: &str) -> PathBuf {
    let current = name.rsplit('.').next().unwrap_or_default();
    if current.eq_ignore_ascii_case(extension) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}.{}", name, extension))
    }
}

fn write_pretty<T: Serialize + ?Sized>(data: &T, path: &Path) -> Result<()> {
    let write_error = |reason: String| ScrapeError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::create(path).map_err(|e| write_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)
        .map_err(|e| write_error(e.to_string()))?;

    writer.flush().map_err(|e| write_error(e.to_string()))
}
