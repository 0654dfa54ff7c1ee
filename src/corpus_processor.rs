/*!
 * Per-file processing: load a corpus document, run the annotation pass and
 * write the result back, taking a one-time backup of the original.
 */

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::annotator;
use crate::file_utils::FileManager;

/// Annotate one corpus file in place and return the number of verses newly
/// marked.
///
/// The file is parsed and annotated fully in memory before anything touches
/// the filesystem, so a parse or structure error leaves the input untouched.
/// Backup policy: the original file is renamed to `<path>.backup` only if
/// that backup does not already exist; repeated runs never stack backups,
/// and only the first run's pre-annotation content is preserved.
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    info!("Processing: {:?}", path);

    let content = FileManager::read_to_string(path)?;
    let mut document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus file: {:?}", path))?;

    let modified = annotator::annotate(&mut document)
        .with_context(|| format!("Malformed corpus structure in {:?}", path))?;

    let backup = FileManager::backup_path(path);
    if !backup.exists() {
        fs::rename(path, &backup)
            .with_context(|| format!("Failed to back up {:?} to {:?}", path, backup))?;
        info!("  Created backup: {:?}", backup);
    } else {
        debug!("  Backup already exists, keeping: {:?}", backup);
    }

    // Pretty output with insertion order preserved and non-ASCII text kept
    // literal, so annotated files stay diffable against their backups
    let serialized = serde_json::to_string_pretty(&document)
        .context("Failed to serialize annotated corpus")?;
    FileManager::write_to_file(path, &serialized)?;

    info!("  Added red letter markup to {} verses", modified);
    Ok(modified)
}
