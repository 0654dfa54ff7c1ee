/*!
 * Common test utilities for the redletter test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small corpus document exercising both addressed and unaddressed verses:
/// John 3:16-17 fall inside the red letter table, John 3:22 and everything
/// in Genesis do not.
pub fn sample_corpus() -> &'static str {
    r#"{
  "translation": "KJV",
  "books": {
    "Genesis": {
      "chapters": {
        "1": {
          "verses": {
            "1": "In the beginning God created the heaven and the earth."
          }
        }
      }
    },
    "John": {
      "chapters": {
        "3": {
          "verses": {
            "16": "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
            "17": "For God sent not his Son into the world to condemn the world; but that the world through him might be saved.",
            "22": "After these things came Jesus and his disciples into the land of Judaea; and there he tarried with them, and baptized."
          }
        }
      }
    }
  }
}"#
}

/// Number of verses in `sample_corpus` that the red letter table addresses
pub const SAMPLE_CORPUS_RED_VERSES: usize = 2;

/// Creates a sample corpus file for testing
pub fn create_test_corpus(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_corpus())
}
