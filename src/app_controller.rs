use anyhow::{Result, anyhow};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::corpus_processor;
use crate::file_utils::FileManager;

// @module: Application controller for corpus annotation

/// Main application controller for red letter annotation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Annotate a single corpus file, returning the number of verses marked
    pub fn run(&self, input_file: PathBuf) -> Result<usize> {
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        corpus_processor::process_file(&input_file)
    }

    /// Annotate every corpus file under the configured directory.
    ///
    /// Files are processed one at a time; a failing file is logged and the
    /// batch continues with the rest. Returns the aggregate verse count and
    /// the number of files processed successfully.
    pub fn run_all(&self) -> Result<(usize, usize)> {
        let corpus_dir = Path::new(&self.config.corpus_dir);
        if !FileManager::dir_exists(corpus_dir) {
            return Err(anyhow!(
                "Corpus directory does not exist: {:?}",
                corpus_dir
            ));
        }

        let files = FileManager::find_files(corpus_dir, "json")?;
        if files.is_empty() {
            warn!("No corpus files found in {:?}", corpus_dir);
            return Ok((0, 0));
        }

        let mut total_verses = 0;
        let mut processed_files = 0;

        for file in &files {
            match corpus_processor::process_file(file) {
                Ok(count) => {
                    total_verses += count;
                    processed_files += 1;
                }
                Err(e) => error!("Error processing {:?}: {:#}", file, e),
            }
        }

        info!(
            "Total: added red letter markup to {} verses across {} files",
            total_verses, processed_files
        );

        Ok((total_verses, processed_files))
    }
}
