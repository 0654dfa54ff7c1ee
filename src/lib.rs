/*!
 * # redletter
 *
 * A Rust tool that adds red letter markup to Bible JSON corpora.
 *
 * ## Features
 *
 * - Wraps the words of Jesus in `[r]...[/r]` markers, following the verse
 *   ranges of traditional red letter Bible editions
 * - Idempotent: already-marked verses are left untouched, so the tool can
 *   run repeatedly over the same corpus
 * - Tolerant of sparse corpora: books, chapters or verses a translation
 *   lacks are skipped silently
 * - One-time backup of each file before its first annotated write
 * - Batch mode over a configured corpus directory
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `red_letter`: The static red letter range table and marker tokens
 * - `annotator`: The in-memory annotation pass
 * - `corpus_processor`: Per-file load, annotate, backup and write
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod annotator;
pub mod app_config;
pub mod app_controller;
pub mod corpus_processor;
pub mod errors;
pub mod file_utils;
pub mod red_letter;

// Re-export main types for easier usage
pub use annotator::{annotate, annotate_ranges};
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, DocumentError};
pub use red_letter::{CLOSE_MARKER, OPEN_MARKER, RED_LETTER_RANGES, RedLetterRange};
