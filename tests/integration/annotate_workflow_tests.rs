/*!
 * End-to-end tests for the file processing workflow: load, annotate,
 * backup-once, write, and batch runs over a corpus directory.
 */

use anyhow::Result;
use redletter::app_config::Config;
use redletter::app_controller::Controller;
use redletter::corpus_processor;
use redletter::file_utils::FileManager;
use std::fs;

use crate::common;

/// Test that a fresh corpus file is annotated, counted and backed up
#[test]
fn test_process_file_withFreshCorpus_shouldAnnotateAndBackup() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let corpus_file = common::create_test_corpus(&temp_dir.path().to_path_buf(), "kjv.json")?;

    let count = corpus_processor::process_file(&corpus_file)?;

    assert_eq!(count, common::SAMPLE_CORPUS_RED_VERSES);

    // The backup holds the exact pre-annotation bytes
    let backup = FileManager::backup_path(&corpus_file);
    assert!(backup.exists());
    assert_eq!(fs::read_to_string(&backup)?, common::sample_corpus());

    // The corpus file itself now carries the markers
    let annotated = fs::read_to_string(&corpus_file)?;
    assert!(annotated.contains("[r]For God so loved the world"));
    assert!(annotated.contains("[/r]"));
    Ok(())
}

/// Test the backup-once guarantee: a second run changes nothing and keeps
/// the first run's backup
#[test]
fn test_process_file_withSecondRun_shouldKeepFirstBackupAndCountZero() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let corpus_file = common::create_test_corpus(&temp_dir.path().to_path_buf(), "kjv.json")?;

    let first = corpus_processor::process_file(&corpus_file)?;
    let annotated_after_first = fs::read_to_string(&corpus_file)?;

    let second = corpus_processor::process_file(&corpus_file)?;

    assert_eq!(first, common::SAMPLE_CORPUS_RED_VERSES);
    assert_eq!(second, 0);
    assert_eq!(fs::read_to_string(&corpus_file)?, annotated_after_first);

    // Exactly one backup, holding the pre-annotation content rather than
    // any intermediate state
    let backup = FileManager::backup_path(&corpus_file);
    assert_eq!(fs::read_to_string(&backup)?, common::sample_corpus());
    assert!(!FileManager::backup_path(&backup).exists());
    Ok(())
}

/// Test that invalid JSON aborts before any write or backup
#[test]
fn test_process_file_withInvalidJson_shouldErrorAndLeaveFileUntouched() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let corpus_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "broken.json", "not json at all")?;

    let result = corpus_processor::process_file(&corpus_file);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&corpus_file)?, "not json at all");
    assert!(!FileManager::backup_path(&corpus_file).exists());
    Ok(())
}

/// Test that a structurally invalid document aborts before any write
#[test]
fn test_process_file_withMissingBooksKey_shouldErrorWithoutBackup() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = r#"{"translation": "KJV"}"#;
    let corpus_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "odd.json", content)?;

    let result = corpus_processor::process_file(&corpus_file);

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&corpus_file)?, content);
    assert!(!FileManager::backup_path(&corpus_file).exists());
    Ok(())
}

/// Test that output is indented, key order is preserved and non-ASCII text
/// stays literal rather than escaped
#[test]
fn test_process_file_withNonAsciiVerse_shouldWriteDiffableOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = r#"{
  "translation": "LSG",
  "books": {
    "Luke": {
      "chapters": {
        "23": {
          "verses": {
            "43": "Je te le dis en vérité, aujourd'hui tu seras avec moi dans le paradis."
          }
        }
      }
    }
  }
}"#;
    let corpus_file =
        common::create_test_file(&temp_dir.path().to_path_buf(), "lsg.json", content)?;

    let count = corpus_processor::process_file(&corpus_file)?;
    assert_eq!(count, 1);

    let written = fs::read_to_string(&corpus_file)?;
    // Multi-line indented output
    assert!(written.contains("\n  \"books\""));
    // Non-ASCII preserved literally, not \u-escaped
    assert!(written.contains("vérité"));
    assert!(!written.contains("\\u00e9"));
    // Insertion order preserved: translation metadata still comes first
    let translation_pos = written.find("\"translation\"").unwrap();
    let books_pos = written.find("\"books\"").unwrap();
    assert!(translation_pos < books_pos);
    Ok(())
}

/// Test that the controller rejects a missing input file
#[test]
fn test_controller_run_withNonExistentFile_shouldError() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    let result = controller.run("no_such_corpus.json".into());

    assert!(result.is_err());
    Ok(())
}

/// Test that a batch run aggregates counts and continues past bad files
#[test]
fn test_controller_run_all_withCorpusDirectory_shouldAggregateAndContinue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    common::create_test_corpus(&dir, "kjv.json")?;
    common::create_test_corpus(&dir, "web.json")?;
    common::create_test_file(&dir, "broken.json", "not json")?;
    common::create_test_file(&dir, "notes.txt", "ignored")?;

    let config = Config {
        corpus_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    let (total_verses, processed_files) = controller.run_all()?;

    assert_eq!(total_verses, 2 * common::SAMPLE_CORPUS_RED_VERSES);
    assert_eq!(processed_files, 2);

    // A second batch run is a no-op for the already annotated files and
    // never picks up the backups it created
    let (second_total, second_files) = controller.run_all()?;
    assert_eq!(second_total, 0);
    assert_eq!(second_files, 2);
    Ok(())
}

/// Test that a batch run over a missing directory fails up front
#[test]
fn test_controller_run_all_withMissingDirectory_shouldError() -> Result<()> {
    let config = Config {
        corpus_dir: "definitely/not/a/dir".to_string(),
        ..Config::default()
    };
    let controller = Controller::with_config(config)?;

    assert!(controller.run_all().is_err());
    Ok(())
}
