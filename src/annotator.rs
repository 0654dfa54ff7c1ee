/*!
 * Core annotation pass over a parsed corpus document.
 *
 * Walks the static red letter table and wraps each addressed verse in the
 * marker pair, in place. Absent books, chapters or verses are skipped
 * silently so the same table works across translations; values that are
 * present but of the wrong kind surface as structural errors.
 */

use serde_json::Value;

use crate::errors::DocumentError;
use crate::red_letter::{CLOSE_MARKER, OPEN_MARKER, RED_LETTER_RANGES, RedLetterRange};

/// Apply the full red letter table to a document, returning how many verses
/// were newly marked.
///
/// Idempotent: verse text already starting with the opening marker is left
/// unchanged and does not count.
pub fn annotate(document: &mut Value) -> Result<usize, DocumentError> {
    annotate_ranges(document, RED_LETTER_RANGES)
}

/// Apply an explicit range table to a document. Mutates the document in
/// place and returns the number of verses newly marked.
pub fn annotate_ranges(
    document: &mut Value,
    ranges: &[RedLetterRange],
) -> Result<usize, DocumentError> {
    let books = document
        .get_mut("books")
        .and_then(Value::as_object_mut)
        .ok_or(DocumentError::MissingBooks)?;

    let mut modified = 0;

    for range in ranges {
        let Some(book) = books.get_mut(range.book) else {
            continue;
        };
        let book = book.as_object_mut().ok_or_else(|| DocumentError::NotAnObject {
            path: format!("books.{}", range.book),
        })?;

        let Some(chapters) = book.get_mut("chapters") else {
            continue;
        };
        let chapters = chapters
            .as_object_mut()
            .ok_or_else(|| DocumentError::NotAnObject {
                path: format!("books.{}.chapters", range.book),
            })?;

        // Chapter and verse numbers are stored as string keys
        let chapter_key = range.chapter.to_string();
        let Some(chapter) = chapters.get_mut(&chapter_key) else {
            continue;
        };
        let chapter = chapter
            .as_object_mut()
            .ok_or_else(|| DocumentError::NotAnObject {
                path: format!("books.{}.chapters.{}", range.book, range.chapter),
            })?;

        let Some(verses) = chapter.get_mut("verses") else {
            continue;
        };
        let verses = verses
            .as_object_mut()
            .ok_or_else(|| DocumentError::NotAnObject {
                path: format!("books.{}.chapters.{}.verses", range.book, range.chapter),
            })?;

        for verse_num in range.verses() {
            let Some(slot) = verses.get_mut(&verse_num.to_string()) else {
                continue;
            };
            let text = slot.as_str().ok_or_else(|| DocumentError::VerseNotText {
                book: range.book.to_string(),
                chapter: range.chapter,
                verse: verse_num,
            })?;

            // Skip if already has red letter markup
            if text.starts_with(OPEN_MARKER) {
                continue;
            }

            let wrapped = format!("{}{}{}", OPEN_MARKER, text, CLOSE_MARKER);
            *slot = Value::String(wrapped);
            modified += 1;
        }
    }

    Ok(modified)
}
