/*!
 * Static red letter range table.
 *
 * The comprehensive list of verse ranges spoken by Jesus, following the
 * conventions of traditional red letter Bible editions. The table is a
 * superset across translations: entries addressing a book or chapter a given
 * corpus file does not contain are simply skipped by the annotator.
 */

/// Opening marker inserted before red letter verse text
pub const OPEN_MARKER: &str = "[r]";

/// Closing marker appended after red letter verse text
pub const CLOSE_MARKER: &str = "[/r]";

/// A contiguous run of verses within one chapter that receives the marker.
///
/// `last_verse` is inclusive; a single-verse entry has
/// `first_verse == last_verse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedLetterRange {
    /// Book name as it appears in the corpus document
    pub book: &'static str,
    /// Chapter number
    pub chapter: u32,
    /// First verse of the range
    pub first_verse: u32,
    /// Last verse of the range, inclusive
    pub last_verse: u32,
}

impl RedLetterRange {
    /// Iterate the verse numbers addressed by this range
    pub fn verses(&self) -> std::ops::RangeInclusive<u32> {
        self.first_verse..=self.last_verse
    }

    /// Whether this range addresses the given verse
    pub fn contains(&self, chapter: u32, verse: u32) -> bool {
        self.chapter == chapter && self.first_verse <= verse && verse <= self.last_verse
    }
}

const fn v(book: &'static str, chapter: u32, first_verse: u32, last_verse: u32) -> RedLetterRange {
    RedLetterRange {
        book,
        chapter,
        first_verse,
        last_verse,
    }
}

/// The full red letter table, grouped by book for readability.
/// Execution order does not matter; every entry is applied independently.
pub static RED_LETTER_RANGES: &[RedLetterRange] = &[
    // MATTHEW
    v("Matthew", 3, 15, 15),
    v("Matthew", 4, 4, 4),
    v("Matthew", 4, 7, 7),
    v("Matthew", 4, 10, 10),
    v("Matthew", 4, 17, 17),
    v("Matthew", 4, 19, 19),
    v("Matthew", 5, 3, 48), // Sermon on the Mount
    v("Matthew", 6, 1, 34), // Sermon on the Mount continued
    v("Matthew", 7, 1, 27), // Sermon on the Mount continued
    v("Matthew", 8, 3, 3),
    v("Matthew", 8, 4, 4),
    v("Matthew", 8, 7, 7),
    v("Matthew", 8, 10, 13),
    v("Matthew", 8, 20, 20),
    v("Matthew", 8, 22, 22),
    v("Matthew", 8, 26, 26),
    v("Matthew", 8, 32, 32),
    v("Matthew", 9, 2, 2),
    v("Matthew", 9, 4, 6),
    v("Matthew", 9, 9, 9),
    v("Matthew", 9, 12, 13),
    v("Matthew", 9, 15, 15),
    v("Matthew", 9, 22, 22),
    v("Matthew", 9, 24, 24),
    v("Matthew", 9, 28, 30),
    v("Matthew", 9, 37, 38),
    v("Matthew", 10, 5, 42), // Sending the Twelve
    v("Matthew", 11, 4, 30),
    v("Matthew", 12, 3, 8),
    v("Matthew", 12, 11, 13),
    v("Matthew", 12, 25, 37),
    v("Matthew", 12, 39, 45),
    v("Matthew", 12, 48, 50),
    v("Matthew", 13, 3, 52), // Parables
    v("Matthew", 14, 16, 16),
    v("Matthew", 14, 18, 18),
    v("Matthew", 14, 27, 27),
    v("Matthew", 14, 29, 29),
    v("Matthew", 14, 31, 31),
    v("Matthew", 15, 3, 11),
    v("Matthew", 15, 13, 20),
    v("Matthew", 15, 24, 24),
    v("Matthew", 15, 26, 28),
    v("Matthew", 15, 32, 32),
    v("Matthew", 15, 34, 34),
    v("Matthew", 16, 2, 4),
    v("Matthew", 16, 6, 12),
    v("Matthew", 16, 13, 13),
    v("Matthew", 16, 15, 15),
    v("Matthew", 16, 17, 19),
    v("Matthew", 16, 23, 28),
    v("Matthew", 17, 7, 7),
    v("Matthew", 17, 9, 9),
    v("Matthew", 17, 11, 12),
    v("Matthew", 17, 17, 17),
    v("Matthew", 17, 20, 21),
    v("Matthew", 17, 22, 23),
    v("Matthew", 17, 25, 27),
    v("Matthew", 18, 2, 35), // Teaching on humility
    v("Matthew", 19, 4, 6),
    v("Matthew", 19, 8, 12),
    v("Matthew", 19, 14, 14),
    v("Matthew", 19, 17, 21),
    v("Matthew", 19, 23, 26),
    v("Matthew", 19, 28, 30),
    v("Matthew", 20, 1, 16), // Parable of workers
    v("Matthew", 20, 18, 19),
    v("Matthew", 20, 21, 23),
    v("Matthew", 20, 25, 28),
    v("Matthew", 20, 32, 32),
    v("Matthew", 21, 2, 3),
    v("Matthew", 21, 13, 13),
    v("Matthew", 21, 16, 16),
    v("Matthew", 21, 19, 22),
    v("Matthew", 21, 24, 27),
    v("Matthew", 21, 28, 44),
    v("Matthew", 22, 2, 14),
    v("Matthew", 22, 18, 21),
    v("Matthew", 22, 29, 32),
    v("Matthew", 22, 37, 40),
    v("Matthew", 22, 42, 45),
    v("Matthew", 23, 2, 39), // Woes to Pharisees
    v("Matthew", 24, 2, 51), // Olivet Discourse
    v("Matthew", 25, 1, 46), // Parables
    v("Matthew", 26, 2, 2),
    v("Matthew", 26, 10, 13),
    v("Matthew", 26, 18, 18),
    v("Matthew", 26, 21, 21),
    v("Matthew", 26, 23, 25),
    v("Matthew", 26, 26, 29),
    v("Matthew", 26, 31, 32),
    v("Matthew", 26, 34, 34),
    v("Matthew", 26, 36, 36),
    v("Matthew", 26, 38, 46),
    v("Matthew", 26, 50, 50),
    v("Matthew", 26, 52, 56),
    v("Matthew", 26, 64, 64),
    v("Matthew", 27, 11, 11),
    v("Matthew", 27, 46, 46),
    v("Matthew", 28, 9, 10),
    v("Matthew", 28, 18, 20), // Great Commission
    // MARK
    v("Mark", 1, 15, 15),
    v("Mark", 1, 17, 17),
    v("Mark", 1, 25, 25),
    v("Mark", 1, 38, 38),
    v("Mark", 1, 41, 41),
    v("Mark", 1, 44, 44),
    v("Mark", 2, 5, 5),
    v("Mark", 2, 8, 11),
    v("Mark", 2, 14, 14),
    v("Mark", 2, 17, 17),
    v("Mark", 2, 19, 22),
    v("Mark", 2, 25, 28),
    v("Mark", 3, 3, 5),
    v("Mark", 3, 23, 29),
    v("Mark", 3, 33, 35),
    v("Mark", 4, 3, 32),
    v("Mark", 4, 35, 35),
    v("Mark", 4, 39, 40),
    v("Mark", 5, 8, 9),
    v("Mark", 5, 19, 19),
    v("Mark", 5, 30, 30),
    v("Mark", 5, 34, 34),
    v("Mark", 5, 36, 36),
    v("Mark", 5, 39, 39),
    v("Mark", 5, 41, 41),
    v("Mark", 6, 4, 4),
    v("Mark", 6, 10, 11),
    v("Mark", 6, 31, 31),
    v("Mark", 6, 37, 38),
    v("Mark", 6, 50, 50),
    v("Mark", 7, 6, 23),
    v("Mark", 7, 27, 27),
    v("Mark", 7, 29, 29),
    v("Mark", 7, 34, 34),
    v("Mark", 8, 1, 3),
    v("Mark", 8, 5, 5),
    v("Mark", 8, 12, 12),
    v("Mark", 8, 15, 15),
    v("Mark", 8, 17, 21),
    v("Mark", 8, 27, 27),
    v("Mark", 8, 29, 29),
    v("Mark", 8, 33, 38),
    v("Mark", 9, 1, 1),
    v("Mark", 9, 12, 13),
    v("Mark", 9, 19, 19),
    v("Mark", 9, 21, 21),
    v("Mark", 9, 23, 23),
    v("Mark", 9, 25, 25),
    v("Mark", 9, 29, 29),
    v("Mark", 9, 31, 31),
    v("Mark", 9, 35, 37),
    v("Mark", 9, 39, 50),
    v("Mark", 10, 3, 9),
    v("Mark", 10, 11, 12),
    v("Mark", 10, 14, 15),
    v("Mark", 10, 18, 21),
    v("Mark", 10, 23, 27),
    v("Mark", 10, 29, 31),
    v("Mark", 10, 33, 34),
    v("Mark", 10, 36, 36),
    v("Mark", 10, 38, 40),
    v("Mark", 10, 42, 45),
    v("Mark", 10, 49, 49),
    v("Mark", 10, 51, 52),
    v("Mark", 11, 2, 6),
    v("Mark", 11, 14, 14),
    v("Mark", 11, 17, 17),
    v("Mark", 11, 22, 26),
    v("Mark", 11, 29, 33),
    v("Mark", 12, 1, 11),
    v("Mark", 12, 15, 17),
    v("Mark", 12, 24, 27),
    v("Mark", 12, 29, 31),
    v("Mark", 12, 34, 34),
    v("Mark", 12, 35, 37),
    v("Mark", 12, 38, 40),
    v("Mark", 12, 43, 44),
    v("Mark", 13, 2, 37), // Olivet Discourse
    v("Mark", 14, 6, 9),
    v("Mark", 14, 13, 15),
    v("Mark", 14, 18, 18),
    v("Mark", 14, 20, 21),
    v("Mark", 14, 22, 25),
    v("Mark", 14, 27, 28),
    v("Mark", 14, 30, 30),
    v("Mark", 14, 32, 32),
    v("Mark", 14, 34, 34),
    v("Mark", 14, 36, 38),
    v("Mark", 14, 41, 42),
    v("Mark", 14, 48, 49),
    v("Mark", 14, 62, 62),
    v("Mark", 15, 2, 2),
    v("Mark", 15, 34, 34),
    v("Mark", 16, 15, 18),
    // LUKE
    v("Luke", 2, 49, 49),
    v("Luke", 4, 4, 4),
    v("Luke", 4, 8, 8),
    v("Luke", 4, 12, 12),
    v("Luke", 4, 18, 21),
    v("Luke", 4, 23, 27),
    v("Luke", 4, 35, 35),
    v("Luke", 4, 43, 44),
    v("Luke", 5, 4, 4),
    v("Luke", 5, 10, 10),
    v("Luke", 5, 13, 14),
    v("Luke", 5, 20, 20),
    v("Luke", 5, 22, 24),
    v("Luke", 5, 27, 27),
    v("Luke", 5, 31, 32),
    v("Luke", 5, 34, 39),
    v("Luke", 6, 3, 5),
    v("Luke", 6, 8, 10),
    v("Luke", 6, 20, 49), // Sermon on the Plain
    v("Luke", 7, 9, 10),
    v("Luke", 7, 13, 15),
    v("Luke", 7, 22, 35),
    v("Luke", 7, 40, 50),
    v("Luke", 8, 5, 18),
    v("Luke", 8, 21, 22),
    v("Luke", 8, 25, 25),
    v("Luke", 8, 28, 28),
    v("Luke", 8, 30, 30),
    v("Luke", 8, 39, 39),
    v("Luke", 8, 45, 46),
    v("Luke", 8, 48, 48),
    v("Luke", 8, 50, 50),
    v("Luke", 8, 52, 52),
    v("Luke", 8, 54, 54),
    v("Luke", 9, 3, 5),
    v("Luke", 9, 13, 14),
    v("Luke", 9, 18, 18),
    v("Luke", 9, 20, 22),
    v("Luke", 9, 23, 27),
    v("Luke", 9, 35, 35),
    v("Luke", 9, 41, 41),
    v("Luke", 9, 44, 44),
    v("Luke", 9, 48, 48),
    v("Luke", 9, 50, 50),
    v("Luke", 9, 55, 56),
    v("Luke", 9, 58, 62),
    v("Luke", 10, 2, 24),
    v("Luke", 10, 26, 28),
    v("Luke", 10, 30, 37),
    v("Luke", 10, 41, 42),
    v("Luke", 11, 2, 13), // Lord's Prayer
    v("Luke", 11, 17, 52),
    v("Luke", 12, 1, 59), // Teachings
    v("Luke", 13, 2, 9),
    v("Luke", 13, 12, 12),
    v("Luke", 13, 15, 16),
    v("Luke", 13, 18, 21),
    v("Luke", 13, 23, 30),
    v("Luke", 13, 32, 35),
    v("Luke", 14, 3, 6),
    v("Luke", 14, 8, 24),
    v("Luke", 14, 26, 35),
    v("Luke", 15, 3, 32), // Parables of lost things
    v("Luke", 16, 1, 13),
    v("Luke", 16, 15, 31),
    v("Luke", 17, 1, 10),
    v("Luke", 17, 14, 14),
    v("Luke", 17, 17, 37),
    v("Luke", 18, 2, 8),
    v("Luke", 18, 14, 14),
    v("Luke", 18, 16, 17),
    v("Luke", 18, 19, 22),
    v("Luke", 18, 24, 30),
    v("Luke", 18, 31, 34),
    v("Luke", 18, 41, 42),
    v("Luke", 19, 5, 5),
    v("Luke", 19, 9, 10),
    v("Luke", 19, 12, 27),
    v("Luke", 19, 30, 31),
    v("Luke", 19, 40, 40),
    v("Luke", 19, 42, 44),
    v("Luke", 19, 46, 46),
    v("Luke", 20, 3, 8),
    v("Luke", 20, 9, 18),
    v("Luke", 20, 23, 26),
    v("Luke", 20, 34, 38),
    v("Luke", 20, 41, 44),
    v("Luke", 20, 46, 47),
    v("Luke", 21, 3, 4),
    v("Luke", 21, 6, 36), // Olivet Discourse
    v("Luke", 22, 10, 22),
    v("Luke", 22, 25, 38),
    v("Luke", 22, 40, 40),
    v("Luke", 22, 42, 42),
    v("Luke", 22, 46, 46),
    v("Luke", 22, 48, 48),
    v("Luke", 22, 51, 51),
    v("Luke", 22, 52, 53),
    v("Luke", 22, 61, 61),
    v("Luke", 22, 67, 70),
    v("Luke", 23, 3, 3),
    v("Luke", 23, 28, 31),
    v("Luke", 23, 34, 34),
    v("Luke", 23, 43, 43),
    v("Luke", 23, 46, 46),
    v("Luke", 24, 17, 17),
    v("Luke", 24, 19, 19),
    v("Luke", 24, 25, 27),
    v("Luke", 24, 36, 36),
    v("Luke", 24, 38, 49),
    // JOHN
    v("John", 1, 38, 39),
    v("John", 1, 42, 43),
    v("John", 1, 47, 47),
    v("John", 1, 50, 51),
    v("John", 2, 4, 4),
    v("John", 2, 7, 8),
    v("John", 2, 16, 16),
    v("John", 2, 19, 19),
    v("John", 3, 3, 21), // Nicodemus
    v("John", 3, 5, 8),
    v("John", 3, 10, 21),
    v("John", 4, 7, 7),
    v("John", 4, 10, 10),
    v("John", 4, 13, 14),
    v("John", 4, 16, 18),
    v("John", 4, 21, 26),
    v("John", 4, 32, 38),
    v("John", 4, 48, 48),
    v("John", 4, 50, 50),
    v("John", 4, 53, 53),
    v("John", 5, 6, 6),
    v("John", 5, 8, 8),
    v("John", 5, 14, 14),
    v("John", 5, 17, 47),
    v("John", 6, 5, 5),
    v("John", 6, 10, 10),
    v("John", 6, 12, 12),
    v("John", 6, 20, 20),
    v("John", 6, 26, 58), // Bread of Life
    v("John", 6, 61, 65),
    v("John", 6, 67, 67),
    v("John", 6, 70, 70),
    v("John", 7, 6, 8),
    v("John", 7, 16, 24),
    v("John", 7, 28, 29),
    v("John", 7, 33, 34),
    v("John", 7, 37, 38),
    v("John", 8, 7, 7),
    v("John", 8, 10, 11),
    v("John", 8, 12, 12),
    v("John", 8, 14, 19),
    v("John", 8, 21, 29),
    v("John", 8, 31, 38),
    v("John", 8, 39, 47),
    v("John", 8, 49, 51),
    v("John", 8, 54, 56),
    v("John", 8, 58, 58),
    v("John", 9, 3, 5),
    v("John", 9, 7, 7),
    v("John", 9, 35, 41),
    v("John", 10, 1, 18), // Good Shepherd
    v("John", 10, 25, 30),
    v("John", 10, 32, 38),
    v("John", 11, 4, 4),
    v("John", 11, 7, 15),
    v("John", 11, 23, 26),
    v("John", 11, 34, 34),
    v("John", 11, 39, 40),
    v("John", 11, 41, 42),
    v("John", 11, 43, 44),
    v("John", 12, 7, 8),
    v("John", 12, 23, 28),
    v("John", 12, 30, 30),
    v("John", 12, 35, 36),
    v("John", 12, 44, 50),
    v("John", 13, 7, 20), // Last Supper
    v("John", 13, 21, 21),
    v("John", 13, 26, 27),
    v("John", 13, 31, 38),
    v("John", 14, 1, 31), // Farewell Discourse
    v("John", 15, 1, 27), // True Vine
    v("John", 16, 1, 33), // Farewell continued
    v("John", 17, 1, 26), // High Priestly Prayer
    v("John", 18, 4, 4),
    v("John", 18, 5, 9),
    v("John", 18, 11, 11),
    v("John", 18, 20, 21),
    v("John", 18, 23, 23),
    v("John", 18, 34, 34),
    v("John", 18, 36, 37),
    v("John", 19, 11, 11),
    v("John", 19, 26, 27),
    v("John", 19, 28, 28),
    v("John", 19, 30, 30),
    v("John", 20, 15, 17),
    v("John", 20, 19, 19),
    v("John", 20, 21, 23),
    v("John", 20, 26, 27),
    v("John", 20, 29, 29),
    v("John", 21, 5, 6),
    v("John", 21, 10, 10),
    v("John", 21, 12, 12),
    v("John", 21, 15, 19),
    v("John", 21, 22, 23),
    // ACTS
    v("Acts", 1, 4, 5),
    v("Acts", 1, 7, 8),
    v("Acts", 9, 4, 6),
    v("Acts", 9, 10, 12),
    v("Acts", 9, 15, 16),
    v("Acts", 18, 9, 10),
    v("Acts", 22, 7, 8),
    v("Acts", 22, 10, 10),
    v("Acts", 22, 18, 21),
    v("Acts", 23, 11, 11),
    v("Acts", 26, 14, 18),
    // REVELATION
    v("Revelation", 1, 8, 8),
    v("Revelation", 1, 11, 11),
    v("Revelation", 1, 17, 20),
    v("Revelation", 2, 1, 29), // Letters to churches
    v("Revelation", 3, 1, 22), // Letters to churches
    v("Revelation", 16, 15, 15),
    v("Revelation", 21, 5, 8),
    v("Revelation", 22, 7, 7),
    v("Revelation", 22, 12, 13),
    v("Revelation", 22, 16, 16),
    v("Revelation", 22, 20, 20),
];
