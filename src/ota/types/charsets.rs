//! Word-constituent character sets.
//!
//! A character belongs to a word when it is alphanumeric, a Unicode dash
//! punctuation character (general category `Pd`), or listed in the set's
//! extra punctuation. Everything else ends the current word and is dropped.

/// Punctuation allowed inside words read from dictionary files.
///
/// `,` and `;` are deliberately absent: they separate meanings.
pub const FILE_WORD_PUNCTUATION: &[char] = &['\'', ' ', '.'];

/// Punctuation allowed inside words read from interactive input and
/// example-sentence files.
pub const CONSOLE_WORD_PUNCTUATION: &[char] =
    &['\'', ' ', '\t', '.', ',', '_', '/', '+', '~'];

/// Unicode general category `Pd` (Dash_Punctuation).
const DASH_PUNCTUATION: &[char] = &[
    '\u{002D}', '\u{058A}', '\u{05BE}', '\u{1400}', '\u{1806}',
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}',
    '\u{2E17}', '\u{2E1A}', '\u{2E3A}', '\u{2E3B}', '\u{2E40}', '\u{2E5D}',
    '\u{301C}', '\u{3030}', '\u{30A0}',
    '\u{FE31}', '\u{FE32}', '\u{FE58}', '\u{FE63}', '\u{FF0D}',
    '\u{10EAD}',
];

/// Returns true for characters in Unicode general category `Pd`.
pub fn is_dash_punctuation(c: char) -> bool {
    DASH_PUNCTUATION.contains(&c)
}

/// A trait that defines which characters may form a word.
pub trait WordChars {
    /// A short name used for debugging and logging.
    const DEBUG_NAME: &'static str;

    /// Punctuation accepted inside words in addition to letters, digits
    /// and dashes.
    const EXTRA: &'static [char];

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || is_dash_punctuation(c) || Self::EXTRA.contains(&c)
    }
}

/// Zero-cost marker for the dictionary file character set.
#[derive(Debug)]
pub struct FileText;

impl WordChars for FileText {
    const DEBUG_NAME: &'static str = "file";
    const EXTRA: &'static [char] = FILE_WORD_PUNCTUATION;
}

/// Zero-cost marker for the interactive input character set.
#[derive(Debug)]
pub struct ConsoleText;

impl WordChars for ConsoleText {
    const DEBUG_NAME: &'static str = "console";
    const EXTRA: &'static [char] = CONSOLE_WORD_PUNCTUATION;
}
