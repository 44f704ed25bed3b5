//! Word splitting and validation.
//!
//! Words are separated by the ASCII space character only. Any other character,
//! including non-ASCII bytes, belongs to a word. Text containing a control
//! character (a byte below `0x20`) is invalid for both documents and queries,
//! so tabs and newlines never reach the splitter.

/// Splits text into space-delimited words, skipping empty runs.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// Returns true when the text has no control characters.
pub fn is_valid_text(text: &str) -> bool {
    !text.bytes().any(|b| b < b' ')
}
