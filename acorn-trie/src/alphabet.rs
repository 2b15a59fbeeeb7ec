//! Ranking of the 62-symbol alphanumeric alphabet.
//!
//! Digits rank first (`'0'..='9'` at 0..10), then uppercase letters
//! (`'A'..='Z'` at 10..36), then lowercase (`'a'..='z'` at 36..62). For this
//! alphabet the rank order coincides with ASCII order, so word listings come
//! out in plain string order.

use crate::error::AlphabetError;

pub const ALPHABET_LEN: usize = 62;

/// Dense rank of an alphabet character, in `0..62`.
pub fn rank(c: char) -> Result<usize, AlphabetError> {
    let shifted = match c {
        '0'..='9' => c as u8 - b'0',
        'A'..='Z' => c as u8 - b'A' + 10,
        'a'..='z' => c as u8 - b'a' + 36,
        _ => return Err(AlphabetError::UnsupportedChar(c)),
    };
    Ok(usize::from(shifted))
}

/// Inverse of [`rank`]; `None` for ranks outside `0..62`.
pub fn symbol(rank: usize) -> Option<char> {
    let byte = match rank {
        0..=9 => b'0' + rank as u8,
        10..=35 => b'A' + (rank as u8 - 10),
        36..=61 => b'a' + (rank as u8 - 36),
        _ => return None,
    };
    Some(char::from(byte))
}

/// Ranks every character of `text`, rejecting the whole string on the first
/// character outside the alphabet.
pub fn ranks(text: &str) -> Result<Vec<usize>, AlphabetError> {
    text.chars().map(rank).collect()
}
