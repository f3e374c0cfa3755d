//! Save-file naming.
//!
//! A saved collection is named after the moment it was saved: the
//! millisecond timestamp is written in base 4 and every digit is swapped for
//! a letter of `colr` (0→c, 1→o, 2→l, 3→r). The same timestamp always yields
//! the same name.

#[cfg(test)]
#[path = "filename_test.rs"]
mod filename_test;

use crate::consts::FILENAME_KEY;

/// Write `value` in base 4, most significant digit first.
#[must_use]
pub fn base4_digits(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while value > 0 {
        // The remainder is always below 4.
        digits.push(u8::try_from(value % 4).unwrap_or_default());
        value /= 4;
    }
    digits.reverse();
    digits
}

/// Substitute each base-4 digit with its letter from the key.
#[must_use]
pub fn encode_timestamp(timestamp_ms: u64) -> String {
    base4_digits(timestamp_ms)
        .into_iter()
        .map(|d| char::from(FILENAME_KEY[usize::from(d)]))
        .collect()
}

/// File name for a collection saved at `timestamp_ms`.
#[must_use]
pub fn save_filename(timestamp_ms: u64) -> String {
    format!("{}.json", encode_timestamp(timestamp_ms))
}
