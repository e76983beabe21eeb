//! Input normalization.
//!
//! Turns an arbitrary text into the sequence the mirror scan operates on:
//! only alphanumeric characters, case-folded, in their original order.
//!
//! # Character classification
//!
//! | [`Charset`] | Kept characters               | Case folding                 |
//! |-------------|-------------------------------|------------------------------|
//! | `Ascii`     | `[0-9A-Za-z]`                 | ASCII lowercase              |
//! | `Unicode`   | `char::is_alphanumeric` (NFC) | full Unicode default folding |
//!
//! In `Unicode` mode the input is composed to NFC first, so `"u\u{308}"`
//! and `"\u{fc}"` normalize to the same character. Folding may change the
//! length: `ß` and `SS` both fold to `ss`, and final `ς` folds to `σ` like
//! `Σ` does. Filtering runs *after* folding: a mapping such as
//! `İ → i\u{307}` yields a combining mark, which is then dropped like any
//! other non-alphanumeric character.
//!
//! A few ligatures fold to several distinct letters (`ﬁ → fi`) and are
//! compared letter by letter.
//!
//! `Ascii` mode only folds ASCII case. Non-ASCII input is dropped before
//! folding, so `İ` vanishes while its lowercase spelling `i\u{307}` leaves
//! an `i`.

#[cfg(test)]
mod tests;

use unicode_normalization::UnicodeNormalization;

/// Character classification used when normalizing input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Only ASCII letters and digits count. Everything else, including
    /// accented letters, is discarded.
    Ascii,

    /// Unicode letters and numbers count, compared after NFC composition
    /// and full case folding.
    #[default]
    Unicode,
}

/// Returns the normalized sequence for `text` under `charset`.
pub(crate) fn normalize(text: &str, charset: Charset) -> Vec<char> {
    match charset {
        Charset::Ascii => text
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect(),
        Charset::Unicode => {
            let composed: String = text.nfc().collect();
            caseless::default_case_fold_str(&composed)
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect()
        }
    }
}
