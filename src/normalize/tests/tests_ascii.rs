//! ASCII classification: non-ASCII characters are discarded outright.

use crate::normalize::{Charset, normalize};

fn ascii(text: &str) -> String {
    normalize(text, Charset::Ascii).into_iter().collect()
}

#[test]
fn drops_accented_letters() {
    assert_eq!(ascii("rüffelte"), "rffelte");
    assert_eq!(ascii("Ärger"), "rger");
}

#[test]
fn drops_non_latin_scripts() {
    assert_eq!(ascii("abc αβγ 123"), "abc123");
    assert!(ascii("日本語").is_empty());
}

#[test]
fn folds_upper_case() {
    assert_eq!(ascii("ABCxyz"), "abcxyz");
}

#[test]
fn decomposed_marks_leave_base_letter() {
    // u + COMBINING DIAERESIS: only the base letter is ASCII.
    assert_eq!(ascii("u\u{308}"), "u");
}
