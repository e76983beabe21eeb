
use crate::Checker;
use crate::session::{Session, SessionStats};
use std::io::Cursor;

/// Runs a prompt-less session over `input` and returns its output and stats.
pub(super) fn run_quiet(checker: &Checker, input: &[u8]) -> (String, SessionStats) {
    let mut out = Vec::new();
    let stats = Session::new(checker, Cursor::new(input), &mut out)
        .with_prompt(false)
        .run()
        .unwrap();
    (String::from_utf8(out).unwrap(), stats)
}
