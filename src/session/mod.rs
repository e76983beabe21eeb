//! Interactive line loop and one-shot argument checking.
//!
//! [`Session`] reads one line at a time, prints whether it is a palindrome,
//! and stops on the first empty line or at end of input. Generic over its
//! reader and writer so the same loop drives a terminal, a pipe, or an
//! in-memory buffer in tests. [`check_texts`] prints the same verdicts for
//! a fixed list of texts.

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::Checker;

/// Prompt written before every line when prompting is enabled.
pub const PROMPT: &str = "Enter string (<Enter> to exit): ";

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines that received a verdict.
    pub checked: usize,
    /// Lines found to be palindromes.
    pub palindromes: usize,
    /// Lines the checker rejected.
    pub rejected: usize,
}

impl SessionStats {
    /// Returns `true` if every text received a verdict and every verdict
    /// was "palindrome".
    pub fn all_palindromes(&self) -> bool {
        self.rejected == 0 && self.palindromes == self.checked
    }

    fn record(
        &mut self,
        checker: &Checker,
        text: &str,
        output: &mut impl Write,
    ) -> io::Result<()> {
        match checker.check(text) {
            Ok(palindrome) => {
                self.checked += 1;
                if palindrome {
                    self.palindromes += 1;
                }
                writeln!(output, "{}", format_verdict(text, palindrome))
            }
            Err(e) => {
                self.rejected += 1;
                warn!("input rejected: {e}");
                writeln!(output, "input rejected: {e}")
            }
        }
    }
}

/// Formats the verdict line printed for `text`.
pub fn format_verdict(text: &str, palindrome: bool) -> String {
    if palindrome {
        format!("'{text}' is a palindrome!")
    } else {
        format!("'{text}' is not a palindrome!")
    }
}

/// An interactive checking session over a reader/writer pair.
pub struct Session<'a, R, W> {
    checker: &'a Checker,
    input: R,
    output: W,
    prompt: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Creates a session that prompts before every line.
    pub fn new(checker: &'a Checker, input: R, output: W) -> Self {
        Self {
            checker,
            input,
            output,
            prompt: true,
        }
    }

    /// Enables or disables the prompt.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Runs the loop until an empty line or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily. A line the
    /// checker rejects is reported and the loop continues.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the reader or writer.
    pub fn run(mut self) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();

        debug!(prompt = self.prompt, "session started");

        loop {
            if self.prompt {
                self.output.write_all(PROMPT.as_bytes())?;
                self.output.flush()?;
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if line.is_empty() {
                break;
            }

            stats.record(self.checker, line, &mut self.output)?;
        }

        self.output.flush()?;
        debug!(
            checked = stats.checked,
            palindromes = stats.palindromes,
            rejected = stats.rejected,
            "session finished"
        );
        Ok(stats)
    }
}

/// Checks each of `texts` and writes one line per text to `output`.
///
/// A text the checker rejects is reported as `input rejected: ...` and the
/// remaining texts are still checked. Use [`SessionStats::all_palindromes`]
/// to derive an exit status.
///
/// # Errors
///
/// Propagates any I/O error from `output`.
pub fn check_texts<I, S, W>(
    checker: &Checker,
    texts: I,
    mut output: W,
) -> io::Result<SessionStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut stats = SessionStats::default();
    for text in texts {
        stats.record(checker, text.as_ref(), &mut output)?;
    }
    output.flush()?;
    debug!(
        checked = stats.checked,
        palindromes = stats.palindromes,
        rejected = stats.rejected,
        "texts checked"
    );
    Ok(stats)
}
