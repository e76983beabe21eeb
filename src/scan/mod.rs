//! Mirror scan over a normalized sequence.
//!
//! Compares position `i` with position `len - 1 - i` for every `i` in
//! `0..len / 2`. Both indices always lie inside `0..len`, so the scan
//! never touches memory outside the sequence; the middle element of an
//! odd-length sequence has no partner and is skipped.

#[cfg(test)]
mod tests;

/// Returns the outermost mirrored index pair whose elements differ, or
/// `None` if the sequence equals its own reversal.
pub(crate) fn first_mismatch<T: PartialEq>(seq: &[T]) -> Option<(usize, usize)> {
    let len = seq.len();
    (0..len / 2)
        .map(|left| (left, len - 1 - left))
        .find(|&(left, right)| seq[left] != seq[right])
}

/// Returns `true` if `seq` reads the same forwards and backwards.
pub(crate) fn is_mirrored<T: PartialEq>(seq: &[T]) -> bool {
    first_mismatch(seq).is_none()
}
