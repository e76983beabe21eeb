//! Boundary lengths: empty, single element, two elements, and sequences
//! well past the 256-element scratch size older implementations assumed.

use crate::scan::{first_mismatch, is_mirrored};

#[test]
fn empty_sequence_is_mirrored() {
    let empty: [char; 0] = [];
    assert!(is_mirrored(&empty));
    assert_eq!(first_mismatch(&empty), None);
}

#[test]
fn single_element_is_mirrored() {
    assert!(is_mirrored(&['a']));
    assert!(is_mirrored(&['7']));
}

#[test]
fn two_elements() {
    assert!(is_mirrored(&['z', 'z']));
    assert_eq!(first_mismatch(&['z', 'y']), Some((0, 1)));
}

#[test]
fn long_palindrome_beyond_fixed_buffer() {
    let half: Vec<char> = (0..1000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
    let mut seq = half.clone();
    seq.push('m');
    seq.extend(half.iter().rev());

    assert_eq!(seq.len(), 2001);
    assert!(is_mirrored(&seq));
}

#[test]
fn long_sequence_mismatch_near_middle() {
    let mut seq = vec!['q'; 4096];
    seq[2047] = 'r';

    assert_eq!(first_mismatch(&seq), Some((2047, 2048)));
}
