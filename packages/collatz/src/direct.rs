use crate::step::next;
use crate::SequenceLength;

/// Count the terms of the Collatz sequence starting at `n` by walking the
/// whole chain down to 1. Nothing is reused between calls.
///
/// # Panics
///
/// Panics if `n` is 0, which has no sequence.
///
/// # Example
///
/// ```
/// use collatz::sequence_length;
///
/// assert_eq!(sequence_length(1), 1);
/// assert_eq!(sequence_length(6), 9); // 6, 3, 10, 5, 16, 8, 4, 2, 1
/// ```
pub fn sequence_length(mut n: u64) -> u32 {
    assert!(n != 0, "0 has no Collatz sequence");
    let mut terms = 1;
    while n != 1 {
        n = next(n);
        terms += 1;
    }
    terms
}

/// Strategy that recomputes every chain from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct Direct;

impl SequenceLength for Direct {
    fn sequence_length(&mut self, n: u64) -> u32 {
        sequence_length(n)
    }
}
