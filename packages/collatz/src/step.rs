//! The Collatz stepping rule and an iterator over a whole chain.

/// Apply one Collatz step: `n / 2` for even `n`, `3n + 1` for odd `n`.
///
/// The caller is responsible for keeping `3n + 1` inside `u64`; for starting
/// values below 10^9 no chain comes anywhere near that.
///
/// # Example
///
/// ```
/// use collatz::next;
///
/// assert_eq!(next(6), 3);
/// assert_eq!(next(3), 10);
/// assert_eq!(next(1), 4);
/// ```
#[inline]
pub fn next(n: u64) -> u64 {
    if n % 2 == 0 {
        n / 2
    } else {
        3 * n + 1
    }
}

/// Iterator over the terms of a Collatz sequence, from the starting value
/// down to and including the terminal 1.
pub struct Chain {
    current: Option<u64>,
}

impl Chain {
    pub fn new(start: u64) -> Self {
        Chain {
            current: (start != 0).then_some(start),
        }
    }
}

impl Iterator for Chain {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.current?;
        self.current = (n != 1).then(|| crate::step::next(n));
        Some(n)
    }
}

/// Returns the chain starting at `start`. Zero has no chain.
///
/// # Example
///
/// ```
/// use collatz::chain;
///
/// let terms: Vec<u64> = chain(6).collect();
/// assert_eq!(terms, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// assert_eq!(chain(0).count(), 0);
/// ```
pub fn chain(start: u64) -> Chain {
    Chain::new(start)
}

/// Largest term reached by the chain starting at `start`.
///
/// Returns None for 0.
pub fn peak(start: u64) -> Option<u64> {
    chain(start).max()
}
