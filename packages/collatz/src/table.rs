//! Dense memoization: sequence lengths stored in a table indexed by value.

use crate::step::next;
use crate::SequenceLength;

/// Known sequence lengths for the values `0..len`.
///
/// A stored 0 means "not computed yet"; no real sequence has zero terms, so
/// the sentinel never collides with a length. Entry 1 is seeded to 1 and an
/// entry never changes once set.
#[derive(Debug, Clone)]
pub struct MemoTable {
    terms: Vec<u32>,
}

impl MemoTable {
    /// Create a table covering the values `0..len`. Panics if `len < 2`.
    pub fn new(len: usize) -> Self {
        assert!(len >= 2, "memo table must cover the value 1");
        let mut terms = vec![0; len];
        terms[1] = 1;
        MemoTable { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The stored length for `n`, if `n` is in range and already resolved.
    pub fn get(&self, n: u64) -> Option<u32> {
        let index = usize::try_from(n).ok()?;
        match self.terms.get(index) {
            Some(&0) | None => None,
            Some(&terms) => Some(terms),
        }
    }

    /// Number of values whose length is known.
    pub fn resolved(&self) -> usize {
        self.terms.iter().filter(|&&t| t != 0).count()
    }
}

/// Compute the length of the sequence starting at `n`, storing it in `table`.
///
/// Steps forward only while the running value stays at or above `n`. Once it
/// drops below, the rest of the chain is read from the table, which requires
/// every value in `1..n` to be resolved already. An ascending scan from 2
/// guarantees that. Intermediate values may exceed the table; only the final
/// value, which is below `n`, is looked up.
///
/// # Panics
///
/// Panics if `n` is 0 or not below `table.len()`, or if the chain drops to a
/// value whose length is not in the table yet (starts fed out of order).
///
/// # Example
///
/// ```
/// use collatz::{sequence_length_memo, MemoTable};
///
/// let mut table = MemoTable::new(10);
/// for n in 2..10 {
///     sequence_length_memo(n, &mut table);
/// }
/// assert_eq!(table.get(6), Some(9));
/// assert_eq!(sequence_length_memo(9, &mut table), 20);
/// ```
pub fn sequence_length_memo(n: u64, table: &mut MemoTable) -> u32 {
    assert!(n != 0, "0 has no Collatz sequence");
    let start = usize::try_from(n).expect("start value does not fit in usize");
    assert!(
        start < table.terms.len(),
        "start value {} is outside the memo table (len {})",
        n,
        table.terms.len()
    );

    // Covers n == 1 as well: stepping from 1 would cycle through 4, 2, 1
    // without ever dropping below the start.
    if table.terms[start] != 0 {
        return table.terms[start];
    }

    let mut current = n;
    let mut steps = 0;
    while current >= n {
        current = next(current);
        steps += 1;
    }

    // current < n < table.len(), so the index is in range
    let below = table.terms[current as usize];
    assert!(below != 0, "{} was not resolved before {}", current, n);
    table.terms[start] = below + steps;
    table.terms[start]
}

/// Strategy backed by a [`MemoTable`]. Starting values must be fed in
/// ascending order from 2; an out-of-order start panics rather than storing
/// a wrong length.
#[derive(Debug, Clone)]
pub struct TableMemo {
    table: MemoTable,
}

impl TableMemo {
    pub fn new(len: usize) -> Self {
        TableMemo {
            table: MemoTable::new(len),
        }
    }

    pub fn table(&self) -> &MemoTable {
        &self.table
    }
}

impl SequenceLength for TableMemo {
    fn sequence_length(&mut self, n: u64) -> u32 {
        sequence_length_memo(n, &mut self.table);
        // read back what the table holds for n rather than trusting a local count
        self.table.get(n).unwrap_or_default()
    }
}
