//! Sparse memoization: sequence lengths keyed by value in a `HashMap`.

use std::collections::HashMap;

use crate::step::next;
use crate::SequenceLength;

/// Known sequence lengths keyed by starting value, seeded with 1 → 1.
///
/// Unlike [`MemoTable`](crate::MemoTable) there is no upper bound on the
/// values it can hold. Entries are never changed once inserted.
#[derive(Debug, Clone)]
pub struct MemoMap {
    terms: HashMap<u64, u32>,
}

impl MemoMap {
    pub fn new() -> Self {
        MemoMap {
            terms: HashMap::from([(1, 1)]),
        }
    }

    pub fn get(&self, n: u64) -> Option<u32> {
        self.terms.get(&n).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for MemoMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the length of the sequence starting at `n`, recording it in `map`.
///
/// Steps forward until the running value is a known key, then adds the number
/// of steps taken to that key's length. Values can be asked for in any order.
///
/// # Example
///
/// ```
/// use collatz::{sequence_length_map, MemoMap};
///
/// let mut map = MemoMap::new();
/// assert_eq!(sequence_length_map(27, &mut map), 112);
/// assert_eq!(sequence_length_map(6, &mut map), 9);
/// assert_eq!(map.get(27), Some(112));
/// ```
pub fn sequence_length_map(n: u64, map: &mut MemoMap) -> u32 {
    assert!(n != 0, "0 has no Collatz sequence");
    let mut current = n;
    let mut steps = 0;
    let known = loop {
        if let Some(&terms) = map.terms.get(&current) {
            break terms;
        }
        current = next(current);
        steps += 1;
    };

    let terms = known + steps;
    map.terms.insert(n, terms);
    terms
}

/// Strategy backed by a [`MemoMap`].
#[derive(Debug, Clone, Default)]
pub struct MapMemo {
    map: MemoMap,
}

impl MapMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(&self) -> &MemoMap {
        &self.map
    }
}

impl SequenceLength for MapMemo {
    fn sequence_length(&mut self, n: u64) -> u32 {
        sequence_length_map(n, &mut self.map)
    }
}
