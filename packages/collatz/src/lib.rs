pub mod direct;
pub mod error;
pub mod map;
pub mod scan;
pub mod step;
pub mod table;

pub use direct::{sequence_length, Direct};
pub use error::Error;
pub use map::{sequence_length_map, MapMemo, MemoMap};
pub use scan::{scan, Best, Limit, Report, Strategy};
pub use step::{chain, next, peak, Chain};
pub use table::{sequence_length_memo, MemoTable, TableMemo};

/// A way of computing Collatz sequence lengths.
///
/// Implementors may keep state between calls (a memo table, a map), which is
/// why the receiver is `&mut self`. Whenever an implementation returns, it
/// agrees with every other on the length for `n >= 1`. Implementations with
/// ordering preconditions, such as [`TableMemo`], panic when those are broken
/// instead of returning a different length.
pub trait SequenceLength {
    /// Number of terms in the sequence starting at `n`, counting both `n`
    /// and the terminal 1.
    fn sequence_length(&mut self, n: u64) -> u32;
}
