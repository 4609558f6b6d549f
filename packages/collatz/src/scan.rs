//! Scanning a range of starting values for the longest chain.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::direct::Direct;
use crate::map::MapMemo;
use crate::table::TableMemo;
use crate::{Error, SequenceLength};

/// Longest chain seen so far: its starting value and number of terms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Best {
    pub start: u64,
    pub terms: u32,
}

impl Best {
    /// Record `(start, terms)` if it is strictly longer than the current best.
    /// Ties keep the earlier start. Returns whether the record changed.
    pub fn offer(&mut self, start: u64, terms: u32) -> bool {
        if terms > self.terms {
            *self = Best { start, terms };
            true
        } else {
            false
        }
    }
}

/// Find the starting value in `2..limit` with the longest Collatz sequence.
///
/// Starting values are visited in ascending order, which a [`TableMemo`]
/// relies on. A table-backed strategy must cover at least `0..limit`.
///
/// # Example
///
/// ```
/// use collatz::{scan, Best, Direct};
///
/// assert_eq!(scan(10, &mut Direct), Best { start: 9, terms: 20 });
/// assert_eq!(scan(2, &mut Direct), Best::default());
/// ```
pub fn scan<S: SequenceLength + ?Sized>(limit: u64, strategy: &mut S) -> Best {
    let mut best = Best::default();
    for n in 2..limit {
        let terms = strategy.sequence_length(n);
        if best.offer(n, terms) {
            tracing::debug!(start = n, terms, "new longest chain");
        }
    }
    best
}

/// Validated exclusive upper bound for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Limit(u64);

impl Limit {
    pub const MIN: u64 = 2;
    /// Keeps the dense table addressable and every 3n + 1 far inside `u64`.
    pub const MAX: u64 = 1_000_000_000;

    pub fn new(limit: u64) -> Result<Self, Error> {
        if limit < Self::MIN {
            return Err(Error::LimitTooSmall {
                min: Self::MIN,
                got: limit,
            });
        }
        if limit > Self::MAX {
            return Err(Error::LimitTooLarge {
                max: Self::MAX,
                got: limit,
            });
        }
        Ok(Limit(limit))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The limit as a table length. `MAX` fits in a 32-bit `usize`.
    fn as_len(self) -> usize {
        self.0 as usize
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit(1_000_000)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Limit {
    type Err = Error;

    /// Accepts digit separators, so `1_000_000` parses like `1000000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.trim().chars().filter(|&c| c != '_').collect();
        let limit = digits
            .parse::<u64>()
            .map_err(|_| Error::InvalidLimit(s.to_string()))?;
        Limit::new(limit)
    }
}

/// Which way sequence lengths are computed during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Walk every chain to 1.
    Direct,
    /// Dense table memoization.
    #[default]
    Array,
    /// Hash map memoization.
    Map,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Direct, Strategy::Array, Strategy::Map];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Array => "array",
            Strategy::Map => "map",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Direct => "brute force",
            Strategy::Array => "array memoization",
            Strategy::Map => "hash map memoization",
        }
    }

    /// Scan `2..limit` with fresh state for this strategy and time it.
    /// The elapsed time includes allocating the memo table.
    pub fn run(self, limit: Limit) -> Report {
        let _span =
            tracing::info_span!("scan", strategy = self.name(), limit = limit.get()).entered();
        let started = Instant::now();
        let best = match self {
            Strategy::Direct => scan(limit.get(), &mut Direct),
            Strategy::Array => scan(limit.get(), &mut TableMemo::new(limit.as_len())),
            Strategy::Map => scan(limit.get(), &mut MapMemo::new()),
        };
        let elapsed = started.elapsed();
        tracing::info!(
            start = best.start,
            terms = best.terms,
            elapsed_ms = elapsed.as_millis() as u64,
            "scan finished"
        );
        Report {
            strategy: self,
            best,
            elapsed,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

/// Outcome of one timed scan.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub strategy: Strategy,
    pub best: Best,
    pub elapsed: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Using {}: The number {} produces the longest chain with {} terms and it took {}ms",
            self.strategy.label(),
            self.best.start,
            self.best.terms,
            self.elapsed.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_starts_empty() {
        assert_eq!(Best::default(), Best { start: 0, terms: 0 });
    }

    #[test]
    fn test_best_only_strict_improvement() {
        let mut best = Best::default();
        assert!(best.offer(3, 8));
        assert!(!best.offer(6, 8));
        assert!(!best.offer(4, 3));
        assert_eq!(best, Best { start: 3, terms: 8 });
        assert!(best.offer(7, 17));
        assert_eq!(best, Best { start: 7, terms: 17 });
    }

    #[test]
    fn test_scan_empty_range() {
        assert_eq!(scan(2, &mut Direct), Best::default());
        assert_eq!(scan(0, &mut MapMemo::new()), Best::default());
    }

    #[test]
    fn test_scan_small_bounds() {
        assert_eq!(scan(3, &mut Direct), Best { start: 2, terms: 2 });
        assert_eq!(scan(10, &mut Direct), Best { start: 9, terms: 20 });
        // 27 itself is excluded by an exclusive bound of 27
        assert_eq!(scan(28, &mut Direct), Best { start: 27, terms: 112 });
    }

    /// Returns fixed lengths per start, 1 for anything not listed.
    struct Scripted(Vec<(u64, u32)>);

    impl SequenceLength for Scripted {
        fn sequence_length(&mut self, n: u64) -> u32 {
            self.0
                .iter()
                .find(|&&(start, _)| start == n)
                .map_or(1, |&(_, terms)| terms)
        }
    }

    #[test]
    fn test_scan_tie_keeps_earlier_start() {
        let mut lengths = Scripted(vec![(3, 7), (5, 40), (8, 40), (9, 12)]);
        assert_eq!(scan(10, &mut lengths), Best { start: 5, terms: 40 });
    }

    #[test]
    fn test_scan_ignores_later_shorter_chains() {
        // the record must survive a drop after the maximum and a dip before it
        let mut lengths = Scripted(vec![(2, 10), (3, 4), (4, 30), (6, 29), (7, 2)]);
        assert_eq!(scan(8, &mut lengths), Best { start: 4, terms: 30 });
        // the bound is exclusive: 8 never reaches the strategy
        let mut lengths = Scripted(vec![(2, 3), (8, 100)]);
        assert_eq!(scan(8, &mut lengths), Best { start: 2, terms: 3 });
    }

    #[test]
    fn test_strategies_agree() {
        for limit in [2, 3, 10, 100, 1_000, 10_000, 100_000] {
            let limit = Limit::new(limit).unwrap();
            let results: Vec<Best> = Strategy::ALL.iter().map(|s| s.run(limit).best).collect();
            assert_eq!(results[0], results[1], "direct vs array below {}", limit);
            assert_eq!(results[0], results[2], "direct vs map below {}", limit);
        }
    }

    #[test]
    fn test_solve() {
        let limit = Limit::default();
        for strategy in Strategy::ALL {
            let report = strategy.run(limit);
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.best, Best { start: 837_799, terms: 525 }, "{}", strategy);
        }
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(Limit::new(1), Err(Error::LimitTooSmall { min: 2, got: 1 }));
        assert_eq!(Limit::new(2).map(Limit::get), Ok(2));
        assert_eq!(Limit::new(Limit::MAX).map(Limit::get), Ok(Limit::MAX));
        assert!(matches!(Limit::new(Limit::MAX + 1), Err(Error::LimitTooLarge { .. })));
        assert_eq!(Limit::default().get(), 1_000_000);
    }

    #[test]
    fn test_limit_from_str() {
        assert_eq!("1_000_000".parse::<Limit>(), Ok(Limit::default()));
        assert_eq!(" 42 ".parse::<Limit>().map(Limit::get), Ok(42));
        assert_eq!("abc".parse::<Limit>(), Err(Error::InvalidLimit("abc".to_string())));
        assert_eq!("-5".parse::<Limit>(), Err(Error::InvalidLimit("-5".to_string())));
        assert!(matches!("0".parse::<Limit>(), Err(Error::LimitTooSmall { .. })));
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("direct".parse::<Strategy>(), Ok(Strategy::Direct));
        assert_eq!("Array".parse::<Strategy>(), Ok(Strategy::Array));
        assert_eq!("map".parse::<Strategy>(), Ok(Strategy::Map));
        assert_eq!(
            "tree".parse::<Strategy>(),
            Err(Error::UnknownStrategy("tree".to_string()))
        );
        assert_eq!(Strategy::default(), Strategy::Array);
    }

    #[test]
    fn test_report_line() {
        let report = Report {
            strategy: Strategy::Map,
            best: Best { start: 9, terms: 20 },
            elapsed: Duration::from_micros(12_345),
        };
        assert_eq!(
            report.to_string(),
            "Using hash map memoization: The number 9 produces the longest chain with 20 terms and it took 12ms"
        );
    }
}
