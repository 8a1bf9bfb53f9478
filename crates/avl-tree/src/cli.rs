//! Core logic behind the `avl-timing` binary.
//!
//! The binary only wires stdin/argv and process exit codes; parsing the
//! element count and rendering the post-run report live here so they can be
//! tested without spawning a process.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::tree::AvlTree;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Element count must be an integer, got {0:?}")]
    InvalidCount(String),
    #[error("Incorrect input (n was <= 1), terminating program")]
    TooFew(i64),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Parses the element count for a timing run. Counts below 2 are rejected.
pub fn parse_count(raw: &str) -> Result<usize, CliError> {
    let raw = raw.trim();
    let n: i64 = raw
        .parse()
        .map_err(|_| CliError::InvalidCount(raw.to_string()))?;
    if n <= 1 {
        return Err(CliError::TooFew(n));
    }
    usize::try_from(n).map_err(|_| CliError::InvalidCount(raw.to_string()))
}

/// Outcome of a bulk insertion run, printed to stdout by the binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimingReport {
    pub count: usize,
    pub elapsed: Duration,
    pub height: Option<usize>,
    pub in_order: bool,
    pub balanced: bool,
}

impl TimingReport {
    pub fn new<T: Ord>(count: usize, elapsed: Duration, tree: &AvlTree<T>) -> Self {
        let mut prev: Option<&T> = None;
        let in_order = tree.iter().all(|v| {
            let ok = prev.map_or(true, |p| p <= v);
            prev = Some(v);
            ok
        });
        Self {
            count,
            elapsed,
            height: tree.height().ok(),
            in_order,
            balanced: tree.is_balanced(),
        }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Inserted {} elements in {} ms",
            self.count,
            self.elapsed.as_millis()
        )?;
        match self.height {
            Some(h) => writeln!(f, "The height of the tree is {h}")?,
            None => writeln!(f, "The tree is empty")?,
        }
        if self.in_order {
            writeln!(f, "The tree is in order!")?;
        } else {
            writeln!(f, "The tree is ***NOT*** in order!")?;
        }
        if self.balanced {
            write!(f, "The tree is balanced!")
        } else {
            write!(f, "The tree is ***NOT*** balanced!")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_below_two_are_rejected() {
        for raw in ["0", "1", "-5", " 1\n"] {
            let err = parse_count(raw).unwrap_err();
            assert!(matches!(err, CliError::TooFew(_)), "{raw:?}: {err:?}");
            assert_eq!(
                err.to_string(),
                "Incorrect input (n was <= 1), terminating program"
            );
        }
    }

    #[test]
    fn smallest_accepted_count_is_two() {
        assert_eq!(parse_count("2").unwrap(), 2);
        assert_eq!(parse_count(" 10000\n").unwrap(), 10000);
    }

    #[test]
    fn garbage_count_is_invalid() {
        assert!(matches!(
            parse_count("ten"),
            Err(CliError::InvalidCount(s)) if s == "ten"
        ));
    }

    #[test]
    fn report_lists_height_order_and_balance() {
        let tree: AvlTree<i64> = [8, 9, 10, 2, 1, 5, 3, 6, 4, 7, 11].into_iter().collect();
        let report = TimingReport::new(11, Duration::from_millis(3), &tree);
        assert_eq!(report.height, Some(4));
        assert_eq!(
            report.to_string(),
            "Inserted 11 elements in 3 ms\n\
             The height of the tree is 4\n\
             The tree is in order!\n\
             The tree is balanced!"
        );
    }

    #[test]
    fn report_flags_failed_checks() {
        let report = TimingReport {
            count: 2,
            elapsed: Duration::ZERO,
            height: None,
            in_order: false,
            balanced: false,
        };
        let text = report.to_string();
        assert!(text.contains("The tree is ***NOT*** in order!"));
        assert!(text.ends_with("The tree is ***NOT*** balanced!"));
    }
}
