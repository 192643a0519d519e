//! Aggregated outcome of a batch of copy operations.

use std::fmt;

use crate::error::{Error, Result};

/// Counts what was written and keeps every per-entry failure.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Directories created and files written.
    pub copied: usize,
    /// Per-entry failures, in no particular order.
    pub failures: Vec<Error>,
}

impl CopyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Result<()>) {
        match outcome {
            Ok(()) => self.copied += 1,
            Err(err) => self.failures.push(err),
        }
    }

    /// Folds `other` into this report.
    pub fn merge(&mut self, other: CopyReport) {
        self.copied += other.copied;
        self.failures.extend(other.failures);
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Turns a report with failures into `Error::IncompleteOutputError`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::IncompleteOutputError { failed: self.failed() })
        }
    }
}

impl FromIterator<Result<()>> for CopyReport {
    fn from_iter<I: IntoIterator<Item = Result<()>>>(outcomes: I) -> Self {
        let mut report = CopyReport::new();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "copied={} failed={}", self.copied, self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn failures_are_kept_alongside_successes() {
        let report: CopyReport = vec![
            Ok(()),
            Err(Error::IoError(io::Error::new(io::ErrorKind::Other, "disk full"))),
            Ok(()),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.copied, 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.to_string(), "copied=2 failed=1");
        assert!(matches!(report.into_result(), Err(Error::IncompleteOutputError { failed: 1 })));
    }

    #[test]
    fn merge_adds_up() {
        let mut total = CopyReport::new();
        total.record(Ok(()));
        let mut other = CopyReport::new();
        other.record(Ok(()));
        other.record(Err(Error::TemplateError("gone".to_string())));
        total.merge(other);

        assert_eq!(total.copied, 2);
        assert_eq!(total.failed(), 1);
    }
}
