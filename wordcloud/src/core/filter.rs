// src/core/filter.rs
use anyhow::{Result, bail};

use crate::core::cloud::WordCloud;
use crate::models::ReportLine;

/// Optional constraints applied to aggregated counts. Every active
/// constraint must hold for a word to be reported; absent constraints are
/// universally true. Filtering affects membership only, never counts.
#[derive(Debug, Default)]
pub struct ReportFilter {
    mincounts: Option<u64>,
    maxcounts: Option<u64>,
    startswith: Option<String>,
}

impl ReportFilter {
    /// # Errors
    ///
    /// Returns an error if both bounds are given and `maxcounts` is less
    /// than `mincounts`.
    pub fn new(
        mincounts: Option<u64>,
        maxcounts: Option<u64>,
        startswith: Option<String>,
    ) -> Result<Self> {
        if let (Some(min), Some(max)) = (mincounts, maxcounts) {
            if max < min {
                bail!("--maxcounts ({max}) cannot be less than --mincounts ({min})");
            }
        }

        Ok(Self {
            mincounts,
            maxcounts,
            startswith,
        })
    }

    /// Whether a word with the given count survives every active constraint.
    #[must_use]
    pub fn retains(&self, word: &str, count: u64) -> bool {
        if let Some(min) = self.mincounts {
            if count < min {
                return false;
            }
        }
        if let Some(max) = self.maxcounts {
            if count > max {
                return false;
            }
        }
        if let Some(prefix) = &self.startswith {
            if !word.starts_with(prefix.as_str()) {
                return false;
            }
        }
        true
    }

    /// Applies the filter to a cloud, preserving its alphabetical order.
    #[must_use]
    pub fn apply(&self, cloud: &WordCloud) -> Vec<ReportLine> {
        cloud
            .iter()
            .filter(|(word, count)| self.retains(word, **count))
            .map(|(word, count)| ReportLine {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}
