use crate::ScanError;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// How keys tied at the maximum count are collected from a `FrequencyTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePolicy {
    /// Every key whose count equals the maximum, in insertion order.
    #[default]
    All,
    /// Max-count keys in insertion order, stopping at the first key with a lower count.
    /// Later tied keys after that point are not reported.
    FirstRun,
}

impl FromStr for TiePolicy {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TiePolicy::All),
            "first-run" | "first_run" => Ok(TiePolicy::FirstRun),
            other => Err(ScanError::Config(format!(
                "unknown tie policy '{}', expected 'all' or 'first-run'",
                other
            ))),
        }
    }
}

impl fmt::Display for TiePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiePolicy::All => write!(f, "all"),
            TiePolicy::FirstRun => write!(f, "first-run"),
        }
    }
}

/// Per-key occurrence counts for a single date, remembering the order
/// in which each key was first counted.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    date: NaiveDate,
    entries: Vec<(Rc<str>, usize)>,
    index: FxHashMap<Rc<str>, usize>,
}

impl FrequencyTable {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn increment(&mut self, key: &str) {
        if let Some(&slot) = self.index.get(key) {
            self.entries[slot].1 += 1;
        } else {
            let key: Rc<str> = Rc::from(key);
            self.index.insert(Rc::clone(&key), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of records counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| *c).sum()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|(_, c)| *c).max()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (&**k, *c))
    }
}

/// Keys tied at the highest count. An empty table has no maximum and is an error.
pub fn report_top_keys(table: &FrequencyTable, policy: TiePolicy) -> Result<Vec<String>, ScanError> {
    let max = table
        .max_count()
        .ok_or(ScanError::EmptyResult(table.date()))?;

    let keys = match policy {
        TiePolicy::All => table
            .iter()
            .filter(|&(_, count)| count == max)
            .map(|(key, _)| key.to_string())
            .collect(),
        TiePolicy::FirstRun => table
            .iter()
            .take_while(|&(_, count)| count == max)
            .map(|(key, _)| key.to_string())
            .collect(),
    };

    tracing::debug!(max, %policy, "reported top keys");
    Ok(keys)
}
