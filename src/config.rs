use crate::{frequency::TiePolicy, record::parse_query_date, ScanError};
use chrono::NaiveDate;
use std::path::PathBuf;

pub const TIES_ENV: &str = "MOST_ACTIVE_COOKIE_TIES";
pub const LOG_ENV: &str = "MOST_ACTIVE_COOKIE_LOG";

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub ties: TiePolicy,
}

impl ScanConfig {
    /// Build from CLI values, reading overrides from the process environment.
    pub fn new(path: PathBuf, date: &str, ties: Option<TiePolicy>) -> Result<Self, ScanError> {
        Self::with_env(path, date, ties, |key| std::env::var(key).ok())
    }

    /// Build with a custom environment lookup (for tests).
    ///
    /// An explicit `ties` wins over the environment; without either the default is `All`.
    pub fn with_env<F>(
        path: PathBuf,
        date: &str,
        ties: Option<TiePolicy>,
        lookup: F,
    ) -> Result<Self, ScanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let date = parse_query_date(date)?;
        let ties = match ties {
            Some(policy) => policy,
            None => match lookup(TIES_ENV) {
                Some(value) => value.parse()?,
                None => TiePolicy::default(),
            },
        };
        Ok(Self { path, date, ties })
    }
}
