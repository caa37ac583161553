use crate::ScanError;
use chrono::{DateTime, FixedOffset, NaiveDate};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One data line of the log: `key,timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl Record {
    /// Parse a raw line. `line_number` is only used for error reporting.
    pub fn parse(line_number: usize, line: &str) -> Result<Self, ScanError> {
        let trimmed = line.trim();
        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != 2 {
            return Err(ScanError::Parse {
                line: line_number,
                content: trimmed.to_string(),
                reason: format!("expected 2 fields, found {}", fields.len()),
            });
        }

        let timestamp = DateTime::parse_from_str(fields[1], TIMESTAMP_FORMAT)
            .map_err(|e| ScanError::Parse {
                line: line_number,
                content: trimmed.to_string(),
                reason: format!("bad timestamp: {}", e),
            })?;

        Ok(Record {
            key: fields[0].to_string(),
            timestamp,
        })
    }

    /// Calendar date as written in the line, in the record's own offset.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Parse the user-supplied `YYYY-MM-DD` query date.
pub fn parse_query_date(input: &str) -> Result<NaiveDate, ScanError> {
    NaiveDate::parse_from_str(input, QUERY_DATE_FORMAT)
        .map_err(|_| ScanError::InvalidDateFormat(input.to_string()))
}
