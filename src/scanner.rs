use crate::{
    file_handler::{LogLine, LogLines},
    frequency::FrequencyTable,
    record::Record,
    ScanError,
};
use chrono::NaiveDate;

/// Finds and counts the block of records for one date in a newest-first log.
pub struct LogScanner<'a> {
    lines: &'a LogLines,
}

impl<'a> LogScanner<'a> {
    pub fn new(lines: &'a LogLines) -> Self {
        Self { lines }
    }

    fn parse(line: &LogLine) -> Result<Record, ScanError> {
        Record::parse(line.number, &line.text)
    }

    /// Index of the last line (in file order) whose date is on or after `target`.
    ///
    /// Lines are newest first, so dates `>= target` form a prefix; this binary
    /// searches for the end of that prefix. `None` when every line is older.
    /// Only the probed lines are parsed.
    pub fn locate_date_block(&self, target: NaiveDate) -> Result<Option<usize>, ScanError> {
        let lines = self.lines.as_slice();
        let mut lo = 0;
        let mut hi = lines.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if Self::parse(&lines[mid])?.date() >= target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Ok(lo.checked_sub(1))
    }

    /// Count keys from `start` back toward the top of the file while the date matches.
    pub fn count_for_date(
        &self,
        start: Option<usize>,
        target: NaiveDate,
    ) -> Result<FrequencyTable, ScanError> {
        let mut table = FrequencyTable::new(target);
        let Some(start) = start else {
            return Ok(table);
        };

        for line in self.lines.as_slice()[..=start].iter().rev() {
            let record = Self::parse(line)?;
            if record.date() != target {
                break;
            }
            table.increment(&record.key);
        }
        Ok(table)
    }

    /// Locate then count.
    pub fn scan(&self, target: NaiveDate) -> Result<FrequencyTable, ScanError> {
        let start = self.locate_date_block(target)?;
        tracing::debug!(%target, lines = self.lines.len(), ?start, "located date block");
        let table = self.count_for_date(start, target)?;
        tracing::debug!(keys = table.len(), records = table.total(), "counted date block");
        Ok(table)
    }

    /// Full linear count over every line, in the same bottom-up order as `scan`.
    /// Parses every line, so any malformed line is an error.
    pub fn count_linear(&self, target: NaiveDate) -> Result<FrequencyTable, ScanError> {
        let mut table = FrequencyTable::new(target);
        for line in self.lines.as_slice().iter().rev() {
            let record = Self::parse(line)?;
            if record.date() == target {
                table.increment(&record.key);
            }
        }
        Ok(table)
    }
}
