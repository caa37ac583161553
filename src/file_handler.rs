use crate::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A data line together with its 1-based line number in the file (the header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub number: usize,
    pub text: String,
}

/// All data lines of a log, in file order (newest first).
#[derive(Debug, Clone, Default)]
pub struct LogLines {
    lines: Vec<LogLine>,
}

impl LogLines {
    /// Keep every line after the header. Blank lines in the middle stay as
    /// data lines and fail to parse if visited; only a blank tail at EOF is cut.
    fn from_numbered(mut lines: Vec<LogLine>) -> Self {
        while lines.last().is_some_and(|line| line.text.trim().is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    /// Build from in-memory text. The first line is treated as the header and dropped.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .skip(1)
            .map(|(idx, line)| LogLine {
                number: idx + 1,
                text: line.to_string(),
            })
            .collect();
        Self::from_numbered(lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LogLine> {
        self.lines.get(index)
    }

    pub fn as_slice(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }
}

/// Read every data line of the log at `path` into memory.
///
/// The file handle lives only for the duration of this call.
pub fn load(path: &Path) -> Result<LogLines, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ScanError::io(path, e))?;
        if idx == 0 {
            continue;
        }
        lines.push(LogLine {
            number: idx + 1,
            text: line,
        });
    }

    let lines = LogLines::from_numbered(lines);
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded log");
    Ok(lines)
}
