use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScanError {
    InvalidDateFormat(String),
    Io { path: PathBuf, source: std::io::Error },
    Parse { line: usize, content: String, reason: String },
    EmptyResult(NaiveDate),
    Config(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::InvalidDateFormat(input) => {
                write!(f, "Invalid date format '{}'. Expected a YYYY-MM-DD.", input)
            }
            ScanError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            ScanError::Parse { line, content, reason } => {
                write!(f, "Malformed record on line {} ('{}'): {}", line, content, reason)
            }
            ScanError::EmptyResult(date) => write!(f, "No records found for {}", date),
            ScanError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ScanError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Io { path: path.into(), source }
    }
}
