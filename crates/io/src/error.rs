use std::fmt;

#[derive(Debug)]
pub enum IoError {
    /// File read/write error.
    Io(String),
    /// CSV parse error.
    Csv(String),
    /// Excel workbook open/read error.
    Workbook(String),
    /// XLSX write error.
    Xlsx(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Workbook(msg) => write!(f, "workbook error: {msg}"),
            Self::Xlsx(msg) => write!(f, "XLSX write error: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}
