use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Cannot read input file {}: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input file {} has no header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("Input file {} has no `{column}` column", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Row {row}: `{column}` value {value:?} cannot be compared with a year")]
    YearNotComparable {
        row: String,
        column: String,
        value: String,
    },

    #[error("Cannot write output file {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 讀取或解析輸入檔失敗
    Input,
    /// 資料內容無法比較
    Data,
    /// 寫入輸出檔失敗
    Output,
    Configuration,
    System,
}

impl ErrorCategory {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorCategory::Input => 3,
            ErrorCategory::Data => 4,
            ErrorCategory::Output => 5,
            ErrorCategory::Configuration | ErrorCategory::System => 1,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InputNotFound { .. }
            | EtlError::InputUnreadable { .. }
            | EtlError::MalformedInput { .. }
            | EtlError::MissingHeader { .. }
            | EtlError::MissingColumn { .. } => ErrorCategory::Input,
            EtlError::YearNotComparable { .. } => ErrorCategory::Data,
            EtlError::OutputUnwritable { .. } => ErrorCategory::Output,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_) | EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::InputNotFound { path } => {
                format!("Input file {} does not exist", path.display())
            }
            EtlError::InputUnreadable { path, source } => {
                format!("Could not open input file {} ({})", path.display(), source)
            }
            EtlError::MalformedInput { path, source } => {
                format!("Input file {} is not valid CSV: {}", path.display(), source)
            }
            EtlError::MissingHeader { path } => {
                format!("Input file {} is empty", path.display())
            }
            EtlError::MissingColumn { path, column } => {
                format!("Input file {} has no '{}' column", path.display(), column)
            }
            EtlError::YearNotComparable { row, column, value } => {
                format!("Row {} has a non-numeric {}: '{}'", row, column, value)
            }
            EtlError::OutputUnwritable { path, source } => {
                format!("Could not write output file {} ({})", path.display(), source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::InputNotFound { .. } => "Check the source path and try again",
            EtlError::InputUnreadable { .. } => "Check the file permissions of the source",
            EtlError::MalformedInput { .. } | EtlError::MissingHeader { .. } => {
                "Make sure the source is comma-delimited UTF-8 with a header row and the same number of fields on every line"
            }
            EtlError::MissingColumn { .. } => "Add a 'year' column to the source header",
            EtlError::YearNotComparable { .. } => {
                "Fix or blank out the non-numeric year value; blank years are skipped"
            }
            EtlError::OutputUnwritable { .. } => {
                "Make sure the destination directory exists and is writable"
            }
            EtlError::InvalidConfigValueError { .. } => "Run with --help to see the expected arguments",
            EtlError::CsvError(_) | EtlError::IoError(_) => "Retry the run; if it keeps failing, run with --verbose",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let not_found = EtlError::InputNotFound {
            path: PathBuf::from("in.csv"),
        };
        assert_eq!(not_found.category(), ErrorCategory::Input);
        assert_eq!(not_found.exit_code(), 3);

        let bad_year = EtlError::YearNotComparable {
            row: "7".to_string(),
            column: "year".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(bad_year.exit_code(), 4);

        let unwritable = EtlError::OutputUnwritable {
            path: PathBuf::from("out.csv"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(unwritable.exit_code(), 5);
    }

    #[test]
    fn test_messages_name_the_file() {
        let err = EtlError::MissingColumn {
            path: PathBuf::from("data/raw.csv"),
            column: "year".to_string(),
        };
        assert!(err.to_string().contains("data/raw.csv"));
        assert!(err.user_friendly_message().contains("'year'"));
    }
}
