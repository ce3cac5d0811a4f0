use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested datastore or report operation completed
    Success = 0,
    /// Application error (datastore I/O error, schema mismatch, missing datafile, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for the attribute datastore and report export.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Two failure classes exist: I/O faults (read, write, delete) and schema
/// faults (`NoData`, `IncompatibleHeadings`). Both are always surfaced to the
/// caller; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum DatastoreError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to delete the datastore file: {path}\nDetails: {details}")]
    FileDeleteError { path: PathBuf, details: String },

    #[error("Malformed delimited data in {path} (line {line}): {details}")]
    MalformedData {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Either no data was found in the provided datafile or the file could not be read ({path})\n\n💡 Hint: A datafile needs a heading row plus at least one data row")]
    NoData { path: PathBuf },

    #[error("The headings in the provided datafile are not compatible with the existing datastore\nDatastore headings: {expected:?}\nDatafile headings:  {found:?}\n\n💡 Hint: Recreate the datastore with the `create` command if the column set is meant to change")]
    IncompatibleHeadings {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("The provided inventory file {path} contains no rows\n\n💡 Hint: An inventory needs at least a heading row; data rows are optional")]
    EmptyInventory { path: PathBuf },

    #[error("The provided datafile {path} cannot be located")]
    DatafileNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    // DatastoreError tests
    #[test]
    fn test_file_read_error_display() {
        let error = DatastoreError::FileReadError {
            path: PathBuf::from("/test/store.csv"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/store.csv"));
        assert!(display.contains("File not found"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = DatastoreError::FileWriteError {
            path: PathBuf::from("/test/store.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_no_data_display() {
        let error = DatastoreError::NoData {
            path: PathBuf::from("/test/datafile.csv"),
        };
        let display = format!("{}", error);
        assert!(display.contains("no data was found"));
        assert!(display.contains("/test/datafile.csv"));
    }

    #[test]
    fn test_incompatible_headings_display() {
        let error = DatastoreError::IncompatibleHeadings {
            expected: vec!["license".to_string(), "origin".to_string()],
            found: vec!["license".to_string(), "risk".to_string()],
        };
        let display = format!("{}", error);
        assert!(display.contains("not compatible"));
        assert!(display.contains("license"));
        assert!(display.contains("risk"));
    }

    #[test]
    fn test_malformed_data_display() {
        let error = DatastoreError::MalformedData {
            path: PathBuf::from("/test/store.csv"),
            line: 3,
            details: "unterminated quoted field".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed delimited data"));
        assert!(display.contains("line 3"));
        assert!(display.contains("unterminated quoted field"));
    }

    #[test]
    fn test_empty_inventory_display() {
        let error = DatastoreError::EmptyInventory {
            path: PathBuf::from("/test/inventory.csv"),
        };
        let display = format!("{}", error);
        assert!(display.contains("inventory file"));
        assert!(display.contains("contains no rows"));
        assert!(display.contains("/test/inventory.csv"));
    }

    #[test]
    fn test_datafile_not_found_display() {
        let error = DatastoreError::DatafileNotFound {
            path: PathBuf::from("/missing/datafile.csv"),
        };
        let display = format!("{}", error);
        assert!(display.contains("cannot be located"));
        assert!(display.contains("/missing/datafile.csv"));
    }
}
