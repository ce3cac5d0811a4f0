use dep_report::ports::outbound::RowCodec;
use dep_report::shared::error::DatastoreError;
use dep_report::shared::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory RowCodec double.
///
/// Keeps "files" in a map so datastore logic can be exercised without real
/// file content, and can be configured to fail every write.
pub struct MockRowCodec {
    files: RefCell<HashMap<PathBuf, Vec<Vec<String>>>>,
    fail_writes: bool,
}

impl MockRowCodec {
    pub fn new() -> Self {
        Self {
            files: RefCell::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn with_file(self, path: &str, rows: Vec<Vec<String>>) -> Self {
        self.files.borrow_mut().insert(PathBuf::from(path), rows);
        self
    }

    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl RowCodec for MockRowCodec {
    fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            DatastoreError::FileReadError {
                path: path.to_path_buf(),
                details: "no such mock file".to_string(),
            }
            .into()
        })
    }

    fn write_rows(&self, path: &Path, rows: &[Vec<String>]) -> Result<()> {
        if self.fail_writes {
            return Err(DatastoreError::FileWriteError {
                path: path.to_path_buf(),
                details: "mock write failure".to_string(),
            }
            .into());
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), rows.to_vec());
        Ok(())
    }
}
