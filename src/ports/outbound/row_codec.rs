use crate::shared::Result;
use std::path::Path;

/// RowCodec port for reading and writing delimited tabular files
///
/// This port abstracts the flat-file codec the datastore persists through:
/// an ordered sequence of rows, each row an ordered sequence of text fields.
/// It carries no datastore semantics of its own.
pub trait RowCodec {
    /// Reads all rows from the file at `path`
    ///
    /// # Returns
    /// Every row of the file, in file order. A zero-byte file yields an
    /// empty sequence, not an error.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - The content is not validly delimited (e.g. an unterminated quote)
    fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>>;

    /// Writes `rows` to the file at `path`, fully replacing its content
    ///
    /// # Errors
    /// Returns an error on any I/O failure. Implementations must not leave
    /// a partially overwritten file behind on failure.
    fn write_rows(&self, path: &Path, rows: &[Vec<String>]) -> Result<()>;
}
