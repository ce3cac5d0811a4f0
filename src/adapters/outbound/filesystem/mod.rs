/// Filesystem adapters for file I/O operations
mod csv_codec;
mod report_writer;

pub use csv_codec::CsvCodec;
pub use report_writer::{FileSystemWriter, StdoutPresenter};
