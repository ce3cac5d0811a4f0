//! dep-report - dependency report tool with a supplemental attribute datastore
//!
//! This library maintains a small persistent key/value datastore of
//! supplemental FOSS attributes (license, origin, risk classification, ...)
//! keyed by component identifier, and combines it with an externally produced
//! component inventory into a single dependency report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Datastore Domain** (`datastore`): The attribute store and its state rules
//! - **Report Layer** (`report`): Inventory loading and report assembly
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_report::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Open the datastore (empty when the file does not exist yet)
//! let mut store = AttributeStore::open(CsvCodec::new(), "fossAdditionalAttributes.csv")?;
//!
//! // Replace its content from an operator-supplied datafile
//! store.create(Path::new("attributes.csv"))?;
//!
//! // Combine a component inventory with the stored attributes
//! let inventory = Inventory::load(&CsvCodec::new(), Path::new("inventory.csv"))?;
//! let rows = ReportExporter::combine(&inventory, &store);
//! print!("{}", CsvCodec::encode(&rows));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod datastore;
pub mod ports;
pub mod report;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{CsvCodec, FileSystemWriter, StdoutPresenter};
    pub use crate::datastore::{AttributeStore, ID_COLUMN_NAME};
    pub use crate::ports::outbound::{OutputPresenter, RowCodec};
    pub use crate::report::{Inventory, ReportExporter};
    pub use crate::shared::error::DatastoreError;
    pub use crate::shared::Result;
}
