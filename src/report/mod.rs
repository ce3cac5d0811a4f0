/// Report generation - combining an external component inventory with the
/// attribute datastore
mod exporter;
mod inventory;

pub use exporter::ReportExporter;
pub use inventory::Inventory;
