/// Datastore domain - the supplemental attribute store and its state rules
mod store;

pub use store::{AttributeStore, ID_COLUMN_NAME};
