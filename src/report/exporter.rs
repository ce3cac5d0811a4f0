use crate::datastore::AttributeStore;
use crate::ports::outbound::RowCodec;
use crate::report::Inventory;

/// Combines a component inventory with the attribute datastore into the
/// final report rows.
///
/// The output header is the inventory header extended with the datastore
/// headings; each data row is the inventory row extended with that
/// component's stored attributes. Components the datastore does not know
/// get empty cells, so every report row has the same width.
pub struct ReportExporter;

impl ReportExporter {
    pub fn combine<C: RowCodec>(
        inventory: &Inventory,
        store: &AttributeStore<C>,
    ) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(inventory.rows().len() + 1);

        let mut header = inventory.header().to_vec();
        header.extend(store.headings().iter().cloned());
        rows.push(header);

        for component in inventory.rows() {
            let id = component.first().map(String::as_str).unwrap_or_default();
            let mut row = component.clone();
            row.extend(store.attributes_for(id));
            rows.push(row);
        }

        rows
    }
}
