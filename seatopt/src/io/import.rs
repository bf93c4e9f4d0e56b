use crate::entities::{Party, SeatingInstance, Table};
use crate::error::InvalidInput;
use crate::io::ext_repr::ExtSeatingInstance;
use itertools::Itertools;

/// Imports an instance into the library.
///
/// Party display names are a reporting concern and are dropped here; the
/// optimizer only ever sees `(id, size)`.
pub fn import(ext_instance: &ExtSeatingInstance) -> Result<SeatingInstance, InvalidInput> {
    let parties = ext_instance
        .parties
        .iter()
        .map(|ext_party| Party::new(ext_party.id, ext_party.size))
        .collect_vec();

    let tables = ext_instance
        .tables
        .iter()
        .map(|ext_table| Table::new(ext_table.id, ext_table.capacity))
        .collect_vec();

    SeatingInstance::new(parties, tables)
}
