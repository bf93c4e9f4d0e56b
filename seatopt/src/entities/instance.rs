use crate::entities::{Party, Table};
use crate::error::InvalidInput;
use itertools::Itertools;

#[derive(Debug, Clone)]
/// Instance of a seating request: a set of waiting parties to be assigned to a set of tables.
///
/// Immutable snapshot for the duration of one optimization call. The caller
/// fetches both lists from whatever store it uses and passes them in; nothing
/// here outlives the call.
pub struct SeatingInstance {
    /// The parties waiting to be seated, in arrival order
    pub parties: Vec<Party>,
    /// Set of tables available to seat the parties
    pub tables: Vec<Table>,
}

impl SeatingInstance {
    /// Builds a validated instance. All preconditions (unique ids, strictly
    /// positive sizes and capacities) are checked here; everything downstream
    /// may assume them. Empty lists are legitimate inputs.
    pub fn new(parties: Vec<Party>, tables: Vec<Table>) -> Result<SeatingInstance, InvalidInput> {
        if let Some(id) = parties.iter().map(|p| p.id).duplicates().next() {
            return Err(InvalidInput::DuplicatePartyId(id));
        }
        if let Some(id) = tables.iter().map(|t| t.id).duplicates().next() {
            return Err(InvalidInput::DuplicateTableId(id));
        }
        if let Some(party) = parties.iter().find(|p| p.size == 0) {
            return Err(InvalidInput::ZeroPartySize(party.id));
        }
        if let Some(table) = tables.iter().find(|t| t.capacity == 0) {
            return Err(InvalidInput::ZeroTableCapacity(table.id));
        }

        Ok(SeatingInstance { parties, tables })
    }

    pub fn party(&self, id: u64) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn table(&self, id: u64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Total number of seats requested by all waiting parties.
    pub fn total_demand(&self) -> u64 {
        self.parties.iter().map(|p| p.size as u64).sum()
    }

    /// Total number of seats across all tables.
    pub fn total_capacity(&self) -> u64 {
        self.tables.iter().map(|t| t.capacity as u64).sum()
    }
}
