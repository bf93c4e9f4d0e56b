use serde::{Deserialize, Serialize};

/// Seating request instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSeatingInstance {
    /// The name of the instance
    pub name: String,
    /// Parties currently waiting, in arrival order
    pub parties: Vec<ExtParty>,
    /// Set of tables available to seat the parties
    pub tables: Vec<ExtTable>,
}

/// Waiting party
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtParty {
    pub id: u64,
    /// Display name of the group, if the queue store tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of seats the group requires
    pub size: u32,
}

/// Table
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtTable {
    pub id: u64,
    /// Number of seats at the table
    pub capacity: u32,
}

/// Seating plan
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSeatingPlan {
    /// Assignments in the order the decisions were made
    pub assignments: Vec<ExtAssignment>,
    /// Ids of the parties no table could hold, ascending
    pub unseated: Vec<u64>,
    /// Ids of the tables not consumed by any assignment, ascending
    pub unused_tables: Vec<u64>,
    /// Sum of the waste of all assignments
    pub total_waste: u64,
    /// Seated party sizes divided by the consumed table capacity
    pub utilization: f32,
}

/// One party seated at one table
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtAssignment {
    pub party_id: u64,
    pub table_id: u64,
    /// Seats left over at the table
    pub waste: u32,
}
