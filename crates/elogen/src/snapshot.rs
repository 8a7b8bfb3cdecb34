use elogen_schema::column::{ColumnDescriptor, ForeignKeyEdge};
use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// SnapshotError
///

#[derive(Debug, ThisError)]
pub enum SnapshotError {
    #[error("cannot parse schema snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

///
/// SchemaSnapshot
/// One complete schema capture: per-table ordered columns plus the global
/// foreign-key catalog. Each generation run consumes a fresh snapshot.
///

#[derive(Clone, Debug, Deserialize)]
pub struct SchemaSnapshot {
    pub tables: Vec<TableSnapshot>,

    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyEdge>,
}

impl SchemaSnapshot {
    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }
}

///
/// TableSnapshot
///

#[derive(Clone, Debug, Deserialize)]
pub struct TableSnapshot {
    pub name: String,

    /// Schema order; classification depends on it.
    pub columns: Vec<ColumnDescriptor>,
}
