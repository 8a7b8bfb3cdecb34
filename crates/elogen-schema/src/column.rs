use crate::prelude::*;

///
/// ColumnDescriptor
/// One column of a table snapshot, as reported by `DESCRIBE`-style metadata.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,

    /// Raw SQL type text, e.g. `varchar(255)` or `enum('a','b')`.
    #[serde(rename = "type")]
    pub type_str: String,

    #[serde(default)]
    pub primary_key: bool,

    #[serde(default)]
    pub auto_increment: bool,

    #[serde(default)]
    pub comment: String,
}

///
/// ForeignKeyEdge
/// A directed relationship from a source table/column to a target
/// table/column.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ForeignKeyEdge {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
}

///
/// ForeignKeyPartition
/// The global edge catalog split relative to one table: `local` edges leave
/// it, `remote` edges point at it.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ForeignKeyPartition {
    pub local: Vec<ForeignKeyEdge>,
    pub remote: Vec<ForeignKeyEdge>,
}

impl ForeignKeyPartition {
    /// Partition the catalog for `table`, preserving relative edge order.
    ///
    /// A self-referencing edge satisfies both predicates and lands in both
    /// sets.
    #[must_use]
    pub fn split(edges: &[ForeignKeyEdge], table: &str) -> Self {
        let mut partition = Self::default();

        for edge in edges {
            if edge.source_table == table {
                partition.local.push(edge.clone());
            }
            if edge.target_table == table {
                partition.remote.push(edge.clone());
            }
        }

        partition
    }

    /// Whether `column` is the source side of a local edge.
    #[must_use]
    pub fn is_local_source(&self, column: &str) -> bool {
        self.local.iter().any(|edge| edge.source_column == column)
    }
}
