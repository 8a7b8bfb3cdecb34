use crate::prelude::*;

///
/// ModelDescriptor
/// The fully classified, immutable representation of one table's generated
/// class. Built once per snapshot by `classify` and consumed by rendering.
///

#[derive(Clone, Debug, Serialize)]
pub struct ModelDescriptor {
    /// Table name with any configured prefix already stripped.
    pub table_name: String,
    pub class_name: String,
    pub base_class: String,

    /// Primary key column (conventional `id` unless the schema says
    /// otherwise).
    pub primary_key: String,
    pub incrementing: bool,
    pub timestamps: bool,

    /// Ordered as the columns appeared in the snapshot.
    pub dates: Vec<String>,
    pub hidden: Vec<String>,

    /// Column name → cast name, insertion-ordered.
    pub casts: Vec<(String, String)>,

    /// Enum column → literals in declaration order.
    pub enums: Vec<(String, Vec<String>)>,

    /// Mass-assignable columns, in original column order.
    pub fillable: Vec<String>,

    /// Edge partition carried through for relation rendering.
    pub foreign_keys: ForeignKeyPartition,
}
