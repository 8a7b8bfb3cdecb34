use crate::TAB;
use derive_more::Display;
use elogen_schema::column::ForeignKeyPartition;
use elogen_utils::{camel_case, prettify_table_name, remove_prefix};

///
/// RelationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum RelationKind {
    #[display("belongsTo")]
    BelongsTo,

    #[display("hasMany")]
    HasMany,
}

/// Render relation accessors for one table's edge partition: a `belongsTo`
/// per local edge, then a `hasMany` per remote edge, in catalog order.
///
/// Accessor names are the camelCase of the counterpart table (prefix
/// stripped); multiple edges between the same pair each get their own
/// accessor.
#[must_use]
pub fn render_relations(partition: &ForeignKeyPartition, prefix: &str) -> String {
    let mut out = String::new();

    for edge in &partition.local {
        push_accessor(
            &mut out,
            RelationKind::BelongsTo,
            &edge.target_table,
            &edge.source_column,
            &edge.target_column,
            prefix,
        );
    }

    for edge in &partition.remote {
        push_accessor(
            &mut out,
            RelationKind::HasMany,
            &edge.source_table,
            &edge.source_column,
            &edge.target_column,
            prefix,
        );
    }

    out
}

fn push_accessor(
    out: &mut String,
    relation: RelationKind,
    counterpart_table: &str,
    source_column: &str,
    target_column: &str,
    prefix: &str,
) {
    let class = prettify_table_name(counterpart_table, prefix);
    let method = camel_case(remove_prefix(counterpart_table, prefix));

    out.push_str(&format!("{TAB}public function {method}()\n{TAB}{{\n"));
    out.push_str(&format!(
        "{TAB}{TAB}return $this->{relation}({class}::class, '{source_column}', '{target_column}');\n"
    ));
    out.push_str(&format!("{TAB}}}\n\n"));
}
