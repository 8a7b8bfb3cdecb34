use crate::prelude::*;
use thiserror::Error as ThisError;

#[cfg(test)]
mod tests;

///
/// ClassifyError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ClassifyError {
    #[error("column '{column}' has malformed enum type '{type_str}'")]
    MalformedEnum { column: String, type_str: String },
}

/// Classify a table's columns into a `ModelDescriptor`.
///
/// `table` must already have any configured prefix stripped; column order is
/// significant and decides `fillable`/`dates` ordering. Each column gets
/// exactly one primary classification (primary key, timestamp, hidden,
/// foreign-key-excluded, or fillable); the date/json/enum tags are
/// independent overlays on columns past the first two rules.
pub fn classify(
    table: &str,
    columns: &[ColumnDescriptor],
    base_class: &str,
    foreign_keys: ForeignKeyPartition,
    lookup: &TimestampLookup,
) -> Result<ModelDescriptor, ClassifyError> {
    let timestamp_fields = lookup.resolve(base_class);

    let mut model = ModelDescriptor {
        table_name: table.to_string(),
        class_name: elogen_utils::prettify_table_name(table, ""),
        base_class: base_class.to_string(),
        primary_key: "id".to_string(),
        incrementing: false,
        timestamps: false,
        dates: Vec::new(),
        hidden: Vec::new(),
        casts: Vec::new(),
        enums: Vec::new(),
        fillable: Vec::new(),
        foreign_keys,
    };

    for column in columns {
        if column.primary_key {
            model.primary_key = column.name.clone();
            model.incrementing = column.auto_increment;
            continue;
        }

        if timestamp_fields.matches(&column.name) {
            model.timestamps = true;
            continue;
        }

        // independent overlays
        if column.type_str.contains("json") {
            model.casts.push((column.name.clone(), "json".to_string()));
        }

        if column.type_str.contains("enum") {
            let literals = parse_enum_literals(&column.name, &column.type_str)?;
            model.enums.push((column.name.clone(), literals));
        }

        if ["date", "time", "year"]
            .iter()
            .any(|needle| column.type_str.contains(needle))
        {
            model.dates.push(column.name.clone());
        }

        // exactly one primary classification remains
        if column.comment.contains("hidden") || column.comment.contains("secret") {
            model.hidden.push(column.name.clone());
            continue;
        }

        if model.foreign_keys.is_local_source(&column.name) {
            continue;
        }

        model.fillable.push(column.name.clone());
    }

    Ok(model)
}

/// Parse the literal list out of `enum('a','b')` type text, preserving
/// declaration order.
fn parse_enum_literals(column: &str, type_str: &str) -> Result<Vec<String>, ClassifyError> {
    let malformed = || ClassifyError::MalformedEnum {
        column: column.to_string(),
        type_str: type_str.to_string(),
    };

    let start = type_str.find("enum(").ok_or_else(malformed)? + "enum(".len();
    let rest = &type_str[start..];
    let end = rest.find(')').ok_or_else(malformed)?;
    let body = rest[..end].trim();

    if body.is_empty() {
        return Err(malformed());
    }

    Ok(body
        .split(',')
        .map(|literal| literal.trim().trim_matches('\'').to_string())
        .collect())
}
