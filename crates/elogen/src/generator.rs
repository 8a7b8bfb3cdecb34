use crate::{Error, config::GeneratorConfig, snapshot::SchemaSnapshot};
use elogen_build::{render_model, render_relations};
use elogen_schema::{
    classify::classify,
    column::{ColumnDescriptor, ForeignKeyEdge, ForeignKeyPartition},
};
use elogen_utils::remove_prefix;

///
/// GeneratedModel
/// One rendered class, ready to be persisted by the caller.
///

#[derive(Clone, Debug)]
pub struct GeneratedModel {
    pub class_name: String,
    pub file_name: String,
    pub contents: String,
}

///
/// Generator
/// Per-table glue: partition the catalog, classify the columns, render the
/// class. Holds only immutable configuration, so batch runs over many tables
/// are independent invocations.
///

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate one model from its ordered columns and the global edge
    /// catalog. `table` carries its raw (prefixed) name; edges in the
    /// catalog do too.
    pub fn generate_model(
        &self,
        table: &str,
        columns: &[ColumnDescriptor],
        catalog: &[ForeignKeyEdge],
    ) -> Result<GeneratedModel, Error> {
        let partition = ForeignKeyPartition::split(catalog, table);
        let stripped = remove_prefix(table, &self.config.prefix);

        let model = classify(
            stripped,
            columns,
            &self.config.base_class,
            partition,
            &self.config.timestamp_classes,
        )?;

        let relations = render_relations(&model.foreign_keys, &self.config.prefix);
        let contents = render_model(
            &model,
            &relations,
            &self.config.namespace,
            self.config.line_wrap,
        );

        tracing::debug!(table, class = %model.class_name, "generated model");

        Ok(GeneratedModel {
            file_name: format!("{}.php", model.class_name),
            class_name: model.class_name,
            contents,
        })
    }

    /// Generate every table in the snapshot, in snapshot order.
    pub fn generate_all(&self, snapshot: &SchemaSnapshot) -> Result<Vec<GeneratedModel>, Error> {
        snapshot
            .tables
            .iter()
            .map(|table| self.generate_model(&table.name, &table.columns, &snapshot.foreign_keys))
            .collect()
    }
}
