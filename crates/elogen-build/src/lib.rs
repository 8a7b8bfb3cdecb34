pub mod export;
pub mod relations;
pub mod render;

use elogen_schema::model::ModelDescriptor;

pub use export::{PhpValue, word_wrap};
pub use relations::{RelationKind, render_relations};
pub use render::ModelWriter;

/// One level of indentation in generated source.
pub(crate) const TAB: &str = "    ";

/// Render a classified model plus its relation text into final source.
///
/// Deterministic: identical input yields byte-identical output.
#[must_use]
pub fn render_model(
    model: &ModelDescriptor,
    relation_text: &str,
    namespace: &str,
    line_wrap: usize,
) -> String {
    ModelWriter::new(model, namespace, line_wrap).render(relation_text)
}
