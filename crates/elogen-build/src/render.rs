use crate::{
    TAB,
    export::{PhpValue, word_wrap},
};
use elogen_schema::model::ModelDescriptor;


///
/// ModelWriter
/// Renders one `ModelDescriptor` into class source, section by section.
/// Every section is gated by its own omission predicate; output is
/// deterministic for identical input.
///

pub struct ModelWriter<'a> {
    model: &'a ModelDescriptor,
    namespace: &'a str,
    line_wrap: usize,
}

impl<'a> ModelWriter<'a> {
    #[must_use]
    pub const fn new(model: &'a ModelDescriptor, namespace: &'a str, line_wrap: usize) -> Self {
        Self {
            model,
            namespace,
            line_wrap,
        }
    }

    #[must_use]
    pub fn render(&self, relation_text: &str) -> String {
        let model = self.model;
        let mut file = String::new();

        if self.namespace.is_empty() {
            file.push_str("<?php\n\n");
        } else {
            file.push_str(&format!("<?php namespace {};\n\n", self.namespace));
        }

        file.push_str("/**\n");
        file.push_str(&format!(
            " * Eloquent class to describe the {} table\n",
            model.table_name
        ));
        file.push_str(" *\n");
        file.push_str(" * automatically generated by elogen\n");
        file.push_str(" */\n");

        file.push_str(&format!(
            "class {} extends {}\n{{\n",
            model.class_name, model.base_class
        ));

        // one constant per enum literal, blank line after each field's group
        for (field, literals) in &model.enums {
            for literal in literals {
                let key = format!("{}_{}", field.to_uppercase(), literal.to_uppercase());
                file.push_str(&format!(
                    "{TAB}const {key} = {};\n",
                    PhpValue::str(literal.clone()).export()
                ));
            }
            file.push('\n');
        }

        file.push_str(&format!(
            "{TAB}protected $table = {};\n\n",
            PhpValue::str(model.table_name.clone()).export()
        ));

        // primary key defaults to "id"
        if model.primary_key != "id" {
            file.push_str(&format!(
                "{TAB}public $primaryKey = {};\n\n",
                PhpValue::str(model.primary_key.clone()).export()
            ));
        }

        // timestamps defaults to true
        if !model.timestamps {
            file.push_str(&format!(
                "{TAB}public $timestamps = {};\n\n",
                PhpValue::Bool(model.timestamps).export()
            ));
        }

        // incrementing defaults to true
        if !model.incrementing {
            file.push_str(&format!(
                "{TAB}public $incrementing = {};\n\n",
                PhpValue::Bool(model.incrementing).export()
            ));
        }

        if !model.casts.is_empty() {
            let casts = PhpValue::Map(
                model
                    .casts
                    .iter()
                    .map(|(name, cast)| (name.clone(), PhpValue::str(cast.clone())))
                    .collect(),
            );
            file.push_str(&format!(
                "{TAB}protected $casts = {};\n\n",
                casts.export_indented(TAB)
            ));
        }

        // most fields are considered fillable; the line is wrapped for
        // readability without changing its content
        let fillable = format!(
            "{TAB}protected $fillable = {};",
            PhpValue::string_list(&model.fillable).export()
        );
        file.push_str(&word_wrap(
            &fillable,
            self.line_wrap,
            &format!("\n{TAB}{TAB}"),
        ));
        file.push_str("\n\n");

        // except for the hidden ones
        if !model.hidden.is_empty() {
            file.push_str(&format!(
                "{TAB}protected $hidden = {};\n\n",
                PhpValue::string_list(&model.hidden).export()
            ));
        }

        if !model.dates.is_empty() {
            file.push_str(&format!("{TAB}public function getDates()\n{TAB}{{\n"));
            file.push_str(&format!(
                "{TAB}{TAB}return {};\n",
                PhpValue::string_list(&model.dates).export()
            ));
            file.push_str(&format!("{TAB}}}\n\n"));
        }

        // relation text keeps its indentation; the boundary collapses to
        // exactly one blank line
        let relations = relation_text.trim_start_matches('\n').trim_end();
        if !relations.is_empty() {
            file.push_str(relations);
            file.push_str("\n\n");
        }

        format!("{}\n}}\n", file.trim_end())
    }
}
