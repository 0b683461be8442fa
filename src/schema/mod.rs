use crate::document::{Component, FormDocument};
use serde_json::{Map, Value, json};

mod conditionals;
mod properties;

use conditionals::BranchAnalysis;

/// Compiles a `FormDocument` into a JSON Schema (draft 2020-12) that
/// validates submitted data against the form's conditional logic.
///
/// Compilation is deterministic and total: no component shape causes an
/// error, and components of unrecognized kinds simply do not contribute a
/// property ("ignore unknown" policy).
pub struct SchemaCompiler<'a> {
    document: &'a FormDocument,
}

impl<'a> SchemaCompiler<'a> {
    pub fn new(document: &'a FormDocument) -> Self {
        Self { document }
    }

    /// Builds the complete schema: one property per data-bearing component,
    /// an unconditional `required` list, and `allOf` conditional rules for
    /// visibility- and branch-gated fields.
    pub fn compile(&self) -> Value {
        let mut property_map = Map::new();
        for component in document_data_components(self.document) {
            if let Some(schema) = properties::property_schema(component) {
                property_map.insert(component.id().to_string(), schema);
            }
        }

        let branch_analysis = conditionals::analyze_branches(self.document);
        let required = self.unconditional_required(&branch_analysis);

        let mut all_of = conditionals::visibility_rules(self.document);
        all_of.extend(branch_analysis.rules);

        let mut schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": schema_id(&self.document.title),
            "title": self.document.title,
            "description": format!("Validation schema generated from the '{}' form", self.document.title),
            "type": "object",
            "properties": property_map,
            "required": required,
            "additionalProperties": false,
        });
        if !all_of.is_empty() {
            schema["allOf"] = Value::Array(all_of);
        }
        schema
    }

    /// Top-level `required` holds only components that are required, carry
    /// no visibility conditions, and are not gated behind a branch. Gated
    /// fields are governed by `allOf` rules instead.
    fn unconditional_required(&self, branches: &BranchAnalysis) -> Vec<String> {
        let mut required: Vec<String> = document_data_components(self.document)
            .into_iter()
            .filter(|c| c.validation().is_some_and(|v| v.required))
            .filter(|c| c.visibility_conditions().is_empty())
            .filter(|c| !branches.conditional_fields.contains(c.id()))
            .map(|c| c.id().to_string())
            .collect();
        required.sort();
        required.dedup();
        required
    }
}

/// Convenience wrapper for the common one-shot case.
pub fn compile_schema(document: &FormDocument) -> Value {
    SchemaCompiler::new(document).compile()
}

/// All data-bearing components of the whole document, in page order,
/// recursing through transparent sections.
pub(crate) fn document_data_components(document: &FormDocument) -> Vec<&Component> {
    let mut out = Vec::new();
    for page in &document.pages {
        collect_data_components(&page.components, &mut out);
    }
    out
}

/// Flattens one component tree into its data-bearing leaves. Sections are
/// transparent; arrays are leaves here (their `array_items` shape lives in
/// the array's own nested schema).
pub(crate) fn collect_data_components<'c>(components: &'c [Component], out: &mut Vec<&'c Component>) {
    for component in components {
        match component {
            Component::Section(section) => collect_data_components(&section.children, out),
            c if c.is_data_bearing() => out.push(c),
            _ => {}
        }
    }
}

fn schema_id(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("https://formflow.dev/schemas/{}.json", slug.trim_matches('-'))
}
