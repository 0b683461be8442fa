use crate::document::{Branch, ComparisonOp, Condition, FormDocument, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One edge of the visual page-flow graph, as supplied by an external
/// graph editor. `label` optionally encodes a branch condition in the
/// form `"<field> <operator> <value>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Rewrites every page's navigation fields from its outgoing edges.
///
/// Zero edges clears both strategies, one edge becomes an unconditional
/// `next_page`, two or more become `branches` in edge-list order. An edge
/// without a parseable label synthesizes a placeholder condition so the
/// sync never fails; the validator surfaces the placeholder later if the
/// editor leaves it unfilled.
pub fn sync_connections(document: &FormDocument, edges: &[FlowEdge]) -> FormDocument {
    let mut updated = document.clone();
    for page in &mut updated.pages {
        let outgoing: Vec<&FlowEdge> = edges.iter().filter(|e| e.source == page.id).collect();
        match outgoing.as_slice() {
            [] => {
                page.next_page = None;
                page.branches = None;
            }
            [only] => {
                page.next_page = Some(only.target.clone());
                page.branches = None;
            }
            many => {
                page.next_page = None;
                page.branches = Some(
                    many.iter()
                        .enumerate()
                        .map(|(index, edge)| Branch {
                            condition: edge
                                .label
                                .as_deref()
                                .and_then(parse_condition_label)
                                .unwrap_or_else(|| placeholder_condition(index)),
                            next_page: edge.target.clone(),
                        })
                        .collect(),
                );
            }
        }
    }
    updated
}

/// Appends a page. Uniqueness of the id is deliberately not checked here;
/// that is the caller's responsibility, verified later by `validate`.
pub fn add_page(document: &FormDocument, page: Page) -> FormDocument {
    let mut updated = document.clone();
    updated.pages.push(page);
    updated
}

/// Deletes the page with `id` and scrubs every other page's `next_page`
/// and branch entries that reference it. Leaving a dangling reference
/// behind would violate referential integrity, so the scrub is part of
/// the operation, not optional cleanup.
pub fn remove_page(document: &FormDocument, id: &str) -> FormDocument {
    let mut updated = document.clone();
    updated.pages.retain(|p| p.id != id);
    for page in &mut updated.pages {
        if page.next_page.as_deref() == Some(id) {
            page.next_page = None;
        }
        if let Some(branches) = &mut page.branches {
            branches.retain(|b| b.next_page != id);
            if branches.is_empty() {
                page.branches = None;
            }
        }
    }
    updated
}

/// Parses a `"<field> <operator> <value>"` edge label into a condition.
///
/// The field and value halves are re-joined around the first operator
/// token, so multi-word fields and values survive. Returns `None` when no
/// operator token is present.
pub fn parse_condition_label(label: &str) -> Option<Condition> {
    let parts: Vec<&str> = label.split_whitespace().collect();
    let op_position = parts
        .iter()
        .position(|part| part.parse::<ComparisonOp>().is_ok())?;
    if op_position == 0 || op_position == parts.len() - 1 {
        return None;
    }
    let operator: ComparisonOp = parts[op_position].parse().ok()?;
    let field = parts[..op_position].join(" ");
    let value = parse_label_value(&parts[op_position + 1..].join(" "));
    Some(Condition::new(field, operator, value))
}

/// Edge labels are flat text; coerce the value bool-then-number-then-string
/// to mirror how conditions compare against submitted JSON.
fn parse_label_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(n) = raw.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(n) {
            return Value::Number(number);
        }
    }
    Value::String(raw.to_string())
}

fn placeholder_condition(index: usize) -> Condition {
    Condition::equals(
        format!("condition_{}", index),
        format!("value_{}", index),
    )
}
