use super::collect_data_components;
use crate::document::{Branch, ComparisonOp, Condition, FormDocument};
use ahash::AHashSet;
use serde_json::{Map, Value, json};

/// The outcome of analyzing every branching page of a document.
pub(super) struct BranchAnalysis {
    /// `allOf` entries realizing "exactly these fields are allowed under
    /// this branch" for every discriminator value.
    pub rules: Vec<Value>,
    /// Every field that is only reachable by taking some branch. These are
    /// excluded from the top-level `required` list; their requirement is
    /// expressed by the rules above instead.
    pub conditional_fields: AHashSet<String>,
}

/// Walks every page with branch navigation and derives conditional rules.
///
/// Rules are only emitted when all of a page's branch conditions test `==`
/// against one shared discriminator field. Pages with mixed operators or
/// fields still navigate correctly but contribute no schema rules; the
/// compiler stays total.
pub(super) fn analyze_branches(document: &FormDocument) -> BranchAnalysis {
    let mut rules = Vec::new();
    let mut conditional_fields = AHashSet::new();

    for page in &document.pages {
        let Some(branches) = page.branches.as_deref() else {
            continue;
        };
        let Some(discriminator) = equality_discriminator(branches) else {
            continue;
        };

        // Fields on the branching page itself are answered before the
        // branch is taken; they never belong to any branch's reach. This
        // keeps a retry loop from gating its own discriminator.
        let mut own_fields = Vec::new();
        collect_data_components(&page.components, &mut own_fields);
        let own_ids: AHashSet<&str> = own_fields.iter().map(|c| c.id()).collect();

        // Per-branch transitive field reach, cycle-guarded. Retry loops
        // pointing back up the graph terminate on the visited set.
        let reach: Vec<AHashSet<String>> = branches
            .iter()
            .map(|b| {
                let mut fields = reachable_fields(document, &b.next_page);
                fields.retain(|f| !own_ids.contains(f.as_str()));
                fields
            })
            .collect();

        for (index, branch) in branches.iter().enumerate() {
            let mut elsewhere: AHashSet<&str> = AHashSet::new();
            for (other_index, other_reach) in reach.iter().enumerate() {
                if other_index != index {
                    elsewhere.extend(other_reach.iter().map(String::as_str));
                }
            }

            let mut required_here: Vec<&str> = reach[index]
                .iter()
                .filter(|field| is_required_field(document, field))
                .map(String::as_str)
                .collect();
            required_here.sort_unstable();

            let mut forbidden: Vec<&str> = elsewhere
                .iter()
                .filter(|field| !reach[index].contains(**field))
                .copied()
                .collect();
            forbidden.sort_unstable();

            if !required_here.is_empty() {
                rules.push(json!({
                    "if": discriminator_clause(discriminator, &branch.condition.value),
                    "then": { "required": required_here },
                }));
            }
            if !forbidden.is_empty() {
                let any_of: Vec<Value> =
                    forbidden.iter().map(|f| json!({ "required": [f] })).collect();
                rules.push(json!({
                    "if": discriminator_clause(discriminator, &branch.condition.value),
                    "then": { "not": { "anyOf": any_of } },
                }));
            }
        }

        for branch_reach in &reach {
            conditional_fields.extend(branch_reach.iter().cloned());
        }
    }

    BranchAnalysis {
        rules,
        conditional_fields,
    }
}

/// Conditional requirement for visibility-gated fields: when all of a
/// component's visibility conditions hold, the field is required.
///
/// Note the deliberate asymmetry against branch rules: no "forbidden when
/// hidden" half is emitted here. Visibility conditions are treated as
/// softer hints than branch navigation.
pub(super) fn visibility_rules(document: &FormDocument) -> Vec<Value> {
    let mut rules = Vec::new();
    for component in super::document_data_components(document) {
        let conditions = component.visibility_conditions();
        if conditions.is_empty() || !component.validation().is_some_and(|v| v.required) {
            continue;
        }
        rules.push(json!({
            "if": conditions_clause(conditions),
            "then": { "required": [component.id()] },
        }));
    }
    rules
}

/// Returns the shared field name if every branch condition is an equality
/// test on the same field.
fn equality_discriminator(branches: &[Branch]) -> Option<&str> {
    let first = branches.first()?;
    if first.condition.operator != ComparisonOp::Eq {
        return None;
    }
    let field = first.condition.field.as_str();
    branches
        .iter()
        .all(|b| b.condition.operator == ComparisonOp::Eq && b.condition.field == field)
        .then_some(field)
}

/// All data-bearing field ids transitively reachable from `start` through
/// `next_page` and branch targets. A visited set makes intentional cycles
/// terminate.
fn reachable_fields(document: &FormDocument, start: &str) -> AHashSet<String> {
    let mut fields = AHashSet::new();
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut stack = vec![start];

    while let Some(page_id) = stack.pop() {
        if !visited.insert(page_id) {
            continue;
        }
        let Some(page) = document.pages.iter().find(|p| p.id == page_id) else {
            continue;
        };
        let mut components = Vec::new();
        collect_data_components(&page.components, &mut components);
        fields.extend(components.iter().map(|c| c.id().to_string()));
        stack.extend(page.navigation_targets());
    }
    fields
}

/// A field participates in a branch `required` list only when it is
/// required and not additionally gated by visibility conditions; visibility
/// gates keep their own rules.
fn is_required_field(document: &FormDocument, field_id: &str) -> bool {
    super::document_data_components(document)
        .into_iter()
        .find(|c| c.id() == field_id)
        .is_some_and(|c| {
            c.visibility_conditions().is_empty()
                && c.validation().is_some_and(|v| v.required)
        })
}

/// `if` clause matching one equality on the discriminator. Requiring the
/// discriminator itself keeps the rule from firing vacuously when it is
/// absent from the instance.
fn discriminator_clause(field: &str, value: &Value) -> Value {
    let mut properties = Map::new();
    properties.insert(field.to_string(), json!({ "const": value }));
    json!({ "properties": properties, "required": [field] })
}

/// `if` clause matching a conjunction of visibility conditions.
fn conditions_clause(conditions: &[Condition]) -> Value {
    let mut properties = Map::new();
    let mut required: Vec<&str> = Vec::new();
    for condition in conditions {
        properties.insert(condition.field.clone(), operator_schema(condition));
        required.push(condition.field.as_str());
    }
    required.sort_unstable();
    required.dedup();
    json!({ "properties": properties, "required": required })
}

/// Encodes one comparison operator as a subschema over the tested field.
fn operator_schema(condition: &Condition) -> Value {
    let value = &condition.value;
    match condition.operator {
        ComparisonOp::Eq => json!({ "const": value }),
        ComparisonOp::Ne => json!({ "not": { "const": value } }),
        ComparisonOp::Gt => json!({ "exclusiveMinimum": value }),
        ComparisonOp::Lt => json!({ "exclusiveMaximum": value }),
        ComparisonOp::Ge => json!({ "minimum": value }),
        ComparisonOp::Le => json!({ "maximum": value }),
    }
}
