//! Tests for flow-graph synchronization, structural validation, and the
//! read-only graph queries.
mod common;
use common::*;
use formflow::graph::parse_condition_label;
use formflow::prelude::*;
use serde_json::json;

fn edge(id: &str, source: &str, target: &str, label: Option<&str>) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        edge_type: "smoothstep".to_string(),
        label: label.map(str::to_string),
    }
}

#[test]
fn test_sync_zero_edges_clears_navigation() {
    let document = create_health_check_document();
    let synced = sync_connections(&document, &[]);
    for page in &synced.pages {
        assert_eq!(page.next_page, None);
        assert_eq!(page.branches, None);
    }
}

#[test]
fn test_sync_single_edge_sets_next_page() {
    let document = create_health_check_document();
    let edges = vec![edge("e1", "symptoms", "end", None)];
    let synced = sync_connections(&document, &edges);

    let symptoms = page_by_id(&synced, "symptoms").unwrap();
    assert_eq!(symptoms.next_page.as_deref(), Some("end"));
    assert_eq!(symptoms.branches, None);
}

#[test]
fn test_sync_multiple_edges_build_branches_in_order() {
    let document = create_health_check_document();
    let edges = create_health_check_edges();
    let synced = sync_connections(&document, &edges);

    let symptoms = page_by_id(&synced, "symptoms").unwrap();
    assert_eq!(symptoms.next_page, None);
    let branches = symptoms.branches.as_ref().unwrap();
    assert_eq!(branches.len(), 3);
    assert_eq!(branches[0].next_page, "details");
    assert_eq!(branches[0].condition, Condition::equals("symptomRadio", "fever"));
    assert_eq!(branches[1].condition, Condition::equals("symptomRadio", "cough"));
    assert_eq!(branches[2].next_page, "end");

    // The single details -> end edge collapses to nextPage.
    let details = page_by_id(&synced, "details").unwrap();
    assert_eq!(details.next_page.as_deref(), Some("end"));
    assert_eq!(details.branches, None);
}

#[test]
fn test_sync_synthesizes_placeholder_for_missing_label() {
    let document = create_health_check_document();
    let edges = vec![
        edge("e1", "symptoms", "details", Some("symptomRadio == fever")),
        edge("e2", "symptoms", "end", None),
    ];
    let synced = sync_connections(&document, &edges);

    let branches = page_by_id(&synced, "symptoms").unwrap().branches.as_ref().unwrap();
    assert_eq!(branches[1].condition, Condition::equals("condition_1", "value_1"));
}

#[test]
fn test_label_parsing_operators_and_values() {
    let cond = parse_condition_label("age >= 18").unwrap();
    assert_eq!(cond.field, "age");
    assert_eq!(cond.operator, ComparisonOp::Ge);
    assert_eq!(cond.value, json!(18.0));

    let cond = parse_condition_label("hasAllergies == true").unwrap();
    assert_eq!(cond.value, json!(true));

    let cond = parse_condition_label("favourite colour != deep blue").unwrap();
    assert_eq!(cond.field, "favourite colour");
    assert_eq!(cond.operator, ComparisonOp::Ne);
    assert_eq!(cond.value, json!("deep blue"));

    assert_eq!(parse_condition_label("no operator here"), None);
    assert_eq!(parse_condition_label("== dangling"), None);
    assert_eq!(parse_condition_label("field =="), None);
}

#[test]
fn test_add_page_appends_without_uniqueness_check() {
    let document = create_health_check_document();
    let duplicate = Page::new("symptoms", "Duplicate", "/dup");
    let updated = add_page(&document, duplicate);
    assert_eq!(updated.pages.len(), 4);

    // Uniqueness is the validator's job.
    let report = validate(&updated);
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("symptoms")));
}

#[test]
fn test_remove_page_scrubs_references() {
    let document = create_health_check_document();
    let updated = remove_page(&document, "details");

    assert!(!page_exists(&updated, "details"));
    for page in &updated.pages {
        assert_ne!(page.next_page.as_deref(), Some("details"));
        for branch in page.branches.as_deref().unwrap_or_default() {
            assert_ne!(branch.next_page, "details");
        }
    }

    // The scrub keeps the document referentially valid.
    assert!(validate(&updated).is_valid);
}

#[test]
fn test_remove_page_drops_emptied_branch_list() {
    let mut document = create_health_check_document();
    document.pages[0].branches = Some(vec![Branch::new(
        Condition::equals("symptomRadio", "fever"),
        "details",
    )]);
    let updated = remove_page(&document, "details");
    assert_eq!(page_by_id(&updated, "symptoms").unwrap().branches, None);
}

#[test]
fn test_validate_passes_consistent_document() {
    let document = create_health_check_document();
    let report = validate(&document);
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_validate_flags_missing_title_and_pages() {
    let report = validate(&FormDocument::default());
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("title")));
    assert!(report.errors.iter().any(|e| e.contains("pages")));
}

#[test]
fn test_validate_flags_missing_page_fields() {
    let mut document = create_health_check_document();
    document.pages[0].route = String::new();
    document.pages[1].title = String::new();

    let report = validate(&document);
    assert!(!report.is_valid);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("symptoms") && e.contains("route"))
    );
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("details") && e.contains("title"))
    );
}

#[test]
fn test_validate_flags_dangling_targets_naming_both_ends() {
    let mut document = create_health_check_document();
    document.pages[1].next_page = Some("ghost".to_string());

    let report = validate(&document);
    assert!(!report.is_valid);
    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("details") && e.contains("ghost"))
    );
}

#[test]
fn test_validate_flags_empty_branch_condition_field() {
    let mut document = create_health_check_document();
    if let Some(branches) = &mut document.pages[0].branches {
        branches[0].condition.field = String::new();
    }

    let report = validate(&document);
    assert!(!report.is_valid);
    assert!(report.errors.iter().any(|e| e.contains("empty field")));
}

#[test]
fn test_validate_warns_on_componentless_page() {
    let mut document = create_health_check_document();
    document.pages[2].components.clear();

    let report = validate(&document);
    assert!(report.is_valid);
    assert!(report.warnings.iter().any(|w| w.contains("end")));
}

#[test]
fn test_validate_never_flags_cycles() {
    let mut document = create_health_check_document();
    // Retry loop: end page points back to the start.
    document.pages[2].next_page = Some("symptoms".to_string());

    let report = validate(&document);
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_queries() {
    let document = create_health_check_document();

    assert_eq!(all_page_ids(&document), vec!["symptoms", "details", "end"]);
    assert!(page_exists(&document, "details"));
    assert!(!page_exists(&document, "ghost"));
    assert_eq!(page_by_id(&document, "end").unwrap().title, "Done");
    assert!(page_by_id(&document, "ghost").is_none());

    let referencing: Vec<&str> = pages_referencing(&document, "end")
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(referencing, vec!["symptoms", "details"]);
}
