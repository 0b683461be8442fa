use crate::document::FormDocument;
use itertools::Itertools;

/// The outcome of structural validation. Problems are reported as data for
/// the caller to surface, never thrown: errors block the document from
/// being considered consistent, warnings do not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Checks the structural integrity of a document.
///
/// Verified, in order: a title is present, `pages` is non-empty, every
/// page carries an id, title, and route, page ids are unique, every
/// `next_page` and branch target references an existing page, and every
/// branch condition names a field. Pages without components produce a
/// warning only. Cycles in the navigation graph are intentional (retry
/// loops) and are never flagged.
pub fn validate(document: &FormDocument) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if document.title.trim().is_empty() {
        errors.push("Document has no title".to_string());
    }
    if document.pages.is_empty() {
        errors.push("Document has no pages".to_string());
    }

    for page in &document.pages {
        if page.id.trim().is_empty() {
            errors.push(format!("Page '{}' is missing an id", page.title));
        }
        if page.title.trim().is_empty() {
            errors.push(format!("Page '{}' is missing a title", page.id));
        }
        if page.route.trim().is_empty() {
            errors.push(format!("Page '{}' is missing a route", page.id));
        }
    }

    for duplicate in document
        .pages
        .iter()
        .map(|p| p.id.as_str())
        .duplicates()
    {
        errors.push(format!("Duplicate page id '{}'", duplicate));
    }

    for page in &document.pages {
        if let Some(next) = &page.next_page {
            if !super::page_exists(document, next) {
                errors.push(format!(
                    "Page '{}' navigates to non-existent page '{}'",
                    page.id, next
                ));
            }
        }
        for branch in page.branches.as_deref().unwrap_or_default() {
            if !super::page_exists(document, &branch.next_page) {
                errors.push(format!(
                    "Page '{}' has a branch targeting non-existent page '{}'",
                    page.id, branch.next_page
                ));
            }
            if branch.condition.field.trim().is_empty() {
                errors.push(format!(
                    "Page '{}' has a branch condition with an empty field",
                    page.id
                ));
            }
        }
        if page.components.is_empty() {
            warnings.push(format!("Page '{}' has no components", page.id));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
