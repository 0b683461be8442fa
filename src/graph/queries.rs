use crate::document::{FormDocument, Page};

/// Looks up a page by id. O(pages).
pub fn page_by_id<'d>(document: &'d FormDocument, id: &str) -> Option<&'d Page> {
    document.pages.iter().find(|p| p.id == id)
}

/// All page ids in declaration order.
pub fn all_page_ids(document: &FormDocument) -> Vec<&str> {
    document.pages.iter().map(|p| p.id.as_str()).collect()
}

pub fn page_exists(document: &FormDocument, id: &str) -> bool {
    document.pages.iter().any(|p| p.id == id)
}

/// Pages whose `next_page` or any branch targets `target`.
pub fn pages_referencing<'d>(document: &'d FormDocument, target: &str) -> Vec<&'d Page> {
    document
        .pages
        .iter()
        .filter(|p| p.references(target))
        .collect()
}
