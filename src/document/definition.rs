use super::component::Component;
use super::condition::Condition;
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

/// The complete, canonical definition of a form: its pages and the
/// navigation graph embedded in them.
///
/// Pages form a directed graph through `next_page` and `branches` targets.
/// Cycles are permitted by design (a "retry" page may point back to an
/// earlier page) and are never treated as errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormDocument {
    pub title: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl FormDocument {
    /// Parses a document from its JSON wire representation.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))
    }

    /// Serializes the document back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}

/// One page of the form.
///
/// A page carries at most one of two navigation strategies: a single
/// unconditional `next_page`, or a list of mutually exclusive `branches`.
/// Both absent marks a terminal page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub route: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Branch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_end_page: Option<bool>,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            route: route.into(),
            layout: None,
            components: Vec::new(),
            next_page: None,
            branches: None,
            is_end_page: None,
        }
    }

    /// All navigation targets leaving this page, in declaration order.
    pub fn navigation_targets(&self) -> Vec<&str> {
        let mut targets = Vec::new();
        if let Some(next) = &self.next_page {
            targets.push(next.as_str());
        }
        if let Some(branches) = &self.branches {
            targets.extend(branches.iter().map(|b| b.next_page.as_str()));
        }
        targets
    }

    /// Whether any outgoing reference of this page targets `page_id`.
    pub fn references(&self, page_id: &str) -> bool {
        self.navigation_targets().contains(&page_id)
    }
}

/// A conditional navigation edge: when `condition` holds for the submitted
/// data, the form continues at `next_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub condition: Condition,
    pub next_page: String,
}

impl Branch {
    pub fn new(condition: Condition, next_page: impl Into<String>) -> Self {
        Self {
            condition,
            next_page: next_page.into(),
        }
    }
}
