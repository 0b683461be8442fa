//! # Formflow - Declarative Form Compilation and Synchronization Engine
//!
//! **Formflow** turns a declarative form document (pages, fields, branching
//! navigation, visibility rules) into a JSON Schema that validates submitted
//! data against the form's conditional logic, and provides the mechanisms to
//! mutate that document safely: structural patch operations and bidirectional
//! sync with a visual page-flow graph.
//!
//! ## Core Workflow
//!
//! Three representations of the same form stay reconcilable:
//!
//! 1.  **Form Document**: the canonical declarative model ([`document::FormDocument`]),
//!     produced whole by an external generator and then replaced, never mutated
//!     in place, by every transform in this crate.
//! 2.  **Flow Graph**: a node/edge view edited visually; [`graph::sync_connections`]
//!     rewrites the document's navigation fields from an edge list, and
//!     [`graph::validate`] checks structural integrity without ever flagging
//!     intentional cycles (retry loops).
//! 3.  **JSON Schema**: [`schema::SchemaCompiler`] derives a draft 2020-12
//!     schema whose `allOf` conditional rules enforce branch- and
//!     visibility-gated requirements.
//!
//! ## Quick Start
//!
//! ```rust
//! use formflow::prelude::*;
//! use serde_json::json;
//!
//! // A two-page form: a question page branching on an answer, and an end page.
//! let mut start = Page::new("start", "Start", "/start");
//! start.components.push(Component::Radio(ChoiceComponent {
//!     id: "answer".to_string(),
//!     label: Some("Proceed?".to_string()),
//!     options: vec![ChoiceOption::new("Yes", "yes"), ChoiceOption::new("No", "no")],
//!     validation: Some(ValidationRules::required()),
//!     visibility_conditions: vec![],
//! }));
//! start.branches = Some(vec![
//!     Branch::new(Condition::equals("answer", "yes"), "end"),
//!     Branch::new(Condition::equals("answer", "no"), "start"), // retry loop
//! ]);
//! let mut end = Page::new("end", "Done", "/done");
//! end.is_end_page = Some(true);
//!
//! let document = FormDocument {
//!     title: "Example".to_string(),
//!     pages: vec![start, end],
//! };
//!
//! // Validate the structure, then compile the schema.
//! let report = validate(&document);
//! assert!(report.is_valid);
//!
//! let schema = SchemaCompiler::new(&document).compile();
//! assert_eq!(schema["type"], "object");
//!
//! // Apply a structural patch produced by an external editor.
//! let ops = vec![PatchOp::replace("title", json!("Renamed example"))];
//! let patched = patch::apply(&document, &ops).unwrap();
//! assert_eq!(patched.title, "Renamed example");
//! ```
//!
//! All transforms are pure `Document -> Document` functions; the enclosing
//! session owns the current value and must serialize edits to one document.

pub mod document;
pub mod error;
pub mod graph;
pub mod patch;
pub mod prelude;
pub mod schema;
