//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so downstream code
//! can `use formflow::prelude::*;` instead of importing each item
//! individually.

// Document model
pub use crate::document::{
    ArrayComponent, Branch, ButtonComponent, CheckboxComponent, ChoiceComponent, ChoiceOption,
    ComparisonOp, Component, Condition, DateComponent, FormDocument, InputComponent, InputKind,
    Page, SectionComponent, TextComponent, TextareaComponent, ValidationRules,
};

// Schema compilation
pub use crate::schema::{SchemaCompiler, compile_schema};

// Patching
pub use crate::patch::{self, PatchList, PatchOp, PatchOpKind};

// Graph synchronization and validation
pub use crate::graph::{
    FlowEdge, ValidationReport, add_page, all_page_ids, page_by_id, page_exists,
    pages_referencing, remove_page, sync_connections, validate,
};

// Error types
pub use crate::error::{DocumentError, PatchError};
