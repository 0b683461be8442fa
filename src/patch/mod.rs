use crate::document::FormDocument;
use crate::error::PatchError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The supported structural edit operations. This is deliberately not full
/// JSON Patch: `move`, `copy`, and `test` are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOpKind {
    Add,
    Remove,
    Replace,
}

impl fmt::Display for PatchOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOpKind::Add => write!(f, "add"),
            PatchOpKind::Remove => write!(f, "remove"),
            PatchOpKind::Replace => write!(f, "replace"),
        }
    }
}

/// One structural edit. `path` is a `/`-delimited pointer into the
/// document's JSON representation; a segment of digits addresses an array
/// index, anything else an object key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOp {
    pub op: PatchOpKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOp {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOpKind::Add,
            path: path.into(),
            value: Some(value),
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOpKind::Replace,
            path: path.into(),
            value: Some(value),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOpKind::Remove,
            path: path.into(),
            value: None,
        }
    }
}

/// Wire normalization: external producers send either a single operation
/// object or an array of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PatchList {
    One(PatchOp),
    Many(Vec<PatchOp>),
}

impl PatchList {
    pub fn into_vec(self) -> Vec<PatchOp> {
        match self {
            PatchList::One(op) => vec![op],
            PatchList::Many(ops) => ops,
        }
    }
}

/// Applies `operations` in list order to a snapshot of `document`,
/// returning the new document. The input is never partially mutated: the
/// operations run against a serialized copy, and any failure aborts the
/// whole application with an error naming the offending operation.
pub fn apply(document: &FormDocument, operations: &[PatchOp]) -> Result<FormDocument, PatchError> {
    let mut root =
        serde_json::to_value(document).map_err(|e| PatchError::InvalidDocument(e.to_string()))?;

    for (op_index, operation) in operations.iter().enumerate() {
        apply_one(&mut root, operation, op_index)?;
    }

    serde_json::from_value(root).map_err(|e| PatchError::InvalidDocument(e.to_string()))
}

fn apply_one(root: &mut Value, operation: &PatchOp, op_index: usize) -> Result<(), PatchError> {
    let segments: Vec<&str> = operation
        .path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    let Some((terminal, parents)) = segments.split_last() else {
        return Err(PatchError::EmptyPath { op_index });
    };

    // Navigate to the parent of the terminal segment.
    let mut current = root;
    for segment in parents {
        current = descend(current, segment, op_index, &operation.path)?;
    }

    let value = || -> Result<Value, PatchError> {
        operation
            .value
            .clone()
            .map(sanitize)
            .ok_or(PatchError::MissingValue {
                op_index,
                op: operation.op.to_string(),
            })
    };

    match current {
        Value::Array(items) => {
            let index: usize =
                terminal
                    .parse()
                    .map_err(|_| PatchError::TypeMismatch {
                        op_index,
                        segment: terminal.to_string(),
                        found: "array".to_string(),
                    })?;
            match operation.op {
                // `add` on an array index inserts rather than overwrites;
                // inserting at `len` appends.
                PatchOpKind::Add => {
                    if index > items.len() {
                        return Err(PatchError::IndexOutOfRange {
                            op_index,
                            index,
                            len: items.len(),
                        });
                    }
                    items.insert(index, value()?);
                }
                PatchOpKind::Replace => {
                    let len = items.len();
                    let slot = items.get_mut(index).ok_or(PatchError::IndexOutOfRange {
                        op_index,
                        index,
                        len,
                    })?;
                    *slot = value()?;
                }
                PatchOpKind::Remove => {
                    if index >= items.len() {
                        return Err(PatchError::IndexOutOfRange {
                            op_index,
                            index,
                            len: items.len(),
                        });
                    }
                    items.remove(index);
                }
            }
        }
        Value::Object(map) => match operation.op {
            PatchOpKind::Add | PatchOpKind::Replace => {
                map.insert(terminal.to_string(), value()?);
            }
            PatchOpKind::Remove => {
                if map.remove(*terminal).is_none() {
                    return Err(PatchError::PathNotFound {
                        op_index,
                        path: operation.path.clone(),
                    });
                }
            }
        },
        other => {
            return Err(PatchError::TypeMismatch {
                op_index,
                segment: terminal.to_string(),
                found: json_type_name(other).to_string(),
            });
        }
    }
    Ok(())
}

/// One index/key dereference step.
fn descend<'v>(
    current: &'v mut Value,
    segment: &str,
    op_index: usize,
    path: &str,
) -> Result<&'v mut Value, PatchError> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        let index: usize = segment.parse().map_err(|_| PatchError::PathNotFound {
            op_index,
            path: path.to_string(),
        })?;
        match current {
            Value::Array(items) => {
                let len = items.len();
                items.get_mut(index).ok_or(PatchError::IndexOutOfRange {
                    op_index,
                    index,
                    len,
                })
            }
            other => Err(PatchError::TypeMismatch {
                op_index,
                segment: segment.to_string(),
                found: json_type_name(other).to_string(),
            }),
        }
    } else {
        match current {
            Value::Object(map) => map.get_mut(segment).ok_or_else(|| PatchError::PathNotFound {
                op_index,
                path: path.to_string(),
            }),
            other => Err(PatchError::TypeMismatch {
                op_index,
                segment: segment.to_string(),
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

/// Strips control characters from every string in a value so the patched
/// document always serializes to valid JSON. Removes code points below
/// 0x20 (keeping tab, newline, and carriage return) and 0x7F-0x9F,
/// recursing through nested objects and arrays.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_str(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (sanitize_str(&key), sanitize(inner)))
                .collect(),
        ),
        other => other,
    }
}

fn sanitize_str(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            let code = c as u32;
            if code < 0x20 {
                matches!(c, '\t' | '\n' | '\r')
            } else {
                !(0x7F..=0x9F).contains(&code)
            }
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
