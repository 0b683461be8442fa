use super::condition::Condition;
use serde::{Deserialize, Serialize};

/// A single element within a page, as a closed union over every component
/// kind the document format knows.
///
/// The data-bearing variants (`input`, `textarea`, `checkbox`, `radio`,
/// `select`, `date`, `array`) contribute a schema property keyed by their
/// component id. `section` is a transparent grouping that recurses into its
/// children; `text` and `button` are display-only and never produce schema
/// properties.
///
/// Keeping this a closed enum means every concern that dispatches on the
/// component kind (schema mapping, tree recursion, accessors) is a single
/// exhaustive `match`, so adding a variant is a compile-time exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Component {
    Input(InputComponent),
    Textarea(TextareaComponent),
    Checkbox(CheckboxComponent),
    Radio(ChoiceComponent),
    Select(ChoiceComponent),
    Date(DateComponent),
    Array(ArrayComponent),
    Section(SectionComponent),
    Text(TextComponent),
    Button(ButtonComponent),
}

impl Component {
    pub fn id(&self) -> &str {
        match self {
            Component::Input(c) => &c.id,
            Component::Textarea(c) => &c.id,
            Component::Checkbox(c) => &c.id,
            Component::Radio(c) | Component::Select(c) => &c.id,
            Component::Date(c) => &c.id,
            Component::Array(c) => &c.id,
            Component::Section(c) => &c.id,
            Component::Text(c) => &c.id,
            Component::Button(c) => &c.id,
        }
    }

    /// Whether this component contributes a property to the compiled schema.
    pub fn is_data_bearing(&self) -> bool {
        match self {
            Component::Input(_)
            | Component::Textarea(_)
            | Component::Checkbox(_)
            | Component::Radio(_)
            | Component::Select(_)
            | Component::Date(_)
            | Component::Array(_) => true,
            Component::Section(_) | Component::Text(_) | Component::Button(_) => false,
        }
    }

    pub fn validation(&self) -> Option<&ValidationRules> {
        match self {
            Component::Input(c) => c.validation.as_ref(),
            Component::Textarea(c) => c.validation.as_ref(),
            Component::Checkbox(c) => c.validation.as_ref(),
            Component::Radio(c) | Component::Select(c) => c.validation.as_ref(),
            Component::Date(c) => c.validation.as_ref(),
            Component::Array(c) => c.validation.as_ref(),
            Component::Section(_) | Component::Text(_) | Component::Button(_) => None,
        }
    }

    pub fn visibility_conditions(&self) -> &[Condition] {
        match self {
            Component::Input(c) => &c.visibility_conditions,
            Component::Textarea(c) => &c.visibility_conditions,
            Component::Checkbox(c) => &c.visibility_conditions,
            Component::Radio(c) | Component::Select(c) => &c.visibility_conditions,
            Component::Date(c) => &c.visibility_conditions,
            Component::Array(c) => &c.visibility_conditions,
            Component::Section(_) | Component::Text(_) | Component::Button(_) => &[],
        }
    }

    /// Child components for container variants, if any.
    pub fn children(&self) -> Option<&[Component]> {
        match self {
            Component::Section(c) => Some(&c.children),
            Component::Array(c) => Some(&c.array_items),
            _ => None,
        }
    }
}

/// The concrete input kind of an `input` component, driving its schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Number,
    Url,
    Tel,
    Password,
}

/// A free-form text input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub input_type: InputKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// A multi-line text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// A single boolean checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// A fixed-choice field; shared by the `radio` and `select` variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// One selectable option of a `radio` or `select` component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A date field, validated as an ISO 8601 date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// A repeated group of sub-components. `array_items` defines the shape of
/// one repeated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub array_items: Vec<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visibility_conditions: Vec<Condition>,
}

/// A transparent grouping of components. Sections never appear in the
/// compiled schema themselves; their children are lifted to the page level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

/// Display-only text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Display-only button (navigation/submit chrome).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonComponent {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Declarative constraints attached to a data-bearing component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ValidationRules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}
