use super::collect_data_components;
use crate::document::{
    ArrayComponent, ChoiceComponent, Component, InputComponent, InputKind, ValidationRules,
};
use serde_json::{Map, Value, json};

/// Maps one data-bearing component to its property schema. Section, text,
/// and button components are transparent or display-only and return `None`.
pub(super) fn property_schema(component: &Component) -> Option<Value> {
    match component {
        Component::Input(c) => Some(input_schema(c)),
        Component::Textarea(c) => {
            let mut schema = json!({ "type": "string" });
            apply_string_bounds(&mut schema, c.validation.as_ref());
            Some(schema)
        }
        Component::Checkbox(_) => Some(json!({ "type": "boolean" })),
        Component::Radio(c) | Component::Select(c) => Some(choice_schema(c)),
        Component::Date(_) => Some(json!({ "type": "string", "format": "date" })),
        Component::Array(c) => Some(array_schema(c)),
        Component::Section(_) | Component::Text(_) | Component::Button(_) => None,
    }
}

fn input_schema(component: &InputComponent) -> Value {
    let validation = component.validation.as_ref();
    match component.input_type {
        InputKind::Email => json!({ "type": "string", "format": "email" }),
        InputKind::Url => json!({ "type": "string", "format": "uri" }),
        InputKind::Password => json!({ "type": "string", "format": "password" }),
        InputKind::Number => {
            let mut schema = json!({ "type": "number" });
            if let Some(rules) = validation {
                if let Some(min) = rules.minimum {
                    schema["minimum"] = json!(min);
                }
                if let Some(max) = rules.maximum {
                    schema["maximum"] = json!(max);
                }
            }
            schema
        }
        InputKind::Tel => {
            let mut schema = json!({ "type": "string" });
            if let Some(pattern) = validation.and_then(|v| v.pattern.as_deref()) {
                schema["pattern"] = json!(pattern);
            }
            schema
        }
        InputKind::Text => {
            let mut schema = json!({ "type": "string" });
            apply_string_bounds(&mut schema, validation);
            schema
        }
    }
}

/// Radio/select become string enums. Enum properties must never carry
/// length or pattern constraints; the option list alone defines validity.
fn choice_schema(component: &ChoiceComponent) -> Value {
    let values: Vec<&str> = component.options.iter().map(|o| o.value.as_str()).collect();
    let names: Vec<&str> = component.options.iter().map(|o| o.label.as_str()).collect();
    json!({
        "type": "string",
        "enum": values,
        "enumNames": names,
    })
}

/// Arrays flatten into a nested object schema built from their item
/// components, with the same rules applied recursively.
fn array_schema(component: &ArrayComponent) -> Value {
    let mut items = Vec::new();
    collect_data_components(&component.array_items, &mut items);

    let mut item_properties = Map::new();
    let mut item_required: Vec<String> = Vec::new();
    for item in items {
        if let Some(schema) = property_schema(item) {
            item_properties.insert(item.id().to_string(), schema);
        }
        if item.validation().is_some_and(|v| v.required) && item.visibility_conditions().is_empty()
        {
            item_required.push(item.id().to_string());
        }
    }
    item_required.sort();

    json!({
        "type": "object",
        "properties": item_properties,
        "required": item_required,
        "additionalProperties": false,
    })
}

fn apply_string_bounds(schema: &mut Value, validation: Option<&ValidationRules>) {
    let Some(rules) = validation else { return };
    if let Some(min) = rules.min_length {
        schema["minLength"] = json!(min);
    }
    if let Some(max) = rules.max_length {
        schema["maxLength"] = json!(max);
    }
    if let Some(pattern) = &rules.pattern {
        schema["pattern"] = json!(pattern);
    }
}
