//! Declared argument shapes, validated by one generic routine.
//!
//! Each tool declares its accepted fields once; the dispatcher runs
//! `ArgSchema::validate` before any upstream call is attempted. Undeclared
//! fields are ignored so callers can send newer shapes without breaking.

use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
}

impl FieldKind {
    fn matches(self, value: &JsonValue) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Boolean => value.is_boolean(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Ordered field declarations for one tool's arguments.
#[derive(Debug, Clone, Default)]
pub struct ArgSchema {
    fields: Vec<FieldSpec>,
}

impl ArgSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec { name, kind, required: true });
        self
    }

    pub fn optional(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec { name, kind, required: false });
        self
    }

    /// Check `args` field-by-field against the declared shape. `null` counts
    /// as an empty argument object. The error names every offending field.
    pub fn validate(&self, args: &JsonValue) -> Result<(), String> {
        let empty = serde_json::Map::new();
        let object = match args {
            JsonValue::Object(map) => map,
            JsonValue::Null => &empty,
            other => {
                return Err(format!(
                    "arguments must be a JSON object, got {}",
                    json_kind(other)
                ))
            }
        };

        let mut problems = Vec::new();
        for field in &self.fields {
            match object.get(field.name) {
                None if field.required => {
                    problems.push(format!("missing required field: {}", field.name));
                }
                None => {}
                Some(value) if !field.kind.matches(value) => {
                    problems.push(format!(
                        "field `{}` must be a {}",
                        field.name,
                        field.kind.label()
                    ));
                }
                Some(_) => {}
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
