//! Declarative tool parameter schemas.
//!
//! A [`ParamSchema`] is a static table of parameters. The same table renders
//! the JSON Schema advertised on `tools/list` and validates the arguments of
//! `tools/call`, so the two cannot drift apart.

use rmcp::model::JsonObject;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    StringArray,
}

/// A single named parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub param_type: ParamType,
    pub description: &'static str,
    pub required: bool,
    /// Allowed values, if the parameter is an enumeration.
    pub allowed: Option<&'static [&'static str]>,
}

impl ParamSpec {
    /// A required parameter with no value constraint.
    pub const fn required(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            param_type,
            description,
            required: true,
            allowed: None,
        }
    }

    /// An optional parameter with no value constraint.
    pub const fn optional(name: &'static str, param_type: ParamType, description: &'static str) -> Self {
        Self {
            name,
            param_type,
            description,
            required: false,
            allowed: None,
        }
    }

    /// Restrict the parameter to a fixed set of values.
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    fn to_json(self) -> Value {
        let mut property = match self.param_type {
            ParamType::String => json!({ "type": "string" }),
            ParamType::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        };
        property["description"] = json!(self.description);
        if let Some(allowed) = self.allowed {
            property["enum"] = json!(allowed);
        }
        property
    }
}

/// Ways a set of arguments can violate a [`ParamSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("Missing required parameter: {0}")]
    Missing(&'static str),

    #[error("Unsupported {name}: {value}")]
    NotAllowed { name: &'static str, value: String },
}

/// The full parameter table of a tool.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema {
    params: &'static [ParamSpec],
}

impl ParamSchema {
    pub const fn new(params: &'static [ParamSpec]) -> Self {
        Self { params }
    }

    /// Names of the required parameters, in declaration order.
    pub fn required(&self) -> Vec<&'static str> {
        self.params.iter().filter(|p| p.required).map(|p| p.name).collect()
    }

    /// Render as a JSON Schema object.
    pub fn to_json_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(self.required()));
        schema
    }

    /// Check enumeration constraints, then required presence.
    ///
    /// An out-of-range value is reported even when other required
    /// parameters are missing. Value types are left to deserialization.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), SchemaViolation> {
        for param in self.params {
            let (Some(allowed), Some(value)) = (param.allowed, present(arguments, param.name))
            else {
                continue;
            };

            if !value.as_str().is_some_and(|v| allowed.contains(&v)) {
                return Err(SchemaViolation::NotAllowed {
                    name: param.name,
                    value: value.as_str().map(String::from).unwrap_or_else(|| value.to_string()),
                });
            }
        }

        match self
            .params
            .iter()
            .find(|p| p.required && present(arguments, p.name).is_none())
        {
            Some(param) => Err(SchemaViolation::Missing(param.name)),
            None => Ok(()),
        }
    }
}

fn present<'a>(arguments: &'a JsonObject, name: &str) -> Option<&'a Value> {
    arguments.get(name).filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: &[ParamSpec] = &[
        ParamSpec::required("items", ParamType::StringArray, "Things"),
        ParamSpec::required("mode", ParamType::String, "Mode").one_of(&["fast", "slow"]),
        ParamSpec::optional("note", ParamType::String, "A note"),
    ];

    const SCHEMA: ParamSchema = ParamSchema::new(PARAMS);

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_json_schema_shape() {
        let schema = SCHEMA.to_json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["items", "mode"]));
        assert_eq!(schema["properties"]["items"]["items"]["type"], "string");
        assert_eq!(schema["properties"]["mode"]["enum"], json!(["fast", "slow"]));
        assert!(schema["properties"]["note"].get("enum").is_none());
    }

    #[test]
    fn test_validate_accepts_allowed_value() {
        let result = SCHEMA.validate(&args(json!({ "items": [], "mode": "slow" })));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_value() {
        let err = SCHEMA
            .validate(&args(json!({ "items": [], "mode": "medium" })))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported mode: medium");
    }

    #[test]
    fn test_validate_rejects_non_string_enum_value() {
        let err = SCHEMA
            .validate(&args(json!({ "items": [], "mode": 3 })))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported mode: 3");
    }

    #[test]
    fn test_validate_reports_missing() {
        let err = SCHEMA.validate(&args(json!({ "mode": "fast" }))).unwrap_err();
        assert_eq!(err, SchemaViolation::Missing("items"));
    }

    #[test]
    fn test_enum_checked_before_required() {
        let err = SCHEMA.validate(&args(json!({ "mode": "medium" }))).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported mode: medium");
    }

    #[test]
    fn test_required_null_is_missing() {
        let err = SCHEMA
            .validate(&args(json!({ "items": null, "mode": "fast" })))
            .unwrap_err();
        assert_eq!(err, SchemaViolation::Missing("items"));
    }

    #[test]
    fn test_optional_may_be_null() {
        let result = SCHEMA.validate(&args(json!({ "items": ["a"], "mode": "fast", "note": null })));
        assert!(result.is_ok());
    }
}
