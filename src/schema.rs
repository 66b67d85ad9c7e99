//! Declarative block schemas.
//!
//! Every block publishes a [`BlockSpec`] describing the wrapped service and
//! operation, its input fields and the output event it emits. The runner and
//! external tooling consume these as JSON, so the serialized form is part of
//! the contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The AWS services this crate ships blocks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Service {
    Rds,
    RedshiftData,
    SecretsManager,
    Ssm,
}

impl Service {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Rds => "rds",
            Service::RedshiftData => "redshift-data",
            Service::SecretsManager => "secrets-manager",
            Service::Ssm => "ssm",
        }
    }
}

/// Value shape accepted by a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Integer,
    Number,
    Bool,
    /// A list of strings.
    TextList,
    /// A list of `{key, value}` objects (tags, SQL parameters).
    KeyValueList,
    /// Raw JSON passed through as-is.
    Json,
}

/// A single input field of a block schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSpec {
    fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            default: None,
            description: None,
        }
    }

    #[must_use]
    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    #[must_use]
    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    #[must_use]
    pub fn number(name: &str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    #[must_use]
    pub fn bool(name: &str) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    #[must_use]
    pub fn text_list(name: &str) -> Self {
        Self::new(name, FieldKind::TextList)
    }

    #[must_use]
    pub fn key_values(name: &str) -> Self {
        Self::new(name, FieldKind::KeyValueList)
    }

    #[must_use]
    pub fn json(name: &str) -> Self {
        Self::new(name, FieldKind::Json)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// The output event a block emits on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Event name; always the block name.
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Declarative description of one block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockSpec {
    pub name: String,
    pub service: Service,
    /// SDK command the block wraps, e.g. `CopyDBSnapshot`.
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Credential/region wiring shared by every block.
    pub connection: Vec<FieldSpec>,
    pub inputs: Vec<FieldSpec>,
    pub output: OutputSpec,
}

impl BlockSpec {
    #[must_use]
    pub fn new(name: &str, service: Service, operation: &str) -> Self {
        Self {
            name: name.to_string(),
            service,
            operation: operation.to_string(),
            description: None,
            connection: connection_fields(),
            inputs: Vec::new(),
            output: OutputSpec {
                event: name.to_string(),
                description: None,
            },
        }
    }

    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn input(mut self, field: FieldSpec) -> Self {
        self.inputs.push(field);
        self
    }

    #[must_use]
    pub fn emits(mut self, description: &str) -> Self {
        self.output.description = Some(description.to_string());
        self
    }

    /// Overlay schema defaults onto an invocation's input object.
    ///
    /// A `null` or missing input payload becomes an empty object; explicit
    /// values always win over defaults.
    #[must_use]
    pub fn apply_defaults(&self, input: &Value) -> Value {
        let mut object = match input {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        for field in &self.inputs {
            if let Some(default) = &field.default {
                let missing = matches!(object.get(&field.name), None | Some(Value::Null));
                if missing {
                    object.insert(field.name.clone(), default.clone());
                }
            }
        }
        Value::Object(object)
    }
}

/// Connection inputs shared by every block schema.
#[must_use]
pub fn connection_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("region").describe("AWS region to call, e.g. us-east-1."),
        FieldSpec::text("access_key_id")
            .describe("Static access key id; leave unset to use the ambient credential chain."),
        FieldSpec::text("secret_access_key").describe("Static secret access key."),
        FieldSpec::text("session_token").describe("Session token for temporary credentials."),
        FieldSpec::text("endpoint_url").describe("Custom endpoint, e.g. a local AWS stack."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_kind_serializes_kebab_case() {
        assert_eq!(serde_json::to_value(FieldKind::Text).unwrap(), json!("text"));
        assert_eq!(
            serde_json::to_value(FieldKind::KeyValueList).unwrap(),
            json!("key-value-list")
        );
        let kind: FieldKind = serde_json::from_value(json!("text-list")).unwrap();
        assert_eq!(kind, FieldKind::TextList);
    }

    #[test]
    fn spec_carries_connection_section_and_event_name() {
        let spec = BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter")
            .input(FieldSpec::text("name").required());
        assert_eq!(spec.output.event, "aws.ssm.get_parameter");
        assert!(spec.connection.iter().any(|f| f.name == "region"));
        assert!(spec.connection.iter().any(|f| f.name == "endpoint_url"));
    }

    #[test]
    fn apply_defaults_fills_missing_and_null_fields_only() {
        let spec = BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter")
            .input(FieldSpec::bool("with_decryption").with_default(json!(false)))
            .input(FieldSpec::text("name").required());

        let input = json!({"name": "/app/db", "with_decryption": null});
        let merged = spec.apply_defaults(&input);
        assert_eq!(merged["with_decryption"], json!(false));
        assert_eq!(merged["name"], json!("/app/db"));

        let merged = spec.apply_defaults(&Value::Null);
        assert_eq!(merged["with_decryption"], json!(false));
        assert!(merged.get("name").is_none());
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let spec = BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter")
            .input(FieldSpec::bool("with_decryption").with_default(json!(false)));
        let merged = spec.apply_defaults(&json!({"with_decryption": true}));
        assert_eq!(merged["with_decryption"], json!(true));
    }
}
