//! Typed accessors over a block's JSON input payload.
//!
//! `null` is treated the same as absent, matching how the runner fills unset
//! schema fields. Type mismatches and missing required fields surface as
//! [`BlockError::InvalidInput`] naming the offending field.

use serde_json::Value;
use std::collections::HashMap;

use crate::errors::BlockError;

pub struct Inputs<'a> {
    value: &'a Value,
}

impl<'a> Inputs<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        match self.value.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn mismatch(name: &str, expected: &str) -> BlockError {
        BlockError::InvalidInput(format!("field `{name}` must be {expected}"))
    }

    fn missing(name: &str) -> BlockError {
        BlockError::InvalidInput(format!("missing required field `{name}`"))
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` if the field is absent or not a string.
    pub fn required_str(&self, name: &str) -> Result<String, BlockError> {
        self.opt_str(name)?.ok_or_else(|| Self::missing(name))
    }

    pub fn opt_str(&self, name: &str) -> Result<Option<String>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(Self::mismatch(name, "a string")),
        }
    }

    pub fn opt_bool(&self, name: &str) -> Result<Option<bool>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(Self::mismatch(name, "a boolean")),
        }
    }

    pub fn opt_i64(&self, name: &str) -> Result<Option<i64>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_i64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(name, "an integer")),
        }
    }

    pub fn opt_i32(&self, name: &str) -> Result<Option<i32>, BlockError> {
        match self.opt_i64(name)? {
            None => Ok(None),
            Some(wide) => i32::try_from(wide)
                .map(Some)
                .map_err(|_| Self::mismatch(name, "a 32-bit integer")),
        }
    }

    pub fn opt_f64(&self, name: &str) -> Result<Option<f64>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(name, "a number")),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` if the field is absent or not a string list.
    pub fn required_str_list(&self, name: &str) -> Result<Vec<String>, BlockError> {
        self.opt_str_list(name)?.ok_or_else(|| Self::missing(name))
    }

    pub fn opt_str_list(&self, name: &str) -> Result<Option<Vec<String>>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(Self::mismatch(name, "a list of strings")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(Self::mismatch(name, "a list of strings")),
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidInput` if the field is absent or malformed.
    pub fn required_key_values(&self, name: &str) -> Result<Vec<(String, String)>, BlockError> {
        self.opt_key_values(name)?.ok_or_else(|| Self::missing(name))
    }

    /// Key/value pairs, accepted either as `[{"key": .., "value": ..}]` or as
    /// a plain `{"key": "value"}` object.
    pub fn opt_key_values(&self, name: &str) -> Result<Option<Vec<(String, String)>>, BlockError> {
        let expected = "a list of {key, value} objects or a string map";
        match self.get(name) {
            None => Ok(None),
            Some(Value::Object(map)) => map
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key.clone(), s.clone())),
                    _ => Err(Self::mismatch(name, expected)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    let key = item.get("key").and_then(Value::as_str);
                    let value = item.get("value").and_then(Value::as_str);
                    match (key, value) {
                        (Some(key), Some(value)) => Ok((key.to_string(), value.to_string())),
                        _ => Err(Self::mismatch(name, expected)),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(Self::mismatch(name, expected)),
        }
    }

    /// A `{"name": ["value", ..]}` map, the shape SSM command parameters use.
    pub fn opt_str_list_map(
        &self,
        name: &str,
    ) -> Result<Option<HashMap<String, Vec<String>>>, BlockError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|_| Self::mismatch(name, "an object of string lists")),
        }
    }

    /// Raw JSON passthrough for `FieldKind::Json` inputs.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_counts_as_absent() {
        let value = json!({"name": null});
        let inputs = Inputs::new(&value);
        assert_eq!(inputs.opt_str("name").unwrap(), None);
        assert!(matches!(
            inputs.required_str("name"),
            Err(BlockError::InvalidInput(_))
        ));
    }

    #[test]
    fn mismatched_types_name_the_field() {
        let value = json!({"count": "three"});
        let inputs = Inputs::new(&value);
        let err = inputs.opt_i32("count").unwrap_err();
        assert!(err.to_string().contains("`count`"));
    }

    #[test]
    fn narrows_integers_to_i32() {
        let value = json!({"small": 20, "wide": 9_000_000_000_i64});
        let inputs = Inputs::new(&value);
        assert_eq!(inputs.opt_i32("small").unwrap(), Some(20));
        assert!(inputs.opt_i32("wide").is_err());
        assert_eq!(inputs.opt_i64("wide").unwrap(), Some(9_000_000_000));
        assert_eq!(inputs.opt_f64("small").unwrap(), Some(20.0));
    }

    #[test]
    fn key_values_accept_both_shapes() {
        let value = json!({
            "as_map": {"env": "prod"},
            "as_list": [{"key": "env", "value": "prod"}],
        });
        let inputs = Inputs::new(&value);
        let expected = vec![("env".to_string(), "prod".to_string())];
        assert_eq!(inputs.opt_key_values("as_map").unwrap(), Some(expected.clone()));
        assert_eq!(inputs.opt_key_values("as_list").unwrap(), Some(expected));
    }

    #[test]
    fn string_list_rejects_mixed_entries() {
        let value = json!({"names": ["a", 1]});
        let inputs = Inputs::new(&value);
        assert!(inputs.opt_str_list("names").is_err());
    }

    #[test]
    fn string_list_map_parses_command_parameters() {
        let value = json!({"parameters": {"commands": ["uptime", "whoami"]}});
        let inputs = Inputs::new(&value);
        let map = inputs.opt_str_list_map("parameters").unwrap().unwrap();
        assert_eq!(map["commands"], vec!["uptime", "whoami"]);
    }
}
