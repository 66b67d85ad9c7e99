//! JSON mappers and input conversions for Secrets Manager shapes.

use aws_sdk_secretsmanager::primitives::Blob;
use aws_sdk_secretsmanager::types::{
    Filter, FilterNameStringType, RotationRulesType, SecretListEntry, Tag,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::blocks::convert::opt_iso8601;
use crate::errors::BlockError;

pub(crate) fn tag_to_value(tag: &Tag) -> Value {
    json!({
        "key": tag.key(),
        "value": tag.value(),
    })
}

pub(crate) fn tags_from_pairs(pairs: Vec<(String, String)>) -> Vec<Tag> {
    pairs
        .into_iter()
        .map(|(key, value)| Tag::builder().key(key).value(value).build())
        .collect()
}

/// Decode a base64 input field into a binary secret payload.
pub(crate) fn blob_from_base64(name: &str, encoded: &str) -> Result<Blob, BlockError> {
    STANDARD
        .decode(encoded)
        .map(Blob::new)
        .map_err(|_| BlockError::InvalidInput(format!("field `{name}` must be base64-encoded")))
}

#[derive(Deserialize)]
struct FilterInput {
    key: String,
    values: Vec<String>,
}

/// Parse a `[{key, values}]` JSON input into SDK list filters.
pub(crate) fn filters_from_json(value: Option<Value>) -> Result<Option<Vec<Filter>>, BlockError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let items: Vec<FilterInput> = serde_json::from_value(value).map_err(|e| {
        BlockError::InvalidInput(format!(
            "field `filters` must be a list of {{key, values}} objects: {e}"
        ))
    })?;
    let filters = items
        .into_iter()
        .map(|item| {
            Filter::builder()
                .key(FilterNameStringType::from(item.key.as_str()))
                .set_values(Some(item.values))
                .build()
        })
        .collect();
    Ok(Some(filters))
}

pub(crate) fn rotation_rules_to_value(rules: &RotationRulesType) -> Value {
    json!({
        "automatically_after_days": rules.automatically_after_days(),
        "duration": rules.duration(),
        "schedule_expression": rules.schedule_expression(),
    })
}

pub(crate) fn secret_list_entry_to_value(entry: &SecretListEntry) -> Value {
    json!({
        "arn": entry.arn(),
        "name": entry.name(),
        "description": entry.description(),
        "kms_key_id": entry.kms_key_id(),
        "rotation_enabled": entry.rotation_enabled(),
        "rotation_lambda_arn": entry.rotation_lambda_arn(),
        "rotation_rules": entry.rotation_rules().map(rotation_rules_to_value),
        "last_rotated_date": opt_iso8601(entry.last_rotated_date()),
        "last_changed_date": opt_iso8601(entry.last_changed_date()),
        "last_accessed_date": opt_iso8601(entry.last_accessed_date()),
        "deleted_date": opt_iso8601(entry.deleted_date()),
        "next_rotation_date": opt_iso8601(entry.next_rotation_date()),
        "created_date": opt_iso8601(entry.created_date()),
        "owning_service": entry.owning_service(),
        "primary_region": entry.primary_region(),
        "tags": entry.tags().iter().map(tag_to_value).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::primitives::DateTime;

    #[test]
    fn rejects_invalid_base64() {
        let err = blob_from_base64("secret_binary", "not base64!").unwrap_err();
        assert!(err.to_string().contains("`secret_binary`"));

        let blob = blob_from_base64("secret_binary", "aGVsbG8=").unwrap();
        assert_eq!(blob.as_ref(), b"hello");
    }

    #[test]
    fn maps_secret_list_entries() {
        let entry = SecretListEntry::builder()
            .name("prod/db-password")
            .rotation_enabled(true)
            .rotation_rules(
                RotationRulesType::builder()
                    .automatically_after_days(30)
                    .build(),
            )
            .created_date(DateTime::from_secs(1_577_836_800))
            .tags(Tag::builder().key("env").value("prod").build())
            .build();

        let value = secret_list_entry_to_value(&entry);
        assert_eq!(value["name"], "prod/db-password");
        assert_eq!(value["rotation_enabled"], true);
        assert_eq!(value["rotation_rules"]["automatically_after_days"], 30);
        assert_eq!(value["created_date"], "2020-01-01T00:00:00Z");
        assert_eq!(value["tags"][0]["value"], "prod");
    }

    #[test]
    fn list_filters_parse_key_and_values() {
        let filters = filters_from_json(Some(json!([
            {"key": "name", "values": ["prod/"]}
        ])))
        .unwrap()
        .unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].values(), ["prod/"]);
    }
}
