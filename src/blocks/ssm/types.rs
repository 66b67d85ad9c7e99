//! JSON mappers and input conversions for Systems Manager shapes.

use aws_sdk_ssm::types::{
    Command, Parameter, ParameterMetadata, ParameterStringFilter, Tag, Target,
};
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

/// SSM tags require both halves, so the builder is fallible.
pub(crate) fn tags_from_pairs(pairs: Vec<(String, String)>) -> Result<Vec<Tag>, BlockError> {
    pairs
        .into_iter()
        .map(|(key, value)| {
            Tag::builder()
                .key(key)
                .value(value)
                .build()
                .map_err(|e| BlockError::InvalidInput(format!("invalid tag: {e}")))
        })
        .collect()
}

#[derive(Deserialize)]
struct ParameterFilterInput {
    key: String,
    #[serde(default)]
    option: Option<String>,
    #[serde(default)]
    values: Vec<String>,
}

/// Parse a `[{key, option?, values}]` JSON input into parameter filters.
pub(crate) fn parameter_filters_from_json(
    value: Option<Value>,
) -> Result<Option<Vec<ParameterStringFilter>>, BlockError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let items: Vec<ParameterFilterInput> = serde_json::from_value(value).map_err(|e| {
        BlockError::InvalidInput(format!(
            "field `parameter_filters` must be a list of {{key, option, values}} objects: {e}"
        ))
    })?;
    let mut filters = Vec::with_capacity(items.len());
    for item in items {
        let filter = ParameterStringFilter::builder()
            .key(item.key)
            .set_option(item.option)
            .set_values(Some(item.values))
            .build()
            .map_err(|e| BlockError::InvalidInput(format!("invalid parameter filter: {e}")))?;
        filters.push(filter);
    }
    Ok(Some(filters))
}

#[derive(Deserialize)]
struct TargetInput {
    key: String,
    values: Vec<String>,
}

/// Parse a `[{key, values}]` JSON input into run-command targets.
pub(crate) fn targets_from_json(value: Option<Value>) -> Result<Option<Vec<Target>>, BlockError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let items: Vec<TargetInput> = serde_json::from_value(value).map_err(|e| {
        BlockError::InvalidInput(format!(
            "field `targets` must be a list of {{key, values}} objects: {e}"
        ))
    })?;
    let targets = items
        .into_iter()
        .map(|item| {
            Target::builder()
                .key(item.key)
                .set_values(Some(item.values))
                .build()
        })
        .collect();
    Ok(Some(targets))
}

pub(crate) fn parameter_to_value(parameter: &Parameter) -> Value {
    json!({
        "name": parameter.name(),
        "type": parameter.r#type().map(|kind| kind.as_str()),
        "value": parameter.value(),
        "version": parameter.version(),
        "selector": parameter.selector(),
        "source_result": parameter.source_result(),
        "last_modified_date": opt_iso8601(parameter.last_modified_date()),
        "arn": parameter.arn(),
        "data_type": parameter.data_type(),
    })
}

pub(crate) fn parameter_metadata_to_value(metadata: &ParameterMetadata) -> Value {
    json!({
        "name": metadata.name(),
        "type": metadata.r#type().map(|kind| kind.as_str()),
        "description": metadata.description(),
        "key_id": metadata.key_id(),
        "allowed_pattern": metadata.allowed_pattern(),
        "version": metadata.version(),
        "tier": metadata.tier().map(|tier| tier.as_str()),
        "data_type": metadata.data_type(),
        "last_modified_date": opt_iso8601(metadata.last_modified_date()),
        "last_modified_user": metadata.last_modified_user(),
    })
}

pub(crate) fn target_to_value(target: &Target) -> Value {
    json!({
        "key": target.key(),
        "values": target.values(),
    })
}

pub(crate) fn command_to_value(command: &Command) -> Value {
    json!({
        "command_id": command.command_id(),
        "document_name": command.document_name(),
        "document_version": command.document_version(),
        "comment": command.comment(),
        "status": command.status().map(|status| status.as_str()),
        "status_details": command.status_details(),
        "requested_date_time": opt_iso8601(command.requested_date_time()),
        "expires_after": opt_iso8601(command.expires_after()),
        "instance_ids": command.instance_ids(),
        "targets": command.targets().iter().map(target_to_value).collect::<Vec<_>>(),
        "parameters": command.parameters(),
        "timeout_seconds": command.timeout_seconds(),
        "max_concurrency": command.max_concurrency(),
        "max_errors": command.max_errors(),
        "target_count": command.target_count(),
        "completed_count": command.completed_count(),
        "error_count": command.error_count(),
        "delivery_timed_out_count": command.delivery_timed_out_count(),
        "output_s3_bucket_name": command.output_s3_bucket_name(),
        "output_s3_key_prefix": command.output_s3_key_prefix(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::primitives::DateTime;
    use aws_sdk_ssm::types::ParameterType;

    #[test]
    fn maps_parameters_with_enum_type() {
        let parameter = Parameter::builder()
            .name("/app/db-url")
            .r#type(ParameterType::SecureString)
            .value("postgres://...")
            .version(3)
            .last_modified_date(DateTime::from_secs(1_577_836_800))
            .build();

        let value = parameter_to_value(&parameter);
        assert_eq!(value["name"], "/app/db-url");
        assert_eq!(value["type"], "SecureString");
        assert_eq!(value["version"], 3);
        assert_eq!(value["last_modified_date"], "2020-01-01T00:00:00Z");
    }

    #[test]
    fn maps_command_targets_and_counts() {
        let command = Command::builder()
            .command_id("cmd-123")
            .document_name("AWS-RunShellScript")
            .instance_ids("i-0abc")
            .targets(Target::builder().key("tag:env").values("prod").build())
            .target_count(1)
            .build();

        let value = command_to_value(&command);
        assert_eq!(value["command_id"], "cmd-123");
        assert_eq!(value["instance_ids"], json!(["i-0abc"]));
        assert_eq!(value["targets"][0]["key"], "tag:env");
        assert_eq!(value["target_count"], 1);
    }

    #[test]
    fn ssm_tags_require_key_and_value() {
        let tags = tags_from_pairs(vec![("env".to_string(), "prod".to_string())]).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key(), "env");
        assert_eq!(tags[0].value(), "prod");
    }

    #[test]
    fn parameter_filters_require_a_key() {
        let filters = parameter_filters_from_json(Some(json!([
            {"key": "Name", "option": "BeginsWith", "values": ["/app/"]}
        ])))
        .unwrap()
        .unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].key(), "Name");

        let err = parameter_filters_from_json(Some(json!([{"values": ["/app/"]}]))).unwrap_err();
        assert!(matches!(err, BlockError::InvalidInput(_)));
    }
}
