//! JSON mappers for RDS response shapes.
//!
//! SDK output structs do not implement `Serialize`; each response member the
//! wrapped operations document is mapped field-for-field here.

use aws_sdk_rds::types::{DbInstance, DbSnapshot, Endpoint, Filter, Tag};
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

#[derive(Deserialize)]
struct FilterInput {
    name: String,
    values: Vec<String>,
}

/// Parse a `[{name, values}]` JSON input into SDK filters.
pub(crate) fn filters_from_json(value: Option<Value>) -> Result<Option<Vec<Filter>>, BlockError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let items: Vec<FilterInput> = serde_json::from_value(value).map_err(|e| {
        BlockError::InvalidInput(format!(
            "field `filters` must be a list of {{name, values}} objects: {e}"
        ))
    })?;
    let mut filters = Vec::with_capacity(items.len());
    for item in items {
        let filter = Filter::builder()
            .name(item.name)
            .set_values(Some(item.values))
            .build();
        filters.push(filter);
    }
    Ok(Some(filters))
}

fn endpoint_to_value(endpoint: &Endpoint) -> Value {
    json!({
        "address": endpoint.address(),
        "port": endpoint.port(),
        "hosted_zone_id": endpoint.hosted_zone_id(),
    })
}

pub(crate) fn db_instance_to_value(instance: &DbInstance) -> Value {
    json!({
        "db_instance_identifier": instance.db_instance_identifier(),
        "db_instance_arn": instance.db_instance_arn(),
        "db_instance_class": instance.db_instance_class(),
        "db_instance_status": instance.db_instance_status(),
        "engine": instance.engine(),
        "engine_version": instance.engine_version(),
        "db_name": instance.db_name(),
        "master_username": instance.master_username(),
        "endpoint": instance.endpoint().map(endpoint_to_value),
        "allocated_storage": instance.allocated_storage(),
        "instance_create_time": opt_iso8601(instance.instance_create_time()),
        "backup_retention_period": instance.backup_retention_period(),
        "availability_zone": instance.availability_zone(),
        "multi_az": instance.multi_az(),
        "publicly_accessible": instance.publicly_accessible(),
        "storage_type": instance.storage_type(),
        "storage_encrypted": instance.storage_encrypted(),
        "kms_key_id": instance.kms_key_id(),
        "deletion_protection": instance.deletion_protection(),
        "db_subnet_group_name": instance
            .db_subnet_group()
            .and_then(|group| group.db_subnet_group_name()),
        "vpc_security_groups": instance
            .vpc_security_groups()
            .iter()
            .map(|membership| json!({
                "vpc_security_group_id": membership.vpc_security_group_id(),
                "status": membership.status(),
            }))
            .collect::<Vec<_>>(),
        "tag_list": instance.tag_list().iter().map(tag_to_value).collect::<Vec<_>>(),
    })
}

pub(crate) fn db_snapshot_to_value(snapshot: &DbSnapshot) -> Value {
    json!({
        "db_snapshot_identifier": snapshot.db_snapshot_identifier(),
        "db_snapshot_arn": snapshot.db_snapshot_arn(),
        "db_instance_identifier": snapshot.db_instance_identifier(),
        "snapshot_create_time": opt_iso8601(snapshot.snapshot_create_time()),
        "snapshot_type": snapshot.snapshot_type(),
        "status": snapshot.status(),
        "percent_progress": snapshot.percent_progress(),
        "engine": snapshot.engine(),
        "engine_version": snapshot.engine_version(),
        "allocated_storage": snapshot.allocated_storage(),
        "storage_type": snapshot.storage_type(),
        "port": snapshot.port(),
        "availability_zone": snapshot.availability_zone(),
        "vpc_id": snapshot.vpc_id(),
        "instance_create_time": opt_iso8601(snapshot.instance_create_time()),
        "master_username": snapshot.master_username(),
        "encrypted": snapshot.encrypted(),
        "kms_key_id": snapshot.kms_key_id(),
        "source_db_snapshot_identifier": snapshot.source_db_snapshot_identifier(),
        "dbi_resource_id": snapshot.dbi_resource_id(),
        "tag_list": snapshot.tag_list().iter().map(tag_to_value).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_rds::primitives::DateTime;

    #[test]
    fn maps_db_snapshot_core_fields() {
        let snapshot = DbSnapshot::builder()
            .db_snapshot_identifier("nightly-2020-01-01")
            .db_instance_identifier("orders-db")
            .snapshot_create_time(DateTime::from_secs(1_577_836_800))
            .status("available")
            .encrypted(true)
            .tag_list(Tag::builder().key("env").value("prod").build())
            .build();

        let value = db_snapshot_to_value(&snapshot);
        assert_eq!(value["db_snapshot_identifier"], "nightly-2020-01-01");
        assert_eq!(value["snapshot_create_time"], "2020-01-01T00:00:00Z");
        assert_eq!(value["encrypted"], true);
        assert_eq!(value["tag_list"][0]["key"], "env");
        assert!(value["kms_key_id"].is_null());
    }

    #[test]
    fn maps_db_instance_endpoint_and_groups() {
        let instance = DbInstance::builder()
            .db_instance_identifier("orders-db")
            .db_instance_status("available")
            .endpoint(
                Endpoint::builder()
                    .address("orders-db.abc.us-east-1.rds.amazonaws.com")
                    .port(5432)
                    .build(),
            )
            .build();

        let value = db_instance_to_value(&instance);
        assert_eq!(value["endpoint"]["port"], 5432);
        assert_eq!(value["db_instance_status"], "available");
        assert_eq!(value["vpc_security_groups"], json!([]));
    }

    #[test]
    fn filter_input_requires_name_and_values() {
        let filters = filters_from_json(Some(json!([
            {"name": "engine", "values": ["postgres"]}
        ])))
        .unwrap()
        .unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name(), Some("engine"));

        let err = filters_from_json(Some(json!([{"name": "engine"}]))).unwrap_err();
        assert!(matches!(err, BlockError::InvalidInput(_)));

        assert!(filters_from_json(None).unwrap().is_none());
    }

    #[test]
    fn tags_from_pairs_keeps_order() {
        let tags = tags_from_pairs(vec![
            ("env".to_string(), "prod".to_string()),
            ("team".to_string(), "data".to_string()),
        ]);
        assert_eq!(tags[0].key(), Some("env"));
        assert_eq!(tags[1].value(), Some("data"));
    }
}
