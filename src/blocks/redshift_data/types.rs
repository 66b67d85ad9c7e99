//! JSON mappers for Redshift Data API response shapes.

use aws_sdk_redshiftdata::types::{ColumnMetadata, Field, SqlParameter, StatementData, TableMember};
use serde_json::{Value, json};

use crate::blocks::convert::{base64_blob, opt_iso8601};
use crate::errors::BlockError;

/// A result cell. The API models cells as a union; blob members come out
/// base64-encoded, explicit SQL NULL becomes JSON null.
pub(crate) fn field_to_value(field: &Field) -> Value {
    match field {
        Field::BlobValue(blob) => Value::String(base64_blob(blob)),
        Field::BooleanValue(value) => Value::Bool(*value),
        Field::DoubleValue(value) => json!(value),
        Field::IsNull(_) => Value::Null,
        Field::LongValue(value) => json!(value),
        Field::StringValue(value) => Value::String(value.clone()),
        _ => Value::Null,
    }
}

pub(crate) fn column_metadata_to_value(column: &ColumnMetadata) -> Value {
    json!({
        "name": column.name(),
        "label": column.label(),
        "type_name": column.type_name(),
        "schema_name": column.schema_name(),
        "table_name": column.table_name(),
        "column_default": column.column_default(),
        "length": column.length(),
        "precision": column.precision(),
        "scale": column.scale(),
        "nullable": column.nullable(),
        "is_case_sensitive": column.is_case_sensitive(),
        "is_currency": column.is_currency(),
        "is_signed": column.is_signed(),
    })
}

pub(crate) fn table_member_to_value(table: &TableMember) -> Value {
    json!({
        "name": table.name(),
        "schema": table.schema(),
        "type": table.r#type(),
    })
}

pub(crate) fn statement_data_to_value(statement: &StatementData) -> Value {
    json!({
        "id": statement.id(),
        "statement_name": statement.statement_name(),
        "query_string": statement.query_string(),
        "query_strings": statement.query_strings(),
        "status": statement.status().map(|status| status.as_str()),
        "secret_arn": statement.secret_arn(),
        "created_at": opt_iso8601(statement.created_at()),
        "updated_at": opt_iso8601(statement.updated_at()),
        "is_batch_statement": statement.is_batch_statement(),
    })
}

/// Build SDK SQL parameters from `{name: value}` pairs.
pub(crate) fn sql_parameters_from_pairs(
    pairs: Vec<(String, String)>,
) -> Result<Vec<SqlParameter>, BlockError> {
    pairs
        .into_iter()
        .map(|(name, value)| {
            SqlParameter::builder()
                .name(name)
                .value(value)
                .build()
                .map_err(|e| BlockError::InvalidInput(format!("invalid SQL parameter: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_redshiftdata::primitives::Blob;

    #[test]
    fn field_union_maps_to_json_scalars() {
        assert_eq!(field_to_value(&Field::StringValue("ok".into())), json!("ok"));
        assert_eq!(field_to_value(&Field::LongValue(42)), json!(42));
        assert_eq!(field_to_value(&Field::DoubleValue(2.5)), json!(2.5));
        assert_eq!(field_to_value(&Field::BooleanValue(false)), json!(false));
        assert_eq!(field_to_value(&Field::IsNull(true)), Value::Null);
        assert_eq!(
            field_to_value(&Field::BlobValue(Blob::new(b"ab".to_vec()))),
            json!("YWI=")
        );
    }

    #[test]
    fn maps_table_members() {
        let table = TableMember::builder()
            .name("orders")
            .schema("public")
            .r#type("TABLE")
            .build();
        let value = table_member_to_value(&table);
        assert_eq!(value["name"], "orders");
        assert_eq!(value["type"], "TABLE");
    }

    #[test]
    fn sql_parameters_require_name_and_value() {
        let params =
            sql_parameters_from_pairs(vec![("id".to_string(), "7".to_string())]).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name(), "id");
        assert_eq!(params[0].value(), "7");
    }
}
