//! Catalog introspection blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{column_metadata_to_value, table_member_to_value};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct ListDatabases;

#[async_trait]
impl Block for ListDatabases {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.list_databases",
            Service::RedshiftData,
            "ListDatabases",
        )
        .describe("Lists the databases in a cluster or workgroup.")
        .input(FieldSpec::text("database").required()
            .describe("Database to connect through."))
        .input(FieldSpec::text("cluster_identifier"))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user"))
        .input(FieldSpec::text("secret_arn"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw ListDatabases response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .list_databases()
            .database(args.required_str("database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "databases": response.databases(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct ListSchemas;

#[async_trait]
impl Block for ListSchemas {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.list_schemas",
            Service::RedshiftData,
            "ListSchemas",
        )
        .describe("Lists the schemas in a database.")
        .input(FieldSpec::text("database").required())
        .input(FieldSpec::text("schema_pattern")
            .describe("SQL LIKE pattern; unset lists every schema."))
        .input(FieldSpec::text("connected_database"))
        .input(FieldSpec::text("cluster_identifier"))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user"))
        .input(FieldSpec::text("secret_arn"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw ListSchemas response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .list_schemas()
            .database(args.required_str("database")?)
            .set_schema_pattern(args.opt_str("schema_pattern")?)
            .set_connected_database(args.opt_str("connected_database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "schemas": response.schemas(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct ListTables;

#[async_trait]
impl Block for ListTables {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.list_tables",
            Service::RedshiftData,
            "ListTables",
        )
        .describe("Lists tables visible through a database connection.")
        .input(FieldSpec::text("database").required())
        .input(FieldSpec::text("schema_pattern"))
        .input(FieldSpec::text("table_pattern"))
        .input(FieldSpec::text("connected_database"))
        .input(FieldSpec::text("cluster_identifier"))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user"))
        .input(FieldSpec::text("secret_arn"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw ListTables response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .list_tables()
            .database(args.required_str("database")?)
            .set_schema_pattern(args.opt_str("schema_pattern")?)
            .set_table_pattern(args.opt_str("table_pattern")?)
            .set_connected_database(args.opt_str("connected_database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "tables": response
                    .tables()
                    .iter()
                    .map(table_member_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct DescribeTable;

#[async_trait]
impl Block for DescribeTable {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.describe_table",
            Service::RedshiftData,
            "DescribeTable",
        )
        .describe("Describes the columns of a table.")
        .input(FieldSpec::text("database").required())
        .input(FieldSpec::text("schema"))
        .input(FieldSpec::text("table"))
        .input(FieldSpec::text("connected_database"))
        .input(FieldSpec::text("cluster_identifier"))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user"))
        .input(FieldSpec::text("secret_arn"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw DescribeTable response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .describe_table()
            .database(args.required_str("database")?)
            .set_schema(args.opt_str("schema")?)
            .set_table(args.opt_str("table")?)
            .set_connected_database(args.opt_str("connected_database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "table_name": response.table_name(),
                "column_list": response
                    .column_list()
                    .iter()
                    .map(column_metadata_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(ListDatabases),
        Box::new(ListSchemas),
        Box::new(ListTables),
        Box::new(DescribeTable),
    ]
}
