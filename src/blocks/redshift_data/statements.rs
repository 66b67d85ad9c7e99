//! Statement execution and tracking blocks.
//!
//! The Data API is asynchronous: execute returns a statement id, progress is
//! read back with describe, and result pages are fetched separately. Each of
//! those steps is its own block; polling loops live in the caller.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::blocks::convert::opt_iso8601;
use super::types::{
    column_metadata_to_value, field_to_value, sql_parameters_from_pairs, statement_data_to_value,
};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct ExecuteStatement;

#[async_trait]
impl Block for ExecuteStatement {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.execute_statement",
            Service::RedshiftData,
            "ExecuteStatement",
        )
        .describe("Runs one SQL statement against a cluster or workgroup.")
        .input(FieldSpec::text("sql").required())
        .input(FieldSpec::text("database").required())
        .input(FieldSpec::text("cluster_identifier")
            .describe("Target cluster; leave unset for serverless workgroups."))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user")
            .describe("Database user for temporary-credential auth."))
        .input(FieldSpec::text("secret_arn")
            .describe("Secrets Manager secret holding the database credentials."))
        .input(FieldSpec::text("statement_name"))
        .input(FieldSpec::key_values("parameters")
            .describe("Named SQL parameters, bound as {name: value}."))
        .input(FieldSpec::bool("with_event")
            .describe("Also publish completion to EventBridge."))
        .emits("The raw ExecuteStatement response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let parameters = args
            .opt_key_values("parameters")?
            .map(sql_parameters_from_pairs)
            .transpose()?;
        let response = ctx
            .aws
            .redshift_data()
            .execute_statement()
            .sql(args.required_str("sql")?)
            .database(args.required_str("database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_statement_name(args.opt_str("statement_name")?)
            .set_parameters(parameters)
            .set_with_event(args.opt_bool("with_event")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "id": response.id(),
                "cluster_identifier": response.cluster_identifier(),
                "workgroup_name": response.workgroup_name(),
                "database": response.database(),
                "db_user": response.db_user(),
                "secret_arn": response.secret_arn(),
                "created_at": opt_iso8601(response.created_at()),
            }),
        );
        Ok(())
    }
}

pub struct BatchExecuteStatement;

#[async_trait]
impl Block for BatchExecuteStatement {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.batch_execute_statement",
            Service::RedshiftData,
            "BatchExecuteStatement",
        )
        .describe("Runs multiple SQL statements as one transaction.")
        .input(FieldSpec::text_list("sqls").required()
            .describe("Statements run in order; the batch rolls back on failure."))
        .input(FieldSpec::text("database").required())
        .input(FieldSpec::text("cluster_identifier"))
        .input(FieldSpec::text("workgroup_name"))
        .input(FieldSpec::text("db_user"))
        .input(FieldSpec::text("secret_arn"))
        .input(FieldSpec::text("statement_name"))
        .input(FieldSpec::bool("with_event"))
        .emits("The raw BatchExecuteStatement response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .batch_execute_statement()
            .set_sqls(Some(args.required_str_list("sqls")?))
            .database(args.required_str("database")?)
            .set_cluster_identifier(args.opt_str("cluster_identifier")?)
            .set_workgroup_name(args.opt_str("workgroup_name")?)
            .set_db_user(args.opt_str("db_user")?)
            .set_secret_arn(args.opt_str("secret_arn")?)
            .set_statement_name(args.opt_str("statement_name")?)
            .set_with_event(args.opt_bool("with_event")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "id": response.id(),
                "cluster_identifier": response.cluster_identifier(),
                "workgroup_name": response.workgroup_name(),
                "database": response.database(),
                "db_user": response.db_user(),
                "secret_arn": response.secret_arn(),
                "created_at": opt_iso8601(response.created_at()),
            }),
        );
        Ok(())
    }
}

pub struct DescribeStatement;

#[async_trait]
impl Block for DescribeStatement {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.describe_statement",
            Service::RedshiftData,
            "DescribeStatement",
        )
        .describe("Reads the status and metadata of a submitted statement.")
        .input(FieldSpec::text("id").required()
            .describe("Statement id returned by execute or batch execute."))
        .emits("The raw DescribeStatement response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .describe_statement()
            .id(args.required_str("id")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "id": response.id(),
                "cluster_identifier": response.cluster_identifier(),
                "workgroup_name": response.workgroup_name(),
                "database": response.database(),
                "db_user": response.db_user(),
                "secret_arn": response.secret_arn(),
                "status": response.status().map(|status| status.as_str()),
                "error": response.error(),
                "query_string": response.query_string(),
                "has_result_set": response.has_result_set(),
                "duration": response.duration(),
                "result_rows": response.result_rows(),
                "result_size": response.result_size(),
                "redshift_pid": response.redshift_pid(),
                "redshift_query_id": response.redshift_query_id(),
                "created_at": opt_iso8601(response.created_at()),
                "updated_at": opt_iso8601(response.updated_at()),
                "sub_statements": response
                    .sub_statements()
                    .iter()
                    .map(|sub| json!({
                        "id": sub.id(),
                        "status": sub.status().map(|status| status.as_str()),
                        "error": sub.error(),
                        "query_string": sub.query_string(),
                        "has_result_set": sub.has_result_set(),
                        "duration": sub.duration(),
                        "result_rows": sub.result_rows(),
                        "result_size": sub.result_size(),
                        "redshift_query_id": sub.redshift_query_id(),
                        "created_at": opt_iso8601(sub.created_at()),
                        "updated_at": opt_iso8601(sub.updated_at()),
                    }))
                    .collect::<Vec<_>>(),
            }),
        );
        Ok(())
    }
}

pub struct CancelStatement;

#[async_trait]
impl Block for CancelStatement {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.cancel_statement",
            Service::RedshiftData,
            "CancelStatement",
        )
        .describe("Cancels a running statement.")
        .input(FieldSpec::text("id").required())
        .emits("The raw CancelStatement response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .cancel_statement()
            .id(args.required_str("id")?)
            .send()
            .await?;

        ctx.emit(self, json!({ "status": response.status() }));
        Ok(())
    }
}

pub struct GetStatementResult;

#[async_trait]
impl Block for GetStatementResult {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.get_statement_result",
            Service::RedshiftData,
            "GetStatementResult",
        )
        .describe("Fetches one page of a finished statement's result set.")
        .input(FieldSpec::text("id").required())
        .input(FieldSpec::text("next_token"))
        .emits("The raw GetStatementResult response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .get_statement_result()
            .id(args.required_str("id")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "column_metadata": response
                    .column_metadata()
                    .iter()
                    .map(column_metadata_to_value)
                    .collect::<Vec<_>>(),
                "records": response
                    .records()
                    .iter()
                    .map(|row| row.iter().map(field_to_value).collect::<Vec<_>>())
                    .collect::<Vec<_>>(),
                "total_num_rows": response.total_num_rows(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct ListStatements;

#[async_trait]
impl Block for ListStatements {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.redshift_data.list_statements",
            Service::RedshiftData,
            "ListStatements",
        )
        .describe("Lists recently submitted statements.")
        .input(FieldSpec::text("statement_name")
            .describe("Prefix match on statement names."))
        .input(FieldSpec::bool("role_level"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw ListStatements response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .redshift_data()
            .list_statements()
            .set_statement_name(args.opt_str("statement_name")?)
            .set_role_level(args.opt_bool("role_level")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "statements": response
                    .statements()
                    .iter()
                    .map(statement_data_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(ExecuteStatement),
        Box::new(BatchExecuteStatement),
        Box::new(DescribeStatement),
        Box::new(CancelStatement),
        Box::new(GetStatementResult),
        Box::new(ListStatements),
    ]
}
