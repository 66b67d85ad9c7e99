//! DB snapshot blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{db_snapshot_to_value, filters_from_json, tags_from_pairs};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct CreateDbSnapshot;

#[async_trait]
impl Block for CreateDbSnapshot {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.create_db_snapshot",
            Service::Rds,
            "CreateDBSnapshot",
        )
        .describe("Creates a manual snapshot of a DB instance.")
        .input(FieldSpec::text("db_snapshot_identifier").required())
        .input(FieldSpec::text("db_instance_identifier").required())
        .input(FieldSpec::key_values("tags"))
        .emits("The raw CreateDBSnapshot response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .create_db_snapshot()
            .db_snapshot_identifier(args.required_str("db_snapshot_identifier")?)
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .set_tags(args.opt_key_values("tags")?.map(tags_from_pairs))
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_snapshot": response.db_snapshot().map(db_snapshot_to_value) }),
        );
        Ok(())
    }
}

pub struct CopyDbSnapshot;

#[async_trait]
impl Block for CopyDbSnapshot {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.rds.copy_db_snapshot", Service::Rds, "CopyDBSnapshot")
            .describe("Copies a DB snapshot, within or across accounts.")
            .input(FieldSpec::text("source_db_snapshot_identifier").required()
                .describe("Identifier or ARN of the snapshot to copy."))
            .input(FieldSpec::text("target_db_snapshot_identifier").required())
            .input(FieldSpec::text("kms_key_id")
                .describe("KMS key for the copy; required for encrypted cross-account copies."))
            .input(FieldSpec::bool("copy_tags"))
            .input(FieldSpec::text("option_group_name"))
            .input(FieldSpec::key_values("tags"))
            .emits("The raw CopyDBSnapshot response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .copy_db_snapshot()
            .source_db_snapshot_identifier(args.required_str("source_db_snapshot_identifier")?)
            .target_db_snapshot_identifier(args.required_str("target_db_snapshot_identifier")?)
            .set_kms_key_id(args.opt_str("kms_key_id")?)
            .set_copy_tags(args.opt_bool("copy_tags")?)
            .set_option_group_name(args.opt_str("option_group_name")?)
            .set_tags(args.opt_key_values("tags")?.map(tags_from_pairs))
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_snapshot": response.db_snapshot().map(db_snapshot_to_value) }),
        );
        Ok(())
    }
}

pub struct DeleteDbSnapshot;

#[async_trait]
impl Block for DeleteDbSnapshot {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.delete_db_snapshot",
            Service::Rds,
            "DeleteDBSnapshot",
        )
        .describe("Deletes a manual DB snapshot.")
        .input(FieldSpec::text("db_snapshot_identifier").required())
        .emits("The raw DeleteDBSnapshot response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .delete_db_snapshot()
            .db_snapshot_identifier(args.required_str("db_snapshot_identifier")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_snapshot": response.db_snapshot().map(db_snapshot_to_value) }),
        );
        Ok(())
    }
}

pub struct DescribeDbSnapshots;

#[async_trait]
impl Block for DescribeDbSnapshots {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.describe_db_snapshots",
            Service::Rds,
            "DescribeDBSnapshots",
        )
        .describe("Returns information about DB snapshots.")
        .input(FieldSpec::text("db_instance_identifier"))
        .input(FieldSpec::text("db_snapshot_identifier"))
        .input(FieldSpec::text("snapshot_type")
            .describe("manual, automated, shared or public."))
        .input(FieldSpec::json("filters"))
        .input(FieldSpec::bool("include_shared"))
        .input(FieldSpec::bool("include_public"))
        .input(FieldSpec::integer("max_records"))
        .input(FieldSpec::text("marker"))
        .emits("The raw DescribeDBSnapshots response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .describe_db_snapshots()
            .set_db_instance_identifier(args.opt_str("db_instance_identifier")?)
            .set_db_snapshot_identifier(args.opt_str("db_snapshot_identifier")?)
            .set_snapshot_type(args.opt_str("snapshot_type")?)
            .set_filters(filters_from_json(args.raw("filters"))?)
            .set_include_shared(args.opt_bool("include_shared")?)
            .set_include_public(args.opt_bool("include_public")?)
            .set_max_records(args.opt_i32("max_records")?)
            .set_marker(args.opt_str("marker")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "db_snapshots": response
                    .db_snapshots()
                    .iter()
                    .map(db_snapshot_to_value)
                    .collect::<Vec<_>>(),
                "marker": response.marker(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(CreateDbSnapshot),
        Box::new(CopyDbSnapshot),
        Box::new(DeleteDbSnapshot),
        Box::new(DescribeDbSnapshots),
    ]
}
