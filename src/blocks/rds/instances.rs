//! DB instance lifecycle blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{db_instance_to_value, filters_from_json, tags_from_pairs};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct DescribeDbInstances;

#[async_trait]
impl Block for DescribeDbInstances {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.describe_db_instances",
            Service::Rds,
            "DescribeDBInstances",
        )
        .describe("Returns information about provisioned RDS instances.")
        .input(FieldSpec::text("db_instance_identifier")
            .describe("Limit the result to one instance."))
        .input(FieldSpec::json("filters")
            .describe("List of {name, values} filter objects."))
        .input(FieldSpec::integer("max_records"))
        .input(FieldSpec::text("marker")
            .describe("Pagination marker returned by a previous call."))
        .emits("The raw DescribeDBInstances response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .describe_db_instances()
            .set_db_instance_identifier(args.opt_str("db_instance_identifier")?)
            .set_filters(filters_from_json(args.raw("filters"))?)
            .set_max_records(args.opt_i32("max_records")?)
            .set_marker(args.opt_str("marker")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "db_instances": response
                    .db_instances()
                    .iter()
                    .map(db_instance_to_value)
                    .collect::<Vec<_>>(),
                "marker": response.marker(),
            }),
        );
        Ok(())
    }
}

pub struct CreateDbInstance;

#[async_trait]
impl Block for CreateDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.create_db_instance",
            Service::Rds,
            "CreateDBInstance",
        )
        .describe("Creates a new RDS DB instance.")
        .input(FieldSpec::text("db_instance_identifier").required())
        .input(FieldSpec::text("db_instance_class").required()
            .describe("Compute and memory class, e.g. db.t3.micro."))
        .input(FieldSpec::text("engine").required()
            .describe("Database engine, e.g. postgres or mysql."))
        .input(FieldSpec::integer("allocated_storage")
            .describe("Storage to allocate, in gibibytes."))
        .input(FieldSpec::text("master_username"))
        .input(FieldSpec::text("master_user_password"))
        .input(FieldSpec::text("db_name"))
        .input(FieldSpec::text("engine_version"))
        .input(FieldSpec::integer("port"))
        .input(FieldSpec::text("availability_zone"))
        .input(FieldSpec::text("db_subnet_group_name"))
        .input(FieldSpec::text_list("vpc_security_group_ids"))
        .input(FieldSpec::bool("multi_az"))
        .input(FieldSpec::bool("publicly_accessible"))
        .input(FieldSpec::text("storage_type"))
        .input(FieldSpec::bool("storage_encrypted"))
        .input(FieldSpec::text("kms_key_id"))
        .input(FieldSpec::integer("backup_retention_period"))
        .input(FieldSpec::bool("deletion_protection"))
        .input(FieldSpec::key_values("tags"))
        .emits("The raw CreateDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .create_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .db_instance_class(args.required_str("db_instance_class")?)
            .engine(args.required_str("engine")?)
            .set_allocated_storage(args.opt_i32("allocated_storage")?)
            .set_master_username(args.opt_str("master_username")?)
            .set_master_user_password(args.opt_str("master_user_password")?)
            .set_db_name(args.opt_str("db_name")?)
            .set_engine_version(args.opt_str("engine_version")?)
            .set_port(args.opt_i32("port")?)
            .set_availability_zone(args.opt_str("availability_zone")?)
            .set_db_subnet_group_name(args.opt_str("db_subnet_group_name")?)
            .set_vpc_security_group_ids(args.opt_str_list("vpc_security_group_ids")?)
            .set_multi_az(args.opt_bool("multi_az")?)
            .set_publicly_accessible(args.opt_bool("publicly_accessible")?)
            .set_storage_type(args.opt_str("storage_type")?)
            .set_storage_encrypted(args.opt_bool("storage_encrypted")?)
            .set_kms_key_id(args.opt_str("kms_key_id")?)
            .set_backup_retention_period(args.opt_i32("backup_retention_period")?)
            .set_deletion_protection(args.opt_bool("deletion_protection")?)
            .set_tags(args.opt_key_values("tags")?.map(tags_from_pairs))
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub struct ModifyDbInstance;

#[async_trait]
impl Block for ModifyDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.modify_db_instance",
            Service::Rds,
            "ModifyDBInstance",
        )
        .describe("Modifies settings of an existing DB instance.")
        .input(FieldSpec::text("db_instance_identifier").required())
        .input(FieldSpec::text("db_instance_class"))
        .input(FieldSpec::integer("allocated_storage"))
        .input(FieldSpec::text("master_user_password"))
        .input(FieldSpec::integer("backup_retention_period"))
        .input(FieldSpec::text("engine_version"))
        .input(FieldSpec::bool("allow_major_version_upgrade"))
        .input(FieldSpec::bool("auto_minor_version_upgrade"))
        .input(FieldSpec::bool("multi_az"))
        .input(FieldSpec::bool("publicly_accessible"))
        .input(FieldSpec::text("storage_type"))
        .input(FieldSpec::bool("deletion_protection"))
        .input(FieldSpec::bool("apply_immediately")
            .describe("Apply changes now instead of the next maintenance window."))
        .emits("The raw ModifyDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .modify_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .set_db_instance_class(args.opt_str("db_instance_class")?)
            .set_allocated_storage(args.opt_i32("allocated_storage")?)
            .set_master_user_password(args.opt_str("master_user_password")?)
            .set_backup_retention_period(args.opt_i32("backup_retention_period")?)
            .set_engine_version(args.opt_str("engine_version")?)
            .set_allow_major_version_upgrade(args.opt_bool("allow_major_version_upgrade")?)
            .set_auto_minor_version_upgrade(args.opt_bool("auto_minor_version_upgrade")?)
            .set_multi_az(args.opt_bool("multi_az")?)
            .set_publicly_accessible(args.opt_bool("publicly_accessible")?)
            .set_storage_type(args.opt_str("storage_type")?)
            .set_deletion_protection(args.opt_bool("deletion_protection")?)
            .set_apply_immediately(args.opt_bool("apply_immediately")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub struct StartDbInstance;

#[async_trait]
impl Block for StartDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.rds.start_db_instance", Service::Rds, "StartDBInstance")
            .describe("Starts a stopped DB instance.")
            .input(FieldSpec::text("db_instance_identifier").required())
            .emits("The raw StartDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .start_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub struct StopDbInstance;

#[async_trait]
impl Block for StopDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.rds.stop_db_instance", Service::Rds, "StopDBInstance")
            .describe("Stops a running DB instance.")
            .input(FieldSpec::text("db_instance_identifier").required())
            .input(FieldSpec::text("db_snapshot_identifier")
                .describe("Snapshot to create before stopping."))
            .emits("The raw StopDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .stop_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .set_db_snapshot_identifier(args.opt_str("db_snapshot_identifier")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub struct RebootDbInstance;

#[async_trait]
impl Block for RebootDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.reboot_db_instance",
            Service::Rds,
            "RebootDBInstance",
        )
        .describe("Reboots a DB instance, optionally with a failover.")
        .input(FieldSpec::text("db_instance_identifier").required())
        .input(FieldSpec::bool("force_failover"))
        .emits("The raw RebootDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .reboot_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .set_force_failover(args.opt_bool("force_failover")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub struct DeleteDbInstance;

#[async_trait]
impl Block for DeleteDbInstance {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.delete_db_instance",
            Service::Rds,
            "DeleteDBInstance",
        )
        .describe("Deletes a DB instance.")
        .input(FieldSpec::text("db_instance_identifier").required())
        .input(FieldSpec::bool("skip_final_snapshot"))
        .input(FieldSpec::text("final_db_snapshot_identifier")
            .describe("Required by the API when a final snapshot is taken."))
        .input(FieldSpec::bool("delete_automated_backups"))
        .emits("The raw DeleteDBInstance response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .delete_db_instance()
            .db_instance_identifier(args.required_str("db_instance_identifier")?)
            .set_skip_final_snapshot(args.opt_bool("skip_final_snapshot")?)
            .set_final_db_snapshot_identifier(args.opt_str("final_db_snapshot_identifier")?)
            .set_delete_automated_backups(args.opt_bool("delete_automated_backups")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "db_instance": response.db_instance().map(db_instance_to_value) }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(DescribeDbInstances),
        Box::new(CreateDbInstance),
        Box::new(ModifyDbInstance),
        Box::new(StartDbInstance),
        Box::new(StopDbInstance),
        Box::new(RebootDbInstance),
        Box::new(DeleteDbInstance),
    ]
}
