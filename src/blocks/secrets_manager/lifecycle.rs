//! Secret lifecycle blocks: create, update, delete, restore, rotate.

use async_trait::async_trait;
use aws_sdk_secretsmanager::types::RotationRulesType;
use serde_json::{Value, json};

use super::types::{blob_from_base64, tags_from_pairs};
use crate::block::{Block, BlockContext};
use crate::blocks::convert::opt_iso8601;
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct CreateSecret;

#[async_trait]
impl Block for CreateSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.create_secret",
            Service::SecretsManager,
            "CreateSecret",
        )
        .describe("Creates a new secret with an initial version.")
        .input(FieldSpec::text("name").required())
        .input(FieldSpec::text("description"))
        .input(FieldSpec::text("secret_string")
            .describe("Text payload; mutually exclusive with secret_binary."))
        .input(FieldSpec::text("secret_binary")
            .describe("Base64-encoded binary payload."))
        .input(FieldSpec::text("kms_key_id"))
        .input(FieldSpec::key_values("tags"))
        .emits("The raw CreateSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let secret_binary = args
            .opt_str("secret_binary")?
            .map(|encoded| blob_from_base64("secret_binary", &encoded))
            .transpose()?;
        let response = ctx
            .aws
            .secrets_manager()
            .create_secret()
            .name(args.required_str("name")?)
            .set_description(args.opt_str("description")?)
            .set_secret_string(args.opt_str("secret_string")?)
            .set_secret_binary(secret_binary)
            .set_kms_key_id(args.opt_str("kms_key_id")?)
            .set_tags(args.opt_key_values("tags")?.map(tags_from_pairs))
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "version_id": response.version_id(),
            }),
        );
        Ok(())
    }
}

pub struct UpdateSecret;

#[async_trait]
impl Block for UpdateSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.update_secret",
            Service::SecretsManager,
            "UpdateSecret",
        )
        .describe("Updates a secret's metadata or stores a new version.")
        .input(FieldSpec::text("secret_id").required()
            .describe("Secret name or ARN."))
        .input(FieldSpec::text("description"))
        .input(FieldSpec::text("kms_key_id"))
        .input(FieldSpec::text("secret_string"))
        .input(FieldSpec::text("secret_binary"))
        .emits("The raw UpdateSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let secret_binary = args
            .opt_str("secret_binary")?
            .map(|encoded| blob_from_base64("secret_binary", &encoded))
            .transpose()?;
        let response = ctx
            .aws
            .secrets_manager()
            .update_secret()
            .secret_id(args.required_str("secret_id")?)
            .set_description(args.opt_str("description")?)
            .set_kms_key_id(args.opt_str("kms_key_id")?)
            .set_secret_string(args.opt_str("secret_string")?)
            .set_secret_binary(secret_binary)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "version_id": response.version_id(),
            }),
        );
        Ok(())
    }
}

pub struct DeleteSecret;

#[async_trait]
impl Block for DeleteSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.delete_secret",
            Service::SecretsManager,
            "DeleteSecret",
        )
        .describe("Schedules a secret for deletion after a recovery window.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::integer("recovery_window_in_days")
            .describe("7 to 30 days; mutually exclusive with force delete."))
        .input(FieldSpec::bool("force_delete_without_recovery"))
        .emits("The raw DeleteSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .delete_secret()
            .secret_id(args.required_str("secret_id")?)
            .set_recovery_window_in_days(args.opt_i64("recovery_window_in_days")?)
            .set_force_delete_without_recovery(args.opt_bool("force_delete_without_recovery")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "deletion_date": opt_iso8601(response.deletion_date()),
            }),
        );
        Ok(())
    }
}

pub struct RestoreSecret;

#[async_trait]
impl Block for RestoreSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.restore_secret",
            Service::SecretsManager,
            "RestoreSecret",
        )
        .describe("Cancels a scheduled deletion, restoring the secret.")
        .input(FieldSpec::text("secret_id").required())
        .emits("The raw RestoreSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .restore_secret()
            .secret_id(args.required_str("secret_id")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
            }),
        );
        Ok(())
    }
}

pub struct RotateSecret;

#[async_trait]
impl Block for RotateSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.rotate_secret",
            Service::SecretsManager,
            "RotateSecret",
        )
        .describe("Configures rotation and optionally starts it immediately.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::text("rotation_lambda_arn"))
        .input(FieldSpec::integer("automatically_after_days"))
        .input(FieldSpec::text("schedule_expression")
            .describe("rate() or cron() expression; overrides automatically_after_days."))
        .input(FieldSpec::text("rotation_duration"))
        .input(FieldSpec::bool("rotate_immediately"))
        .emits("The raw RotateSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let automatically_after_days = args.opt_i64("automatically_after_days")?;
        let schedule_expression = args.opt_str("schedule_expression")?;
        let rotation_duration = args.opt_str("rotation_duration")?;
        let rotation_rules = if automatically_after_days.is_some()
            || schedule_expression.is_some()
            || rotation_duration.is_some()
        {
            Some(
                RotationRulesType::builder()
                    .set_automatically_after_days(automatically_after_days)
                    .set_schedule_expression(schedule_expression)
                    .set_duration(rotation_duration)
                    .build(),
            )
        } else {
            None
        };

        let response = ctx
            .aws
            .secrets_manager()
            .rotate_secret()
            .secret_id(args.required_str("secret_id")?)
            .set_rotation_lambda_arn(args.opt_str("rotation_lambda_arn")?)
            .set_rotation_rules(rotation_rules)
            .set_rotate_immediately(args.opt_bool("rotate_immediately")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "version_id": response.version_id(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(CreateSecret),
        Box::new(UpdateSecret),
        Box::new(DeleteSecret),
        Box::new(RestoreSecret),
        Box::new(RotateSecret),
    ]
}
