//! Secret metadata and tagging blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{
    filters_from_json, rotation_rules_to_value, secret_list_entry_to_value, tag_to_value,
    tags_from_pairs,
};
use crate::block::{Block, BlockContext};
use crate::blocks::convert::opt_iso8601;
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct DescribeSecret;

#[async_trait]
impl Block for DescribeSecret {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.describe_secret",
            Service::SecretsManager,
            "DescribeSecret",
        )
        .describe("Reads a secret's metadata without its value.")
        .input(FieldSpec::text("secret_id").required())
        .emits("The raw DescribeSecret response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .describe_secret()
            .secret_id(args.required_str("secret_id")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "description": response.description(),
                "kms_key_id": response.kms_key_id(),
                "rotation_enabled": response.rotation_enabled(),
                "rotation_lambda_arn": response.rotation_lambda_arn(),
                "rotation_rules": response.rotation_rules().map(rotation_rules_to_value),
                "last_rotated_date": opt_iso8601(response.last_rotated_date()),
                "last_changed_date": opt_iso8601(response.last_changed_date()),
                "last_accessed_date": opt_iso8601(response.last_accessed_date()),
                "deleted_date": opt_iso8601(response.deleted_date()),
                "next_rotation_date": opt_iso8601(response.next_rotation_date()),
                "created_date": opt_iso8601(response.created_date()),
                "owning_service": response.owning_service(),
                "primary_region": response.primary_region(),
                "tags": response.tags().iter().map(tag_to_value).collect::<Vec<_>>(),
                "version_ids_to_stages": response.version_ids_to_stages(),
            }),
        );
        Ok(())
    }
}

pub struct ListSecrets;

#[async_trait]
impl Block for ListSecrets {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.list_secrets",
            Service::SecretsManager,
            "ListSecrets",
        )
        .describe("Lists the secrets in the account.")
        .input(FieldSpec::json("filters")
            .describe("List of {key, values} filter objects, e.g. key name or tag-key."))
        .input(FieldSpec::bool("include_planned_deletion"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw ListSecrets response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .list_secrets()
            .set_filters(filters_from_json(args.raw("filters"))?)
            .set_include_planned_deletion(args.opt_bool("include_planned_deletion")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "secret_list": response
                    .secret_list()
                    .iter()
                    .map(secret_list_entry_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct TagResource;

#[async_trait]
impl Block for TagResource {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.tag_resource",
            Service::SecretsManager,
            "TagResource",
        )
        .describe("Attaches tags to a secret.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::key_values("tags").required())
        .emits("The raw TagResource response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        ctx.aws
            .secrets_manager()
            .tag_resource()
            .secret_id(args.required_str("secret_id")?)
            .set_tags(Some(tags_from_pairs(args.required_key_values("tags")?)))
            .send()
            .await?;

        ctx.emit(self, json!({}));
        Ok(())
    }
}

pub struct UntagResource;

#[async_trait]
impl Block for UntagResource {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.untag_resource",
            Service::SecretsManager,
            "UntagResource",
        )
        .describe("Removes tags from a secret.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::text_list("tag_keys").required())
        .emits("The raw UntagResource response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        ctx.aws
            .secrets_manager()
            .untag_resource()
            .secret_id(args.required_str("secret_id")?)
            .set_tag_keys(Some(args.required_str_list("tag_keys")?))
            .send()
            .await?;

        ctx.emit(self, json!({}));
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(DescribeSecret),
        Box::new(ListSecrets),
        Box::new(TagResource),
        Box::new(UntagResource),
    ]
}
