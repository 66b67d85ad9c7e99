//! Resource tagging blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{tag_to_value, tags_from_pairs};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct AddTagsToResource;

#[async_trait]
impl Block for AddTagsToResource {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.add_tags_to_resource",
            Service::Rds,
            "AddTagsToResource",
        )
        .describe("Adds metadata tags to an RDS resource.")
        .input(FieldSpec::text("resource_name").required()
            .describe("ARN of the RDS resource to tag."))
        .input(FieldSpec::key_values("tags").required())
        .emits("The raw AddTagsToResource response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        ctx.aws
            .rds()
            .add_tags_to_resource()
            .resource_name(args.required_str("resource_name")?)
            .set_tags(Some(tags_from_pairs(args.required_key_values("tags")?)))
            .send()
            .await?;

        ctx.emit(self, json!({}));
        Ok(())
    }
}

pub struct ListTagsForResource;

#[async_trait]
impl Block for ListTagsForResource {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.list_tags_for_resource",
            Service::Rds,
            "ListTagsForResource",
        )
        .describe("Lists the tags on an RDS resource.")
        .input(FieldSpec::text("resource_name").required())
        .emits("The raw ListTagsForResource response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .rds()
            .list_tags_for_resource()
            .resource_name(args.required_str("resource_name")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "tag_list": response.tag_list().iter().map(tag_to_value).collect::<Vec<_>>(),
            }),
        );
        Ok(())
    }
}

pub struct RemoveTagsFromResource;

#[async_trait]
impl Block for RemoveTagsFromResource {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.rds.remove_tags_from_resource",
            Service::Rds,
            "RemoveTagsFromResource",
        )
        .describe("Removes metadata tags from an RDS resource.")
        .input(FieldSpec::text("resource_name").required())
        .input(FieldSpec::text_list("tag_keys").required())
        .emits("The raw RemoveTagsFromResource response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        ctx.aws
            .rds()
            .remove_tags_from_resource()
            .resource_name(args.required_str("resource_name")?)
            .set_tag_keys(Some(args.required_str_list("tag_keys")?))
            .send()
            .await?;

        ctx.emit(self, json!({}));
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(AddTagsToResource),
        Box::new(ListTagsForResource),
        Box::new(RemoveTagsFromResource),
    ]
}
