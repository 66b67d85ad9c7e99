//! Resource tagging blocks.

use async_trait::async_trait;
use aws_sdk_ssm::types::ResourceTypeForTagging;
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
            "aws.ssm.add_tags_to_resource",
            Service::Ssm,
            "AddTagsToResource",
        )
        .describe("Adds tags to an SSM resource.")
        .input(FieldSpec::text("resource_type").required()
            .describe("Parameter, Document, ManagedInstance and other taggable types."))
        .input(FieldSpec::text("resource_id").required())
        .input(FieldSpec::key_values("tags").required())
        .emits("The raw AddTagsToResource response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let resource_type = args.required_str("resource_type")?;
        ctx.aws
            .ssm()
            .add_tags_to_resource()
            .resource_type(ResourceTypeForTagging::from(resource_type.as_str()))
            .resource_id(args.required_str("resource_id")?)
            .set_tags(Some(tags_from_pairs(args.required_key_values("tags")?)?))
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
            "aws.ssm.list_tags_for_resource",
            Service::Ssm,
            "ListTagsForResource",
        )
        .describe("Lists the tags on an SSM resource.")
        .input(FieldSpec::text("resource_type").required())
        .input(FieldSpec::text("resource_id").required())
        .emits("The raw ListTagsForResource response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let resource_type = args.required_str("resource_type")?;
        let response = ctx
            .aws
            .ssm()
            .list_tags_for_resource()
            .resource_type(ResourceTypeForTagging::from(resource_type.as_str()))
            .resource_id(args.required_str("resource_id")?)
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

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![Box::new(AddTagsToResource), Box::new(ListTagsForResource)]
}
