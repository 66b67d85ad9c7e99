//! Parameter Store blocks.

use async_trait::async_trait;
use aws_sdk_ssm::types::{ParameterTier, ParameterType};
use serde_json::{Value, json};

use super::types::{
    parameter_filters_from_json, parameter_metadata_to_value, parameter_to_value, tags_from_pairs,
};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct GetParameter;

#[async_trait]
impl Block for GetParameter {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter")
            .describe("Reads a single parameter by name.")
            .input(FieldSpec::text("name").required()
                .describe("Parameter name, full path for hierarchical names."))
            .input(FieldSpec::bool("with_decryption").with_default(json!(false)))
            .emits("The raw GetParameter response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .get_parameter()
            .name(args.required_str("name")?)
            .set_with_decryption(args.opt_bool("with_decryption")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "parameter": response.parameter().map(parameter_to_value) }),
        );
        Ok(())
    }
}

pub struct GetParameters;

#[async_trait]
impl Block for GetParameters {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.get_parameters", Service::Ssm, "GetParameters")
            .describe("Reads up to ten parameters in one call.")
            .input(FieldSpec::text_list("names").required())
            .input(FieldSpec::bool("with_decryption").with_default(json!(false)))
            .emits("The raw GetParameters response, including invalid names.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .get_parameters()
            .set_names(Some(args.required_str_list("names")?))
            .set_with_decryption(args.opt_bool("with_decryption")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "parameters": response
                    .parameters()
                    .iter()
                    .map(parameter_to_value)
                    .collect::<Vec<_>>(),
                "invalid_parameters": response.invalid_parameters(),
            }),
        );
        Ok(())
    }
}

pub struct GetParametersByPath;

#[async_trait]
impl Block for GetParametersByPath {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.ssm.get_parameters_by_path",
            Service::Ssm,
            "GetParametersByPath",
        )
        .describe("Reads one page of parameters under a path hierarchy.")
        .input(FieldSpec::text("path").required())
        .input(FieldSpec::bool("recursive").with_default(json!(false)))
        .input(FieldSpec::bool("with_decryption").with_default(json!(false)))
        .input(FieldSpec::json("parameter_filters")
            .describe("List of {key, option, values} filter objects."))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw GetParametersByPath response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .get_parameters_by_path()
            .path(args.required_str("path")?)
            .set_recursive(args.opt_bool("recursive")?)
            .set_with_decryption(args.opt_bool("with_decryption")?)
            .set_parameter_filters(parameter_filters_from_json(args.raw("parameter_filters"))?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "parameters": response
                    .parameters()
                    .iter()
                    .map(parameter_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub struct PutParameter;

#[async_trait]
impl Block for PutParameter {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.put_parameter", Service::Ssm, "PutParameter")
            .describe("Creates or updates a parameter.")
            .input(FieldSpec::text("name").required())
            .input(FieldSpec::text("value").required())
            .input(FieldSpec::text("type")
                .describe("String, StringList or SecureString."))
            .input(FieldSpec::text("description"))
            .input(FieldSpec::text("key_id")
                .describe("KMS key for SecureString parameters."))
            .input(FieldSpec::bool("overwrite").with_default(json!(false)))
            .input(FieldSpec::text("allowed_pattern"))
            .input(FieldSpec::text("tier")
                .describe("Standard, Advanced or Intelligent-Tiering."))
            .input(FieldSpec::text("data_type"))
            .input(FieldSpec::key_values("tags"))
            .emits("The raw PutParameter response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let tags = args
            .opt_key_values("tags")?
            .map(tags_from_pairs)
            .transpose()?;
        let response = ctx
            .aws
            .ssm()
            .put_parameter()
            .name(args.required_str("name")?)
            .value(args.required_str("value")?)
            .set_type(args.opt_str("type")?.map(|t| ParameterType::from(t.as_str())))
            .set_description(args.opt_str("description")?)
            .set_key_id(args.opt_str("key_id")?)
            .set_overwrite(args.opt_bool("overwrite")?)
            .set_allowed_pattern(args.opt_str("allowed_pattern")?)
            .set_tier(args.opt_str("tier")?.map(|t| ParameterTier::from(t.as_str())))
            .set_data_type(args.opt_str("data_type")?)
            .set_tags(tags)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "version": response.version(),
                "tier": response.tier().map(|tier| tier.as_str()),
            }),
        );
        Ok(())
    }
}

pub struct DeleteParameter;

#[async_trait]
impl Block for DeleteParameter {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.delete_parameter", Service::Ssm, "DeleteParameter")
            .describe("Deletes a single parameter.")
            .input(FieldSpec::text("name").required())
            .emits("The raw DeleteParameter response, which has no members.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        ctx.aws
            .ssm()
            .delete_parameter()
            .name(args.required_str("name")?)
            .send()
            .await?;

        ctx.emit(self, json!({}));
        Ok(())
    }
}

pub struct DeleteParameters;

#[async_trait]
impl Block for DeleteParameters {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.ssm.delete_parameters",
            Service::Ssm,
            "DeleteParameters",
        )
        .describe("Deletes up to ten parameters in one call.")
        .input(FieldSpec::text_list("names").required())
        .emits("The raw DeleteParameters response, listing deleted and invalid names.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .delete_parameters()
            .set_names(Some(args.required_str_list("names")?))
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "deleted_parameters": response.deleted_parameters(),
                "invalid_parameters": response.invalid_parameters(),
            }),
        );
        Ok(())
    }
}

pub struct DescribeParameters;

#[async_trait]
impl Block for DescribeParameters {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.ssm.describe_parameters",
            Service::Ssm,
            "DescribeParameters",
        )
        .describe("Lists parameter metadata, without values.")
        .input(FieldSpec::json("parameter_filters"))
        .input(FieldSpec::integer("max_results"))
        .input(FieldSpec::text("next_token"))
        .emits("The raw DescribeParameters response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .describe_parameters()
            .set_parameter_filters(parameter_filters_from_json(args.raw("parameter_filters"))?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "parameters": response
                    .parameters()
                    .iter()
                    .map(parameter_metadata_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(GetParameter),
        Box::new(GetParameters),
        Box::new(GetParametersByPath),
        Box::new(PutParameter),
        Box::new(DeleteParameter),
        Box::new(DeleteParameters),
        Box::new(DescribeParameters),
    ]
}
