//! Run Command blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::{command_to_value, targets_from_json};
use crate::block::{Block, BlockContext};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct SendCommand;

#[async_trait]
impl Block for SendCommand {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.send_command", Service::Ssm, "SendCommand")
            .describe("Runs an SSM document on managed instances.")
            .input(FieldSpec::text("document_name").required()
                .describe("SSM document, e.g. AWS-RunShellScript."))
            .input(FieldSpec::text("document_version"))
            .input(FieldSpec::text_list("instance_ids"))
            .input(FieldSpec::json("targets")
                .describe("List of {key, values} target objects; alternative to instance_ids."))
            .input(FieldSpec::json("parameters")
                .describe("Document parameters as an object of string lists."))
            .input(FieldSpec::text("comment"))
            .input(FieldSpec::integer("timeout_seconds"))
            .input(FieldSpec::text("max_concurrency"))
            .input(FieldSpec::text("max_errors"))
            .input(FieldSpec::text("output_s3_bucket_name"))
            .input(FieldSpec::text("output_s3_key_prefix"))
            .emits("The raw SendCommand response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .send_command()
            .document_name(args.required_str("document_name")?)
            .set_document_version(args.opt_str("document_version")?)
            .set_instance_ids(args.opt_str_list("instance_ids")?)
            .set_targets(targets_from_json(args.raw("targets"))?)
            .set_parameters(args.opt_str_list_map("parameters")?)
            .set_comment(args.opt_str("comment")?)
            .set_timeout_seconds(args.opt_i32("timeout_seconds")?)
            .set_max_concurrency(args.opt_str("max_concurrency")?)
            .set_max_errors(args.opt_str("max_errors")?)
            .set_output_s3_bucket_name(args.opt_str("output_s3_bucket_name")?)
            .set_output_s3_key_prefix(args.opt_str("output_s3_key_prefix")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "command": response.command().map(command_to_value) }),
        );
        Ok(())
    }
}

pub struct GetCommandInvocation;

#[async_trait]
impl Block for GetCommandInvocation {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.ssm.get_command_invocation",
            Service::Ssm,
            "GetCommandInvocation",
        )
        .describe("Reads the per-instance result of a sent command.")
        .input(FieldSpec::text("command_id").required())
        .input(FieldSpec::text("instance_id").required())
        .input(FieldSpec::text("plugin_name"))
        .emits("The raw GetCommandInvocation response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .get_command_invocation()
            .command_id(args.required_str("command_id")?)
            .instance_id(args.required_str("instance_id")?)
            .set_plugin_name(args.opt_str("plugin_name")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "command_id": response.command_id(),
                "instance_id": response.instance_id(),
                "comment": response.comment(),
                "document_name": response.document_name(),
                "document_version": response.document_version(),
                "plugin_name": response.plugin_name(),
                "status": response.status().map(|status| status.as_str()),
                "status_details": response.status_details(),
                "response_code": response.response_code(),
                "execution_start_date_time": response.execution_start_date_time(),
                "execution_elapsed_time": response.execution_elapsed_time(),
                "execution_end_date_time": response.execution_end_date_time(),
                "standard_output_content": response.standard_output_content(),
                "standard_output_url": response.standard_output_url(),
                "standard_error_content": response.standard_error_content(),
                "standard_error_url": response.standard_error_url(),
            }),
        );
        Ok(())
    }
}

pub struct ListCommands;

#[async_trait]
impl Block for ListCommands {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new("aws.ssm.list_commands", Service::Ssm, "ListCommands")
            .describe("Lists commands sent from the account.")
            .input(FieldSpec::text("command_id"))
            .input(FieldSpec::text("instance_id"))
            .input(FieldSpec::integer("max_results"))
            .input(FieldSpec::text("next_token"))
            .emits("The raw ListCommands response page.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .ssm()
            .list_commands()
            .set_command_id(args.opt_str("command_id")?)
            .set_instance_id(args.opt_str("instance_id")?)
            .set_max_results(args.opt_i32("max_results")?)
            .set_next_token(args.opt_str("next_token")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "commands": response
                    .commands()
                    .iter()
                    .map(command_to_value)
                    .collect::<Vec<_>>(),
                "next_token": response.next_token(),
            }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(SendCommand),
        Box::new(GetCommandInvocation),
        Box::new(ListCommands),
    ]
}
