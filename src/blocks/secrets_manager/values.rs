//! Secret value blocks.

use async_trait::async_trait;
use serde_json::{Value, json};

use super::types::blob_from_base64;
use crate::block::{Block, BlockContext};
use crate::blocks::convert::{base64_blob, opt_iso8601};
use crate::errors::BlockError;
use crate::input::Inputs;
use crate::schema::{BlockSpec, FieldSpec, Service};

pub struct GetSecretValue;

#[async_trait]
impl Block for GetSecretValue {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.get_secret_value",
            Service::SecretsManager,
            "GetSecretValue",
        )
        .describe("Retrieves the decrypted value of a secret version.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::text("version_id"))
        .input(FieldSpec::text("version_stage")
            .describe("Staging label, e.g. AWSCURRENT; defaults server-side."))
        .emits("The raw GetSecretValue response; binary payloads are base64-encoded.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .get_secret_value()
            .secret_id(args.required_str("secret_id")?)
            .set_version_id(args.opt_str("version_id")?)
            .set_version_stage(args.opt_str("version_stage")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "version_id": response.version_id(),
                "secret_string": response.secret_string(),
                "secret_binary": response.secret_binary().map(base64_blob),
                "version_stages": response.version_stages(),
                "created_date": opt_iso8601(response.created_date()),
            }),
        );
        Ok(())
    }
}

pub struct PutSecretValue;

#[async_trait]
impl Block for PutSecretValue {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.put_secret_value",
            Service::SecretsManager,
            "PutSecretValue",
        )
        .describe("Stores a new version of an existing secret.")
        .input(FieldSpec::text("secret_id").required())
        .input(FieldSpec::text("secret_string"))
        .input(FieldSpec::text("secret_binary")
            .describe("Base64-encoded binary payload."))
        .input(FieldSpec::text_list("version_stages"))
        .emits("The raw PutSecretValue response.")
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
            .put_secret_value()
            .secret_id(args.required_str("secret_id")?)
            .set_secret_string(args.opt_str("secret_string")?)
            .set_secret_binary(secret_binary)
            .set_version_stages(args.opt_str_list("version_stages")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({
                "arn": response.arn(),
                "name": response.name(),
                "version_id": response.version_id(),
                "version_stages": response.version_stages(),
            }),
        );
        Ok(())
    }
}

pub struct GetRandomPassword;

#[async_trait]
impl Block for GetRandomPassword {
    fn spec(&self) -> BlockSpec {
        BlockSpec::new(
            "aws.secrets_manager.get_random_password",
            Service::SecretsManager,
            "GetRandomPassword",
        )
        .describe("Generates a random password.")
        .input(FieldSpec::integer("password_length").with_default(json!(32)))
        .input(FieldSpec::text("exclude_characters"))
        .input(FieldSpec::bool("exclude_numbers"))
        .input(FieldSpec::bool("exclude_punctuation"))
        .input(FieldSpec::bool("exclude_uppercase"))
        .input(FieldSpec::bool("exclude_lowercase"))
        .input(FieldSpec::bool("include_space"))
        .input(FieldSpec::bool("require_each_included_type"))
        .emits("The raw GetRandomPassword response.")
    }

    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError> {
        let args = Inputs::new(input);
        let response = ctx
            .aws
            .secrets_manager()
            .get_random_password()
            .set_password_length(args.opt_i64("password_length")?)
            .set_exclude_characters(args.opt_str("exclude_characters")?)
            .set_exclude_numbers(args.opt_bool("exclude_numbers")?)
            .set_exclude_punctuation(args.opt_bool("exclude_punctuation")?)
            .set_exclude_uppercase(args.opt_bool("exclude_uppercase")?)
            .set_exclude_lowercase(args.opt_bool("exclude_lowercase")?)
            .set_include_space(args.opt_bool("include_space")?)
            .set_require_each_included_type(args.opt_bool("require_each_included_type")?)
            .send()
            .await?;

        ctx.emit(
            self,
            json!({ "random_password": response.random_password() }),
        );
        Ok(())
    }
}

pub(crate) fn blocks() -> Vec<Box<dyn Block>> {
    vec![
        Box::new(GetSecretValue),
        Box::new(PutSecretValue),
        Box::new(GetRandomPassword),
    ]
}
