//! Runs one invocation end to end: registry lookup, context wiring, block
//! execution, event collection.

use tracing::info;

use crate::aws::AwsClients;
use crate::block::BlockContext;
use crate::core::models::{Invocation, InvocationResult};
use crate::errors::BlockError;
use crate::event::BufferSink;
use crate::registry;

/// # Errors
///
/// Returns `UnknownBlock` for an unregistered name, otherwise whatever the
/// block itself raises.
pub async fn run_invocation(invocation: Invocation) -> Result<InvocationResult, BlockError> {
    let block = registry::lookup(&invocation.block)
        .ok_or_else(|| BlockError::UnknownBlock(invocation.block.clone()))?;
    let spec = block.spec();
    info!(block = %spec.name, operation = %spec.operation, "running block");

    let settings = invocation.connection.clone().or_env();
    let aws = AwsClients::new(&settings).await?;
    let sink = BufferSink::default();
    let input = spec.apply_defaults(&invocation.input);

    let ctx = BlockContext {
        aws: &aws,
        events: &sink,
    };
    block.run(&ctx, &input).await?;

    Ok(InvocationResult {
        block: invocation.block,
        events: sink.drain(),
    })
}
