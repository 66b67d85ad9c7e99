// Lambda bootstrap entry point for the block runner

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::{error, info};

use cloudblocks::core::models::{Invocation, InvocationResult};
use cloudblocks::dispatch::run_invocation;

/// Lambda handler for the runner. Parses one invocation, dispatches it to the
/// named block and responds with the emitted events.
async fn function_handler(event: LambdaEvent<Value>) -> Result<InvocationResult, Error> {
    let invocation: Invocation = serde_json::from_value(event.payload).map_err(|e| {
        error!("Failed to parse invocation: {e}");
        Error::from(format!("Failed to parse invocation: {e}"))
    })?;
    info!("Received invocation for block {}", invocation.block);

    run_invocation(invocation).await.map_err(|e| {
        error!("Block run failed: {e}");
        Error::from(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    cloudblocks::setup_logging();

    run(service_fn(function_handler)).await
}
