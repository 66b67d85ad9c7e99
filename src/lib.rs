/// cloudblocks - adapter blocks wrapping single AWS API operations.
///
/// Each block pairs a declarative schema (inputs, connection wiring, output
/// event) with an execution function that builds an SDK client, issues
/// exactly one request and republishes the raw response as an event.
///
/// # Architecture
///
/// The system uses:
/// - AWS SDK for Rust clients for RDS, Redshift Data, Secrets Manager and SSM
/// - A name-keyed registry over every built-in block
/// - A Lambda runner that dispatches one invocation per event
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use cloudblocks::core::models::Invocation;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     cloudblocks::setup_logging();
///
///     let invocation: Invocation = serde_json::from_value(json!({
///         "block": "aws.ssm.get_parameter",
///         "input": { "name": "/app/db-url", "with_decryption": true },
///         "connection": { "region": "us-east-1" },
///     }))?;
///
///     let result = cloudblocks::dispatch::run_invocation(invocation).await?;
///     for event in result.events {
///         println!("{}: {}", event.event, event.payload);
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod aws;
pub mod block;
pub mod blocks;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod event;
pub mod input;
pub mod registry;
pub mod schema;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each
/// runner process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
