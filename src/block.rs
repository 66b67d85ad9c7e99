//! The uniform block contract: declarative schema in, one API call, one
//! output event out.

use async_trait::async_trait;
use serde_json::Value;

use crate::aws::AwsClients;
use crate::errors::BlockError;
use crate::event::{EventSink, OutputEvent};
use crate::schema::BlockSpec;

/// Per-invocation execution context handed to a block.
///
/// Built fresh for every invocation; no state survives between runs.
pub struct BlockContext<'a> {
    pub aws: &'a AwsClients,
    pub events: &'a dyn EventSink,
}

impl BlockContext<'_> {
    /// Publish `payload` as the block's output event.
    pub fn emit(&self, block: &dyn Block, payload: Value) {
        self.events.emit(OutputEvent::from_spec(&block.spec(), payload));
    }
}

/// A self-contained adapter around a single AWS API operation.
#[async_trait]
pub trait Block: Send + Sync {
    /// Declarative description of the block's inputs and output event.
    fn spec(&self) -> BlockSpec;

    /// Issue the wrapped API call once and emit the raw response.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for malformed inputs and `AwsError` when the
    /// underlying SDK call fails; no retry happens at this layer.
    async fn run(&self, ctx: &BlockContext<'_>, input: &Value) -> Result<(), BlockError>;
}
