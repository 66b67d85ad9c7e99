use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::config::ConnectionSettings;
use crate::event::OutputEvent;

/// A single block invocation as received by the runner.
#[derive(Debug, Serialize, Deserialize)]
pub struct Invocation {
    /// Registered block name, e.g. `aws.rds.copy_db_snapshot`.
    pub block: String,
    /// Operation inputs, keyed by schema field name.
    #[serde(default)]
    pub input: Value,
    // Connection section for credential/region wiring
    #[serde(default)]
    pub connection: ConnectionSettings,
}

/// Everything a finished invocation produced.
#[derive(Debug, Serialize)]
pub struct InvocationResult {
    pub block: String,
    pub events: Vec<OutputEvent>,
}
