//! Output events and the sinks that receive them.
//!
//! Emission is a block's only output channel: on success it publishes the raw
//! API response, mapped to JSON, as a single [`OutputEvent`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;
use uuid::Uuid;

use crate::schema::BlockSpec;

#[derive(Debug, Clone, Serialize)]
pub struct OutputEvent {
    pub id: String,
    /// Event name from the block's output spec.
    pub event: String,
    /// Name of the block that emitted the event.
    pub block: String,
    pub emitted_at: DateTime<Utc>,
    pub payload: Value,
}

impl OutputEvent {
    #[must_use]
    pub fn from_spec(spec: &BlockSpec, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event: spec.output.event.clone(),
            block: spec.name.clone(),
            emitted_at: Utc::now(),
            payload,
        }
    }
}

/// Receives events as blocks emit them.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: OutputEvent);
}

/// Collects emitted events in memory; the runner drains it after the block
/// returns.
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<OutputEvent>>,
}

impl BufferSink {
    #[must_use]
    pub fn drain(&self) -> Vec<OutputEvent> {
        self.events
            .lock()
            .map(|mut guard| guard.drain(..).collect())
            .unwrap_or_default()
    }
}

impl EventSink for BufferSink {
    fn emit(&self, event: OutputEvent) {
        if let Ok(mut guard) = self.events.lock() {
            guard.push(event);
        }
    }
}

/// Writes each event to the tracing log instead of buffering it; useful when
/// driving blocks outside the runner.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: OutputEvent) {
        tracing::info!(block = %event.block, event = %event.event, "block emitted event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BlockSpec, Service};
    use serde_json::json;

    #[test]
    fn buffer_sink_collects_and_drains() {
        let spec = BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter");
        let sink = BufferSink::default();
        sink.emit(OutputEvent::from_spec(&spec, json!({"parameter": null})));
        sink.emit(OutputEvent::from_spec(&spec, json!({"parameter": null})));

        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, "aws.ssm.get_parameter");
        assert_ne!(events[0].id, events[1].id);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn log_sink_accepts_events() {
        let spec = BlockSpec::new("aws.ssm.get_parameter", Service::Ssm, "GetParameter");
        LogSink.emit(OutputEvent::from_spec(&spec, json!({})));
    }
}
