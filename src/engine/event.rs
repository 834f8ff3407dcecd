//! Serde models for the SQS event shape delivered to the Engine Lambda.

use serde::Deserialize;

/// A batch of queue messages delivered to a single invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct SqsEvent {
    /// A payload without a `Records` key decodes as an empty batch.
    #[serde(default, rename = "Records")]
    pub records: Vec<SqsMessage>,
}

/// A single queue message. Read-only: logged and discarded; no schema
/// is enforced on the body.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct SqsMessage {
    #[serde(default, rename = "messageId")]
    pub message_id: String,
    #[serde(default, rename = "eventSource")]
    pub event_source: String,
    #[serde(default)]
    pub body: String,
}
