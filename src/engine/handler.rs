//! Engine Lambda handler. Logs each queue message and acknowledges the
//! batch by returning success.
//!
//! There is intentionally no job dispatch, error classification, or
//! retry policy here: the consumer is the visible placeholder for the
//! job-processing pipeline and must stay a log-and-succeed loop until
//! that pipeline exists.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::event::SqsEvent;
use crate::errors::EventError;

pub use self::function_handler as handler;

/// Lambda handler for the Engine entrypoint.
///
/// # Errors
///
/// Returns an error only when the payload is not well-formed SQS event
/// JSON; any well-formed batch, including the empty one, succeeds.
pub async fn function_handler(
    config: &EngineConfig,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    debug!(config = ?config, "Engine Lambda invoked");

    let batch: SqsEvent = serde_json::from_value(event.payload).map_err(EventError::from)?;

    let processed = process_batch(&batch);
    debug!(processed, "Queue batch complete");

    Ok(())
}

/// Logs one diagnostic line per message and returns how many were seen.
///
/// The batch is inert: nothing is parsed or mutated, and the hosting
/// platform acknowledges it on normal return.
pub fn process_batch(batch: &SqsEvent) -> usize {
    for message in &batch.records {
        info!(
            message_id = %message.message_id,
            event_source = %message.event_source,
            body = %message.body,
            "Received queue message"
        );
    }
    batch.records.len()
}
