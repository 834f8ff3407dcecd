//! API Lambda handler - thin dispatch through the route table.
//!
//! This module handles:
//! - Decoding the gateway event into the internal request model
//! - Dispatching the request through the [`Router`]
//! - Encoding the handler's response back into proxy-response JSON

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::gateway;
use crate::api::gateway::Response;
use crate::api::router::Router;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails today: a payload that matches neither gateway shape is
/// answered with a 400 proxy response rather than an invocation error.
pub async fn function_handler(router: &Router, event: LambdaEvent<Value>) -> Result<Value, Error> {
    debug!("API Lambda received request: {:?}", event.payload);

    let request = match gateway::request_from_event(&event.payload) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting malformed gateway event: {}", e);
            return Ok(gateway::response_to_event(&Response::text(
                400,
                "Bad Request",
            )));
        }
    };

    let response = router.dispatch(&request);
    debug!(
        method = %request.method,
        path = %request.path,
        status = response.status,
        "Routed request"
    );

    Ok(gateway::response_to_event(&response))
}
