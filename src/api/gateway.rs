//! Translation boundary between API Gateway proxy events and the
//! crate's internal request/response model.
//!
//! Both proxy payload shapes are accepted: REST APIs send
//! `httpMethod` + `path` (payload format v1), HTTP APIs send
//! `requestContext.http.method` + `rawPath` (v2). Handlers never see
//! gateway JSON; they work on [`Request`] and [`Response`] only.

use serde_json::{Value, json};

use crate::errors::EventError;

/// Internal request model: what the router needs, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
}

/// Internal response model produced by route handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "application/json; charset=utf-8",
            body,
        }
    }

    #[must_use]
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.into(),
        }
    }
}

/// Decodes an API Gateway proxy event into a [`Request`].
///
/// # Errors
///
/// Returns an error if the payload carries neither the v1 nor the v2
/// method/path fields.
pub fn request_from_event(payload: &Value) -> Result<Request, EventError> {
    let method = payload
        .get("httpMethod")
        .and_then(|v| v.as_str())
        .or_else(|| {
            payload
                .pointer("/requestContext/http/method")
                .and_then(|v| v.as_str())
        })
        .ok_or_else(|| EventError::Gateway("missing request method".to_string()))?;

    let path = payload
        .get("path")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("rawPath").and_then(|v| v.as_str()))
        .ok_or_else(|| EventError::Gateway("missing request path".to_string()))?;

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
    })
}

/// Encodes a [`Response`] into the proxy-response JSON the gateway expects.
#[must_use]
pub fn response_to_event(response: &Response) -> Value {
    json!({
        "statusCode": response.status,
        "headers": { "Content-Type": response.content_type },
        "body": response.body,
    })
}
