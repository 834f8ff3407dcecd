//! Health endpoints: the only behavior behind the route table.

use serde::Serialize;

use crate::api::gateway::Response;
use crate::config::ApiConfig;

#[derive(Debug, Serialize)]
struct StatusBody<'a> {
    status: &'static str,
    stage: &'a str,
    region: &'a str,
}

/// Controller for the health endpoints.
pub struct Health {
    config: ApiConfig,
}

impl Health {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Operational status: reports the deployment stage and region
    /// verbatim, empty fields included.
    #[must_use]
    pub fn status(&self) -> Response {
        let body = StatusBody {
            status: "ok",
            stage: &self.config.base.stage_name,
            region: &self.config.base.region_name,
        };
        // Serializing a plain struct of strings cannot fail
        Response::json(200, serde_json::to_string(&body).unwrap_or_default())
    }

    /// Liveness probe. Answers `Ok` even when configuration is empty or
    /// malformed so orchestration layers can still see the process alive.
    #[must_use]
    pub fn healthcheck(&self) -> Response {
        Response::text(200, "Ok")
    }
}
