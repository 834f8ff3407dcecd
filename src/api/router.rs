//! Route-table construction and dispatch for the API Lambda.

use std::sync::Arc;

use crate::api::gateway::{Request, Response};
use crate::api::health::Health;
use crate::config::ApiConfig;

type HandlerFn = Box<dyn Fn(&Request) -> Response + Send + Sync>;

struct Route {
    method: &'static str,
    path: String,
    handler: HandlerFn,
}

/// Exact-match route table mounted under the configured URL prefix.
///
/// Built once at process start and shared read-only across
/// invocations; dispatch takes no locks.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Builds the route table for the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let prefix = normalize_prefix(&config.url_prefix);
        let mut router = Self { routes: Vec::new() };
        router.register_health_routes(&prefix, Health::new(config));
        router
    }

    fn register_health_routes(&mut self, prefix: &str, health: Health) {
        let health = Arc::new(health);

        let status = Arc::clone(&health);
        self.get(
            format!("{prefix}/status"),
            Box::new(move |_| status.status()),
        );

        self.get(
            format!("{prefix}/healthcheck"),
            Box::new(move |_| health.healthcheck()),
        );
    }

    fn get(&mut self, path: String, handler: HandlerFn) {
        self.routes.push(Route {
            method: "GET",
            path,
            handler,
        });
    }

    /// Dispatches a request to its handler; unregistered routes get a
    /// plain 404.
    #[must_use]
    pub fn dispatch(&self, request: &Request) -> Response {
        for route in &self.routes {
            if route.method == request.method && route.path == request.path {
                return (route.handler)(request);
            }
        }
        Response::text(404, "404 page not found")
    }

    /// Registered paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.path.as_str())
    }
}

/// Normalizes the configured URL prefix for mounting: empty stays empty
/// (root-mounted), otherwise the prefix gets a leading slash and loses
/// any trailing slash.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
