//! Job-service Lambda scaffold.
//!
//! This crate implements a two-Lambda architecture for the job service:
//! 1. An API Lambda that serves health endpoints behind an API Gateway proxy
//! 2. An Engine Lambda that consumes job batches from SQS
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - API Gateway as the HTTP front for the API Lambda
//! - SQS as the delivery mechanism for the Engine Lambda
//! - Tokio for async runtime
//!
//! Both binaries share this library: configuration loading, the HTTP
//! route table, and the queue consumer live here, while `src/bin/`
//! holds the thin Lambda bootstraps. Each binary builds its
//! configuration once at process start and moves it into the service
//! closure; nothing is global and nothing is mutated after startup.

// Module declarations
pub mod api;
pub mod config;
pub mod engine;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each
/// binary's `main`, before the Lambda runtime takes over.
///
/// The log level is taken from `RUST_LOG` when set and defaults to `info`.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
