use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use jobsvc::config::EngineConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    jobsvc::setup_logging();

    // Configuration is built once per process and shared read-only
    // across invocations.
    let config = Arc::new(EngineConfig::from_env());

    run(service_fn(move |event: LambdaEvent<Value>| {
        let config = Arc::clone(&config);
        async move { jobsvc::engine::handler(&config, event).await }
    }))
    .await
}
