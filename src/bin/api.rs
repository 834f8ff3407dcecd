use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use jobsvc::api::router::Router;
use jobsvc::config::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    jobsvc::setup_logging();

    // Configuration and the route table are built once per process and
    // shared read-only across invocations.
    let config = ApiConfig::from_env();
    let router = Arc::new(Router::new(config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let router = Arc::clone(&router);
        async move { jobsvc::api::handler(&router, event).await }
    }))
    .await
}
