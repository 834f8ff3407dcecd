use jobsvc::api::gateway::Request;
use jobsvc::api::router::Router;
use jobsvc::config::{ApiConfig, BaseConfig};

fn api_config(url_prefix: &str) -> ApiConfig {
    ApiConfig {
        base: BaseConfig {
            stage_name: "test".to_string(),
            region_name: "eu-central-1".to_string(),
        },
        job_table_name: String::new(),
        job_queue_name: String::new(),
        url_prefix: url_prefix.to_string(),
    }
}

fn get(path: &str) -> Request {
    Request {
        method: "GET".to_string(),
        path: path.to_string(),
    }
}

#[test]
fn empty_prefix_mounts_routes_at_root() {
    let router = Router::new(api_config(""));

    assert_eq!(router.dispatch(&get("/status")).status, 200);
    assert_eq!(router.dispatch(&get("/healthcheck")).status, 200);
}

#[test]
fn prefixed_routes_are_reachable_under_the_prefix_only() {
    let router = Router::new(api_config("/v1"));

    assert_eq!(router.dispatch(&get("/v1/status")).status, 200);
    assert_eq!(router.dispatch(&get("/v1/healthcheck")).status, 200);

    // Root-mounted paths are not registered on a prefixed router
    assert_eq!(router.dispatch(&get("/status")).status, 404);
    assert_eq!(router.dispatch(&get("/healthcheck")).status, 404);
}

#[test]
fn prefix_without_leading_slash_is_normalized() {
    let router = Router::new(api_config("v1"));

    let paths: Vec<&str> = router.paths().collect();
    assert_eq!(paths, vec!["/v1/status", "/v1/healthcheck"]);
}

#[test]
fn trailing_slash_in_prefix_is_stripped() {
    let router = Router::new(api_config("/v1/"));

    assert_eq!(router.dispatch(&get("/v1/status")).status, 200);
    assert_eq!(router.dispatch(&get("/v1//status")).status, 404);
}

#[test]
fn unknown_path_is_404() {
    let router = Router::new(api_config(""));

    let response = router.dispatch(&get("/jobs"));
    assert_eq!(response.status, 404);
    assert_eq!(response.body, "404 page not found");
}

#[test]
fn wrong_method_is_404() {
    let router = Router::new(api_config(""));

    let request = Request {
        method: "POST".to_string(),
        path: "/status".to_string(),
    };
    assert_eq!(router.dispatch(&request).status, 404);
}
