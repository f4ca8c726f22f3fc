// Performance-focused tests for router scalability
//
// These tests check that lookup cost tracks path length rather than the
// number of registered routes.

use super::{RouteLookup, Router, RouterBuilder};
use crate::runtime_config::RouterConfig;
use http::Method;
use std::time::Instant;

fn build_router(routes: &[(&str, String)]) -> Router<String> {
    let mut builder = RouterBuilder::new(RouterConfig::default());
    for (path, handler) in routes {
        builder
            .add(path, handler.clone(), &[Method::GET])
            .unwrap_or_else(|e| panic!("failed to add {path}: {e}"));
    }
    builder.build()
}

fn is_match(lookup: &RouteLookup<'_, '_, String>) -> bool {
    matches!(lookup, RouteLookup::Matched(_))
}

#[test]
fn test_router_performance_with_many_routes() {
    let paths: Vec<String> = (0..500)
        .map(|i| format!("/api/v1/resource{}/:id", i))
        .collect();
    let routes: Vec<(&str, String)> = paths
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_str(), format!("handler_{}", i)))
        .collect();
    let router = build_router(&routes);

    let start = Instant::now();
    for _ in 0..1000 {
        match router.route(&Method::GET, "/api/v1/resource250/123") {
            RouteLookup::Matched(m) => assert_eq!(m.handler(), "handler_250"),
            other => panic!("expected a match, got {other:?}"),
        }
    }
    let duration = start.elapsed();

    // Generous bound: unoptimized test builds are far slower than release
    assert!(
        duration.as_millis() < 500,
        "Router performance degraded: {}ms for 1000 lookups with 500 routes",
        duration.as_millis()
    );
}

#[test]
fn test_router_worst_case_performance() {
    let routes = vec![
        ("/a", "handler_a".to_string()),
        ("/a/b", "handler_ab".to_string()),
        ("/a/b/c", "handler_abc".to_string()),
        ("/a/b/c/d", "handler_abcd".to_string()),
        ("/a/b/c/d/e", "handler_abcde".to_string()),
        ("/a/b/c/d/e/f", "handler_abcdef".to_string()),
    ];
    let router = build_router(&routes);

    let start = Instant::now();
    for _ in 0..1000 {
        assert!(is_match(&router.route(&Method::GET, "/a/b/c/d/e/f")));
    }
    let duration = start.elapsed();

    assert!(
        duration.as_millis() < 200,
        "Deep path matching too slow: {}ms",
        duration.as_millis()
    );
}

#[test]
fn test_router_common_prefix_efficiency() {
    let routes = vec![
        ("/api/v1/users", "list_users".to_string()),
        ("/api/v1/users/:id", "get_user".to_string()),
        ("/api/v1/users/:id/profile", "get_profile".to_string()),
        ("/api/v1/posts", "list_posts".to_string()),
        ("/api/v1/posts/:id", "get_post".to_string()),
        ("/api/v2/users", "list_users_v2".to_string()),
        ("/api/v2/posts", "list_posts_v2".to_string()),
    ];
    let router = build_router(&routes);

    assert!(is_match(&router.route(&Method::GET, "/api/v1/users")));
    assert!(is_match(&router.route(&Method::GET, "/api/v1/users/123")));
    assert!(is_match(
        &router.route(&Method::GET, "/api/v1/users/123/profile")
    ));
    assert!(is_match(&router.route(&Method::GET, "/api/v1/posts")));
    assert!(is_match(&router.route(&Method::GET, "/api/v2/users")));
    assert!(!is_match(&router.route(&Method::GET, "/api/v3/users")));
}

#[test]
fn test_router_parameter_extraction_performance() {
    let routes = vec![(
        "/api/:version/users/:user_id/posts/:post_id/comments/:comment_id",
        "get_comment".to_string(),
    )];
    let router = build_router(&routes);

    let start = Instant::now();
    for _ in 0..1000 {
        match router.route(&Method::GET, "/api/v1/users/123/posts/456/comments/789") {
            RouteLookup::Matched(m) => {
                assert_eq!(m.path_params.len(), 4);
                // Stays on the stack below MAX_INLINE_PARAMS
                assert!(!m.path_params.spilled());
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }
    let duration = start.elapsed();

    assert!(
        duration.as_millis() < 200,
        "Parameter extraction too slow: {}ms",
        duration.as_millis()
    );
}
