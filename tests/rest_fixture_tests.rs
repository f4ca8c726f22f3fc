//! A realistic REST surface: 20 resources with 10 routes each, sharing
//! prefixes (`/api/v1/user...`, `/api/v1/pay...`) and mixing static,
//! param and wildcard segments.

use brrtrouter_radix::tree::Tree;
use http::Method;

const RESOURCES: [&str; 20] = [
    "users",
    "user-groups",
    "orders",
    "order-items",
    "products",
    "product-reviews",
    "payments",
    "payouts",
    "invoices",
    "inventory",
    "carts",
    "categories",
    "customers",
    "coupons",
    "shipments",
    "shipping-zones",
    "refunds",
    "reports",
    "webhooks",
    "warehouses",
];

struct Fixture {
    method: Method,
    template: String,
    handler: String,
}

fn fixtures() -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for resource in RESOURCES {
        let id = format!(":{}_id", resource.replace('-', "_"));
        let base = format!("/api/v1/{}", resource);
        let shapes = [
            (Method::GET, base.clone(), "list"),
            (Method::POST, base.clone(), "create"),
            (Method::GET, format!("{base}/search"), "search"),
            (Method::GET, format!("{base}/{id}"), "get"),
            (Method::PUT, format!("{base}/{id}"), "update"),
            (Method::DELETE, format!("{base}/{id}"), "delete"),
            (Method::GET, format!("{base}/{id}/history"), "history"),
            (Method::POST, format!("{base}/{id}/comments"), "comment"),
            (
                Method::GET,
                format!("{base}/{id}/comments/:comment_id"),
                "get_comment",
            ),
            (
                Method::GET,
                format!("{base}/{id}/attachments/*path"),
                "attachment",
            ),
        ];
        for (method, template, action) in shapes {
            fixtures.push(Fixture {
                method,
                template,
                handler: format!("{}_{}", resource, action),
            });
        }
    }
    fixtures
}

/// Substitute sample values into `template`, returning the concrete path
/// and the values in order.
fn concrete(template: &str, seed: usize) -> (String, Vec<String>) {
    let mut path = String::new();
    let mut values = Vec::new();
    for (i, segment) in template.split('/').enumerate() {
        if i > 0 {
            path.push('/');
        }
        if segment.starts_with(':') {
            let value = format!("v{}-{}", seed, values.len());
            path.push_str(&value);
            values.push(value);
        } else if segment.starts_with('*') {
            let value = format!("dir{}/file-{}.pdf", seed, values.len());
            path.push_str(&value);
            values.push(value);
        } else {
            path.push_str(segment);
        }
    }
    (path, values)
}

fn build(fixtures: &[Fixture]) -> Tree<String> {
    let mut tree = Tree::new();
    for f in fixtures {
        tree.add(&f.template, f.handler.clone(), &[f.method.clone()])
            .unwrap_or_else(|e| panic!("unexpected conflict for {} {}: {e}", f.method, f.template));
    }
    tree
}

#[test]
fn test_all_routes_register() {
    let fixtures = fixtures();
    assert_eq!(fixtures.len(), 200);

    let tree = build(&fixtures);
    assert_eq!(tree.len(), 200);
    assert_eq!(tree.max_param(), 2);

    let mut walked = 0;
    tree.walk(|_, _| walked += 1);
    assert_eq!(walked, 200);
}

#[test]
fn test_every_route_resolves_to_its_handler() {
    let fixtures = fixtures();
    let tree = build(&fixtures);

    for (seed, f) in fixtures.iter().enumerate() {
        let (path, expected) = concrete(&f.template, seed);
        let mut buffer = vec![""; tree.max_param()];
        let (route, tsr) = tree.find(&f.method, &path, &mut buffer);
        let route = route.unwrap_or_else(|| panic!("{} {} did not match", f.method, path));

        assert_eq!(route.handler(), &f.handler, "{} {}", f.method, path);
        assert_eq!(route.path(), f.template);
        assert!(!tsr);
        let captured: Vec<&str> = buffer[..route.params().len()].to_vec();
        assert_eq!(captured, expected, "{} {}", f.method, path);
    }
}

#[test]
fn test_search_is_not_captured_as_id() {
    let tree = build(&fixtures());
    let mut buffer = vec![""; tree.max_param()];

    let (route, _) = tree.find(&Method::GET, "/api/v1/user-groups/search", &mut buffer);
    assert_eq!(route.unwrap().handler(), "user-groups_search");
    let (route, _) = tree.find(&Method::DELETE, "/api/v1/user-groups/search", &mut buffer);
    assert_eq!(route.unwrap().handler(), "user-groups_delete");
    assert_eq!(buffer[0], "search");
}

#[test]
fn test_urls_round_trip() {
    let fixtures = fixtures();
    let tree = build(&fixtures);

    for (seed, f) in fixtures.iter().enumerate() {
        let (path, values) = concrete(&f.template, seed);
        let mut buffer = vec![""; tree.max_param()];
        let (route, _) = tree.find(&f.method, &path, &mut buffer);
        assert_eq!(route.unwrap().url(&values).unwrap(), path);
    }
}

#[test]
fn test_near_misses() {
    let tree = build(&fixtures());
    let mut buffer = vec![""; tree.max_param()];

    let cases = [
        (Method::GET, "/api/v1/user", false),
        (Method::GET, "/api/v1/users/", true),
        (Method::GET, "/api/v1/users/7/history/", true),
        (Method::GET, "/api/v1/users/7/unknown", false),
        (Method::PATCH, "/api/v1/users/7", false),
        (Method::GET, "/api/v2/users", false),
    ];
    for (method, path, tsr) in cases {
        let (route, got_tsr) = tree.find(&method, path, &mut buffer);
        assert!(route.is_none(), "{method} {path} unexpectedly matched");
        assert_eq!(got_tsr, tsr, "{method} {path}");
    }
}
