//! The closed set of HTTP methods a route tree dispatches on.
//!
//! Every node that terminates a route keeps one slot per standard verb, so
//! the verb has to be turned into a slot index. Extension methods have no
//! slot and can never be registered.

use http::Method;

/// Number of per-node method slots.
pub const METHOD_COUNT: usize = 9;

/// The nine standard verbs, in slot order.
pub static ALL_METHODS: [Method; METHOD_COUNT] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
    Method::PATCH,
];

/// Slot index for `method`, or `None` for extension methods.
#[inline]
#[must_use]
pub fn method_index(method: &Method) -> Option<usize> {
    let index = match method.as_str() {
        "GET" => 0,
        "HEAD" => 1,
        "POST" => 2,
        "PUT" => 3,
        "DELETE" => 4,
        "CONNECT" => 5,
        "OPTIONS" => 6,
        "TRACE" => 7,
        "PATCH" => 8,
        _ => return None,
    };
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_matches_all_methods() {
        for (i, method) in ALL_METHODS.iter().enumerate() {
            assert_eq!(method_index(method), Some(i));
        }
    }

    #[test]
    fn test_extension_method_has_no_slot() {
        let purge = Method::from_bytes(b"PURGE").unwrap();
        assert_eq!(method_index(&purge), None);
    }
}
