//! # Runtime Configuration Module
//!
//! Environment variable based configuration for the request-facing
//! [`Router`](crate::router::Router).
//!
//! ## Environment Variables
//!
//! ### `BRRTR_REDIRECT_TRAILING_SLASH`
//!
//! When enabled, a lookup that misses but would hit with one trailing `/`
//! added or removed resolves to a redirect. When disabled it is a plain
//! not-found. Default: `true`.
//!
//! ### `BRRTR_PRINT_ROUTES`
//!
//! Print the route tree to stdout when the router is built. Default: `false`.
//!
//! ### `BRRTR_SLOW_MATCH_US`
//!
//! Lookups slower than this many microseconds are logged at `warn`.
//! Default: `1000`.
//!
//! Booleans accept `1/true/yes/on` and `0/false/no/off` in any case.
//! Unparseable values fall back to the default.
//!
//! ## Usage
//!
//! ```rust
//! use brrtrouter_radix::runtime_config::RouterConfig;
//!
//! let config = RouterConfig::from_env();
//! println!("Slow match threshold: {:?}", config.slow_match_threshold);
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Router behaviour loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Turn trailing-slash candidates into redirects (default: true)
    pub redirect_trailing_slash: bool,
    /// Print the route tree when the router is built (default: false)
    pub print_routes: bool,
    /// Lookups slower than this are logged at `warn` (default: 1 ms)
    pub slow_match_threshold: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            redirect_trailing_slash: true,
            print_routes: false,
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|val| parse_bool(&val))
                .unwrap_or(default)
        };
        let slow_match_us = lookup("BRRTR_SLOW_MATCH_US")
            .and_then(|val| val.trim().parse().ok())
            .unwrap_or(DEFAULT_SLOW_MATCH_US);

        Self {
            redirect_trailing_slash: flag(
                "BRRTR_REDIRECT_TRAILING_SLASH",
                defaults.redirect_trailing_slash,
            ),
            print_routes: flag("BRRTR_PRINT_ROUTES", defaults.print_routes),
            slow_match_threshold: Duration::from_micros(slow_match_us),
        }
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
