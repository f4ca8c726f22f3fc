//! # CLI Module
//!
//! Command-line access to route tables for the `brrtree` binary.
//!
//! ## Commands
//!
//! ### `print`
//!
//! Build the tree from a route table and print its structure:
//!
//! ```bash
//! brrtree print --routes routes.yaml
//! ```
//!
//! ### `match`
//!
//! Resolve a request and show the handler and captured parameters:
//!
//! ```bash
//! brrtree match --routes routes.yaml GET /pets/42
//! ```
//!
//! Exits non-zero when nothing matches. A trailing-slash redirect is
//! reported as such.
//!
//! ### `url`
//!
//! Generate a URL from a registered route template:
//!
//! ```bash
//! brrtree url --routes routes.yaml GET /pets/:id 42
//! ```

mod commands;

pub use commands::{run_cli, Cli, Commands};
