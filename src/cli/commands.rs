use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{crate_version, Parser, Subcommand};
use http::Method;

use crate::route_table::RouteTable;
use crate::router::{RouteLookup, Router};
use crate::runtime_config::RouterConfig;

/// Command-line interface for BRRTRouter route tables
#[derive(Parser)]
#[command(name = "brrtree", version = crate_version!())]
#[command(about = "Inspect and query BRRTRouter route tables", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the route tree built from a route table
    Print {
        /// Path to the route table (YAML)
        #[arg(short, long, env = "BRRTR_ROUTES")]
        routes: PathBuf,
    },
    /// Resolve a request against a route table
    Match {
        /// Path to the route table (YAML)
        #[arg(short, long, env = "BRRTR_ROUTES")]
        routes: PathBuf,

        /// HTTP method, e.g. GET
        method: String,

        /// Request path, e.g. /pets/42
        path: String,
    },
    /// Generate a URL from a registered route template
    Url {
        /// Path to the route table (YAML)
        #[arg(short, long, env = "BRRTR_ROUTES")]
        routes: PathBuf,

        /// HTTP method the route is registered under
        method: String,

        /// Route template exactly as registered, e.g. /pets/:id
        pattern: String,

        /// One value per parameter, in path order
        values: Vec<String>,
    },
}

fn parse_method(name: &str) -> Result<Method> {
    Method::from_bytes(name.to_ascii_uppercase().as_bytes())
        .map_err(|_| anyhow!("invalid HTTP method '{}'", name))
}

/// Execute `cli`, writing command output to `out`.
///
/// Returns `Ok(false)` when a `match` finds nothing.
pub fn run_cli<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    match &cli.command {
        Commands::Print { routes } => {
            let tree = RouteTable::load(routes)?.build_tree()?;
            tree.print(out)?;
            Ok(true)
        }
        Commands::Match {
            routes,
            method,
            path,
        } => {
            let method = parse_method(method)?;
            let tree = RouteTable::load(routes)?.build_tree()?;
            let router = Router::from_tree(tree, RouterConfig::from_env());
            let found = match router.route(&method, path) {
                RouteLookup::Matched(m) => {
                    writeln!(out, "{}", m.handler())?;
                    for (name, value) in &m.path_params {
                        writeln!(out, "  {} = {}", name, value)?;
                    }
                    true
                }
                RouteLookup::Redirect { to } => {
                    writeln!(out, "redirect -> {}", to)?;
                    true
                }
                RouteLookup::NotFound => {
                    writeln!(out, "no match")?;
                    false
                }
            };
            Ok(found)
        }
        Commands::Url {
            routes,
            method,
            pattern,
            values,
        } => {
            let method = parse_method(method)?;
            let tree = RouteTable::load(routes)?.build_tree()?;
            let mut url = None;
            tree.walk(|route, registered| {
                if url.is_none() && *registered == method && route.path() == pattern {
                    url = Some(route.url(values));
                }
            });
            let url = url.ok_or_else(|| anyhow!("no {} route registered as {}", method, pattern))??;
            writeln!(out, "{}", url)?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run(args: &[&str]) -> (bool, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let found = run_cli(&cli, &mut out).unwrap();
        (found, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_match_reports_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let routes = dir.path().join("routes.yaml");
        fs::write(
            &routes,
            "routes:\n  - { method: GET, path: \"/users/:id\", handler: get_user }\n",
        )
        .unwrap();
        let routes = routes.to_str().unwrap();

        let (found, out) = run(&["brrtree", "match", "-r", routes, "get", "/users/9"]);
        assert!(found);
        assert_eq!(out, "get_user\n  id = 9\n");

        let (found, out) = run(&["brrtree", "match", "-r", routes, "GET", "/users/9/"]);
        assert!(found);
        assert_eq!(out, "redirect -> /users/9\n");

        let (found, out) = run(&["brrtree", "match", "-r", routes, "POST", "/users/9"]);
        assert!(!found);
        assert_eq!(out, "no match\n");
    }
}
