//! RouteLink CLI
//!
//! Argument definitions and output rendering for the `routelink-cli`
//! binary, kept in a library target so they can be tested directly.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, CoordinateArg, log_filter_from_verbosity};
