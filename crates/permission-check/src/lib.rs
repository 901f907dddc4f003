//! Command line front end for permission clauses and catalogs.
//!
//! The `permission-check` binary evaluates a single clause against a set
//! of roles, prints the compiled reverse Polish form of a clause, or lists
//! the targets of a catalog definition a principal may access.
//!
//! # Configuration
//!
//! - `PERMISSION_CHECK_LOG_LEVEL`: Log verbosity (trace, debug, info, warn,
//!   error)
//! - `PERMISSION_CHECK_CATALOG`: Catalog definition used when the `catalog`
//!   command is given no path

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
