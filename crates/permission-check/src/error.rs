//! Semantic error types for the command line tool.

use thiserror::Error;

/// Errors that can occur while preparing or running a check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No catalog path was given on the command line or in the environment.
    #[error("no catalog path given; pass one or set PERMISSION_CHECK_CATALOG")]
    MissingCatalog,

    /// The catalog definition could not be loaded.
    #[error(transparent)]
    Catalog(#[from] permission_catalog::CatalogError),

    /// The clause failed to compile.
    #[error("clause failed to compile: {0}")]
    Clause(#[from] permission_clause::ClauseError),
}
