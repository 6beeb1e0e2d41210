//! Error types and handling for Bundlesmith
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Taxonomy: `NotFound` (a root definition is absent), `InvalidDefinition`
//! (dependency block missing or unparsable), `DependencyResolution` (a required
//! nested reference is unresolvable through every search root), `CycleDetected`
//! (raised only under strict cycle policy; the default policy treats a
//! re-encountered node as already included). Everything else is plumbing.

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::Category;

/// Main error type for Bundlesmith operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlesmithError {
    #[error("{category} definition '{id}' not found")]
    #[diagnostic(
        code(bundlesmith::resolve::not_found),
        help("Check the id and that every search root has a '{category}' directory")
    )]
    NotFound { category: Category, id: String },

    #[error("Invalid definition {category}#{id}: {reason}")]
    #[diagnostic(
        code(bundlesmith::resolve::invalid_definition),
        help(
            "Agent, task and template documents must start with a '---' delimited block carrying a 'dependencies' mapping; an empty mapping declares zero dependencies"
        )
    )]
    InvalidDefinition {
        category: Category,
        id: String,
        reason: String,
    },

    #[error("Required resource {category}#{id} (referenced by {wanted_by}) not found in any search root")]
    #[diagnostic(
        code(bundlesmith::resolve::dependency),
        help("Fix the reference, add the file, or mark the entry 'required: false' to skip it")
    )]
    DependencyResolution {
        category: Category,
        id: String,
        wanted_by: String,
    },

    #[error("Dependency cycle detected: {chain}")]
    #[diagnostic(
        code(bundlesmith::resolve::cycle),
        help("Break the reference chain, or drop --strict-cycles to tolerate cycles as already-included")
    )]
    CycleDetected { chain: String },

    #[error("Failed to resolve member '{member}' of team '{team}': {source}")]
    #[diagnostic(code(bundlesmith::resolve::team_member))]
    TeamMemberFailed {
        team: String,
        member: String,
        #[source]
        source: Box<BundlesmithError>,
    },

    #[error("Failed to read {path}: {reason}")]
    #[diagnostic(code(bundlesmith::fs::read_failed))]
    ReadFailed { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(bundlesmith::fs::write_failed))]
    WriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundlesmith::fs::io_error))]
    IoError { message: String },

    #[error("Build finished with {failed} failed unit(s)")]
    #[diagnostic(
        code(bundlesmith::build::failed),
        help("See the failure records above for the offending unit ids")
    )]
    BuildFailed { failed: usize },
}

impl From<std::io::Error> for BundlesmithError {
    fn from(err: std::io::Error) -> Self {
        BundlesmithError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for Bundlesmith operations
pub type Result<T> = miette::Result<T, BundlesmithError>;

pub fn not_found(category: Category, id: impl Into<String>) -> BundlesmithError {
    BundlesmithError::NotFound {
        category,
        id: id.into(),
    }
}

pub fn invalid_definition(
    category: Category,
    id: impl Into<String>,
    reason: impl Into<String>,
) -> BundlesmithError {
    BundlesmithError::InvalidDefinition {
        category,
        id: id.into(),
        reason: reason.into(),
    }
}

pub fn dependency_missing(
    category: Category,
    id: impl Into<String>,
    wanted_by: impl Into<String>,
) -> BundlesmithError {
    BundlesmithError::DependencyResolution {
        category,
        id: id.into(),
        wanted_by: wanted_by.into(),
    }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::ReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlesmithError {
    BundlesmithError::WriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
