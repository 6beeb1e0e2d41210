//! Command implementations
//!
//! Thin wrappers over the builder/resolver core: parse-free argument structs
//! come in from `cli`, terminal output and exit semantics live here.

pub mod build;
pub mod completions;
pub mod list;
pub mod validate;

use crate::resolver::{CyclePolicy, ResolverOptions};

/// Resolver options shared by build and validate
pub(crate) fn resolver_options(strict_cycles: bool) -> ResolverOptions {
    ResolverOptions {
        cycle_policy: if strict_cycles {
            CyclePolicy::Deny
        } else {
            CyclePolicy::Tolerate
        },
        ..ResolverOptions::default()
    }
}
