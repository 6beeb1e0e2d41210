//! Domain models for Bundlesmith
//!
//! This module contains pure domain objects representing definition documents,
//! their identities, and their dependency declarations. These types are free of
//! filesystem concerns; stores and resolvers operate on them.

pub mod category;
pub mod document;
pub mod team;

pub use category::{Category, ResourceId};
pub use document::{DefinitionDocument, DependencyDecl, DependencyRef};
pub use team::{TeamDefinition, TeamMembers, WILDCARD_MEMBER};
