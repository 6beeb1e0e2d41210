//! Definition documents and dependency declarations

use super::category::{Category, ResourceId};

/// One definition document, raw text held byte-for-byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDocument {
    pub id: ResourceId,
    pub text: String,
}

impl DefinitionDocument {
    pub fn new(id: ResourceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// One dependency entry: a bare filename plus its declared requiredness.
///
/// A plain string entry in the declaration is required; authors opt out with
/// an explicit `required: false` mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRef {
    pub id: String,
    pub required: bool,
}

impl DependencyRef {
    pub fn required(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: true,
        }
    }

    #[allow(dead_code)] // used in tests
    pub fn optional(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: false,
        }
    }
}

/// Parsed dependency declaration: category -> ordered refs, preserving the
/// author's order both within a category and across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDecl {
    entries: Vec<(Category, Vec<DependencyRef>)>,
}

impl DependencyDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, refs: Vec<DependencyRef>) {
        self.entries.push((category, refs));
    }

    #[allow(dead_code)] // used in tests
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, refs)| refs.is_empty())
    }

    /// Flattened refs in declaration order
    pub fn refs(&self) -> impl Iterator<Item = (Category, &DependencyRef)> {
        self.entries
            .iter()
            .flat_map(|(category, refs)| refs.iter().map(move |r| (*category, r)))
    }

    /// Referenced identities in declaration order, pairing each ref with its
    /// target `(category, id)`
    pub fn resource_ids(&self) -> impl Iterator<Item = (ResourceId, bool)> + '_ {
        self.refs()
            .map(|(category, r)| (ResourceId::new(category, r.id.clone()), r.required))
    }
}
