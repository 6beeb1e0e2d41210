//! Resource Store: read-only access to definition documents
//!
//! The store is an injectable interface so resolution logic can be tested
//! against an in-memory fake with controlled contents. The filesystem-backed
//! implementation searches an ordered list of roots, each holding one
//! subdirectory per category.

pub mod fs;
#[cfg(test)]
pub mod memory;

pub use fs::{FsStore, PACKS_DIR, list_packs};

use crate::domain::Category;
use crate::error::Result;

/// Read-only accessor over one or more search roots.
///
/// `load` distinguishes "absent" (`Ok(None)`) from real I/O failures so that
/// callers can apply required/optional semantics themselves.
pub trait ResourceStore {
    /// Raw text of `(category, id)` from the highest-priority root holding it
    fn load(&self, category: Category, id: &str) -> Result<Option<String>>;

    /// Ids known for a category across all roots, in stable sorted order,
    /// with hidden and index entries filtered out
    fn list(&self, category: Category) -> Result<Vec<String>>;
}

/// Whether a directory entry names a definition document.
/// Hidden files and index/readme files are not definitions.
pub(crate) fn is_definition_entry(name: &str) -> bool {
    if name.starts_with('.') {
        return false;
    }
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    !stem.eq_ignore_ascii_case("readme") && !stem.eq_ignore_ascii_case("index")
}
