//! In-memory fake store for unit tests
//!
//! Keeps insertion order for `list` so tests can pin down resolution order
//! without touching the filesystem.

use super::ResourceStore;
use crate::domain::Category;
use crate::error::Result;

#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Vec<(Category, String, String)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, id: &str, text: &str) {
        self.docs
            .push((category, id.to_string(), text.to_string()));
    }

    pub fn with(mut self, category: Category, id: &str, text: &str) -> Self {
        self.insert(category, id, text);
        self
    }
}

impl ResourceStore for MemoryStore {
    fn load(&self, category: Category, id: &str) -> Result<Option<String>> {
        Ok(self
            .docs
            .iter()
            .find(|(c, i, _)| *c == category && i == id)
            .map(|(_, _, text)| text.clone()))
    }

    fn list(&self, category: Category) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for (c, id, _) in &self.docs {
            if *c == category && !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        Ok(ids)
    }
}
