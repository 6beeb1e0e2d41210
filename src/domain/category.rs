//! Resource categories and identities
//!
//! Every definition document lives in exactly one of the fixed categories, each
//! backed by one subdirectory per search root. A `(category, id)` pair uniquely
//! identifies a document within a search scope.

use std::fmt;

/// Fixed categories a definition corpus is organized into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Agents,
    Tasks,
    Templates,
    Checklists,
    Data,
    Workflows,
    Teams,
    Utils,
}

impl Category {
    /// All categories, in canonical order
    pub const ALL: [Category; 8] = [
        Category::Agents,
        Category::Tasks,
        Category::Templates,
        Category::Checklists,
        Category::Data,
        Category::Workflows,
        Category::Teams,
        Category::Utils,
    ];

    /// Subdirectory name under each search root
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Agents => "agents",
            Category::Tasks => "tasks",
            Category::Templates => "templates",
            Category::Checklists => "checklists",
            Category::Data => "data",
            Category::Workflows => "workflows",
            Category::Teams => "teams",
            Category::Utils => "utils",
        }
    }

    /// Map a dependency-declaration key to its category.
    ///
    /// Agents and teams are roots, not declarable dependencies, so their keys
    /// are deliberately not accepted here.
    pub fn from_dependency_key(key: &str) -> Option<Self> {
        match key {
            "tasks" => Some(Category::Tasks),
            "templates" => Some(Category::Templates),
            "checklists" => Some(Category::Checklists),
            "data" => Some(Category::Data),
            "workflows" => Some(Category::Workflows),
            "utils" => Some(Category::Utils),
            _ => None,
        }
    }

    /// Reverse of `dir_name`, used when re-splitting flattened artifacts
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.dir_name() == name)
    }

    /// Whether documents of this category may declare nested dependencies
    pub fn can_nest(self) -> bool {
        matches!(self, Category::Tasks | Category::Templates)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Identity of one definition document within a search scope
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId {
    pub category: Category,
    /// Bare filename including extension (e.g. `eda.md`)
    pub id: String,
}

impl ResourceId {
    pub fn new(category: Category, id: impl Into<String>) -> Self {
        Self {
            category,
            id: id.into(),
        }
    }

    /// Filename without its extension, used for deterministic artifact naming
    pub fn stem(&self) -> &str {
        self.id
            .rsplit_once('.')
            .map_or(self.id.as_str(), |(stem, _)| stem)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.category, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_keys_map_to_categories() {
        assert_eq!(Category::from_dependency_key("tasks"), Some(Category::Tasks));
        assert_eq!(Category::from_dependency_key("utils"), Some(Category::Utils));
        assert_eq!(Category::from_dependency_key("agents"), None);
        assert_eq!(Category::from_dependency_key("teams"), None);
        assert_eq!(Category::from_dependency_key("bogus"), None);
    }

    #[test]
    fn test_dir_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_dir_name(category.dir_name()), Some(category));
        }
        assert_eq!(Category::from_dir_name("nope"), None);
    }

    #[test]
    fn test_only_tasks_and_templates_nest() {
        let nesting: Vec<Category> = Category::ALL.into_iter().filter(|c| c.can_nest()).collect();
        assert_eq!(nesting, vec![Category::Tasks, Category::Templates]);
    }

    #[test]
    fn test_resource_id_display_and_stem() {
        let id = ResourceId::new(Category::Tasks, "eda.md");
        assert_eq!(id.to_string(), "tasks#eda.md");
        assert_eq!(id.stem(), "eda");

        let no_ext = ResourceId::new(Category::Data, "notes");
        assert_eq!(no_ext.stem(), "notes");
    }
}
