//! Transitive dependency resolution over a resource store
//!
//! Resolution is a breadth-first walk seeded with a root document's declared
//! references. A visited-set keyed by `(category, id)` gives deduplication and
//! cycle safety in one mechanism: re-encountering a node is a no-op under the
//! default policy. Each call is stateless relative to prior calls: the
//! visited-set, parent map and frontier are local to one call and discarded at
//! return, so independent units can be resolved concurrently against the same
//! store snapshot.

pub mod team;

pub use team::ResolvedTeam;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::{Category, DefinitionDocument, DependencyDecl, ResourceId};
use crate::error::{BundlesmithError, Result, dependency_missing, invalid_definition, not_found};
use crate::frontmatter;
use crate::store::ResourceStore;

/// Agent id implicitly included first in every team
pub const DEFAULT_ORCHESTRATOR_ID: &str = "orchestrator.md";

/// How a re-encountered node that closes a reference chain is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Already-included is a no-op; cycles never surface as errors
    #[default]
    Tolerate,
    /// A back-reference to an ancestor of the current node is an error.
    /// Diamonds (two paths to the same resource) are still fine.
    Deny,
}

#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub orchestrator_id: String,
    pub cycle_policy: CyclePolicy,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            orchestrator_id: DEFAULT_ORCHESTRATOR_ID.to_string(),
            cycle_policy: CyclePolicy::default(),
        }
    }
}

/// Result of resolving one agent: the agent document itself plus the ordered,
/// deduplicated closure of everything it references.
#[derive(Debug, Clone)]
pub struct ResolvedAgent {
    pub id: String,
    /// Declared display name from the agent's front-matter, when present
    #[allow(dead_code)] // root metadata, read by tests
    pub name: Option<String>,
    pub document: DefinitionDocument,
    pub resources: Vec<DefinitionDocument>,
    /// Skipped optional references, one record each
    pub warnings: Vec<String>,
}

impl ResolvedAgent {
    /// Documents in assembly order: the agent first, then its resources in
    /// resolution order
    pub fn documents(&self) -> impl Iterator<Item = &DefinitionDocument> {
        std::iter::once(&self.document).chain(self.resources.iter())
    }
}

/// Stateless resolver over an injected read-only store
pub struct Resolver<'a> {
    store: &'a dyn ResourceStore,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn ResourceStore, options: ResolverOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub(crate) fn store(&self) -> &dyn ResourceStore {
        self.store
    }

    /// Resolve one agent into its transitive, deduplicated resource closure.
    pub fn resolve_agent(&self, id: &str) -> Result<ResolvedAgent> {
        let raw = self
            .store
            .load(Category::Agents, id)?
            .ok_or_else(|| not_found(Category::Agents, id))?;
        let decl = frontmatter::extract(&raw).ok_or_else(|| {
            invalid_definition(Category::Agents, id, "missing or unparsable dependency block")
        })?;
        let name = frontmatter::agent_name(&raw);
        let root = ResourceId::new(Category::Agents, id);
        let (resources, warnings) = self.walk(&root, &decl)?;
        Ok(ResolvedAgent {
            id: id.to_string(),
            name,
            document: DefinitionDocument::new(root, raw),
            resources,
            warnings,
        })
    }

    /// Load one resource by identity, trying each search root in priority
    /// order. `Ok(None)` once all roots are exhausted; callers decide
    /// required/optional handling.
    #[allow(dead_code)] // used in tests
    pub fn load_resource(
        &self,
        category: Category,
        id: &str,
    ) -> Result<Option<DefinitionDocument>> {
        Ok(self
            .store
            .load(category, id)?
            .map(|text| DefinitionDocument::new(ResourceId::new(category, id), text)))
    }

    pub fn list_agents(&self) -> Result<Vec<String>> {
        self.store.list(Category::Agents)
    }

    #[allow(dead_code)] // the builder enumerates through its own stores
    pub fn list_teams(&self) -> Result<Vec<String>> {
        self.store.list(Category::Teams)
    }

    /// Breadth-first transitive walk from `root` over `decl`'s references.
    fn walk(
        &self,
        root: &ResourceId,
        decl: &DependencyDecl,
    ) -> Result<(Vec<DefinitionDocument>, Vec<String>)> {
        let mut visited: HashSet<ResourceId> = HashSet::new();
        visited.insert(root.clone());
        // Absent optionals, warned once per unit. Kept out of the visited-set
        // so a later required reference to the same file still fails.
        let mut missing: HashSet<ResourceId> = HashSet::new();
        // First-visit parent of each node, for cycle chains under Deny
        let mut parents: HashMap<ResourceId, ResourceId> = HashMap::new();
        let mut frontier: VecDeque<(ResourceId, bool, ResourceId)> = decl
            .resource_ids()
            .map(|(id, required)| (id, required, root.clone()))
            .collect();

        let mut resources = Vec::new();
        let mut warnings = Vec::new();

        while let Some((node, required, wanted_by)) = frontier.pop_front() {
            if visited.contains(&node) {
                if self.options.cycle_policy == CyclePolicy::Deny {
                    if let Some(chain) = cycle_chain(&parents, &node, &wanted_by) {
                        return Err(BundlesmithError::CycleDetected { chain });
                    }
                }
                continue;
            }

            let Some(text) = self.store.load(node.category, &node.id)? else {
                if required {
                    return Err(dependency_missing(
                        node.category,
                        node.id,
                        wanted_by.to_string(),
                    ));
                }
                if missing.insert(node.clone()) {
                    warnings.push(format!(
                        "optional {node} referenced by {wanted_by} not found, skipped"
                    ));
                }
                continue;
            };

            visited.insert(node.clone());
            parents.insert(node.clone(), wanted_by);

            if node.category.can_nest() {
                let nested = frontmatter::extract(&text).ok_or_else(|| {
                    invalid_definition(
                        node.category,
                        node.id.clone(),
                        "missing or unparsable dependency block",
                    )
                })?;
                for (id, req) in nested.resource_ids() {
                    frontier.push_back((id, req, node.clone()));
                }
            }

            resources.push(DefinitionDocument::new(node, text));
        }

        Ok((resources, warnings))
    }
}

/// If `node` is an ancestor of `wanted_by`, the re-encounter closes a true
/// cycle; return its display chain. Diamonds return `None`.
fn cycle_chain(
    parents: &HashMap<ResourceId, ResourceId>,
    node: &ResourceId,
    wanted_by: &ResourceId,
) -> Option<String> {
    let mut ancestors = vec![wanted_by.clone()];
    let mut current = wanted_by;
    while let Some(parent) = parents.get(current) {
        ancestors.push(parent.clone());
        current = parent;
    }
    let pos = ancestors.iter().position(|a| a == node)?;
    let mut chain: Vec<String> = ancestors[..=pos].iter().rev().map(ToString::to_string).collect();
    chain.push(node.to_string());
    Some(chain.join(" -> "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    const EMPTY_DEPS: &str = "---\ndependencies: {}\n---\nleaf";

    fn analyst_store() -> MemoryStore {
        // Scenario A: analyst -> tasks:[eda], templates:[report];
        // eda -> templates:[report]
        MemoryStore::new()
            .with(
                Category::Agents,
                "analyst.md",
                "---\nname: Analyst\ndependencies:\n  tasks:\n    - eda.md\n  templates:\n    - report.md\n---\nagent body",
            )
            .with(
                Category::Tasks,
                "eda.md",
                "---\ndependencies:\n  templates:\n    - report.md\n---\neda body",
            )
            .with(Category::Templates, "report.md", EMPTY_DEPS)
    }

    fn resource_ids(agent: &ResolvedAgent) -> Vec<String> {
        agent.resources.iter().map(|d| d.id.to_string()).collect()
    }

    #[test]
    fn test_scenario_a_dedup_at_first_seen_position() {
        let store = analyst_store();
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("analyst.md").unwrap();
        assert_eq!(agent.name.as_deref(), Some("Analyst"));
        assert_eq!(
            resource_ids(&agent),
            vec!["tasks#eda.md", "templates#report.md"]
        );
        assert!(agent.warnings.is_empty());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let store = analyst_store();
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let first = resolver.resolve_agent("analyst.md").unwrap();
        let second = resolver.resolve_agent("analyst.md").unwrap();
        assert_eq!(resource_ids(&first), resource_ids(&second));
    }

    #[test]
    fn test_no_duplicate_identities() {
        let store = analyst_store();
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("analyst.md").unwrap();
        let mut seen = HashSet::new();
        for doc in agent.documents() {
            assert!(seen.insert(doc.id.clone()), "duplicate {}", doc.id);
        }
    }

    #[test]
    fn test_missing_agent_is_not_found() {
        let store = MemoryStore::new();
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let err = resolver.resolve_agent("ghost.md").unwrap_err();
        assert!(matches!(err, BundlesmithError::NotFound { .. }));
    }

    #[test]
    fn test_agent_without_block_is_invalid_definition() {
        let store = MemoryStore::new().with(Category::Agents, "bare.md", "no block here");
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let err = resolver.resolve_agent("bare.md").unwrap_err();
        assert!(matches!(err, BundlesmithError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_missing_required_dependency_names_offender() {
        let store = MemoryStore::new().with(
            Category::Agents,
            "analyst.md",
            "---\ndependencies:\n  tasks:\n    - vanished.md\n---\n",
        );
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let err = resolver.resolve_agent("analyst.md").unwrap_err();
        match err {
            BundlesmithError::DependencyResolution { category, id, wanted_by } => {
                assert_eq!(category, Category::Tasks);
                assert_eq!(id, "vanished.md");
                assert_eq!(wanted_by, "agents#analyst.md");
            }
            other => panic!("expected DependencyResolution, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_optional_dependency_is_warned_and_skipped() {
        let store = MemoryStore::new().with(
            Category::Agents,
            "analyst.md",
            "---\ndependencies:\n  data:\n    - file: extras.md\n      required: false\n---\n",
        );
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("analyst.md").unwrap();
        assert!(agent.resources.is_empty());
        assert_eq!(agent.warnings.len(), 1);
        assert!(agent.warnings[0].contains("data#extras.md"));
    }

    #[test]
    fn test_missing_optional_warned_once_across_referrers() {
        let store = MemoryStore::new()
            .with(
                Category::Agents,
                "analyst.md",
                "---\ndependencies:\n  data:\n    - file: extras.md\n      required: false\n  tasks:\n    - prep.md\n---\n",
            )
            .with(
                Category::Tasks,
                "prep.md",
                "---\ndependencies:\n  data:\n    - file: extras.md\n      required: false\n---\n",
            );
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("analyst.md").unwrap();
        assert_eq!(agent.warnings.len(), 1);
        assert!(agent.warnings[0].contains("data#extras.md"));
    }

    #[test]
    fn test_required_ref_fatal_after_optional_skip_of_same_file() {
        let store = MemoryStore::new()
            .with(
                Category::Agents,
                "analyst.md",
                "---\ndependencies:\n  data:\n    - file: extras.md\n      required: false\n  tasks:\n    - prep.md\n---\n",
            )
            .with(
                Category::Tasks,
                "prep.md",
                "---\ndependencies:\n  data:\n    - extras.md\n---\n",
            );
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let err = resolver.resolve_agent("analyst.md").unwrap_err();
        match err {
            BundlesmithError::DependencyResolution { category, id, wanted_by } => {
                assert_eq!(category, Category::Data);
                assert_eq!(id, "extras.md");
                assert_eq!(wanted_by, "tasks#prep.md");
            }
            other => panic!("expected DependencyResolution, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_task_without_block_is_invalid_definition() {
        let store = MemoryStore::new()
            .with(
                Category::Agents,
                "analyst.md",
                "---\ndependencies:\n  tasks:\n    - raw.md\n---\n",
            )
            .with(Category::Tasks, "raw.md", "task text without front-matter");
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let err = resolver.resolve_agent("analyst.md").unwrap_err();
        match err {
            BundlesmithError::InvalidDefinition { category, id, .. } => {
                assert_eq!(category, Category::Tasks);
                assert_eq!(id, "raw.md");
            }
            other => panic!("expected InvalidDefinition, got {other:?}"),
        }
    }

    #[test]
    fn test_leaf_categories_never_need_a_block() {
        let store = MemoryStore::new()
            .with(
                Category::Agents,
                "analyst.md",
                "---\ndependencies:\n  checklists:\n    - review.md\n  data:\n    - notes.md\n---\n",
            )
            .with(Category::Checklists, "review.md", "plain checklist")
            .with(Category::Data, "notes.md", "plain notes");
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("analyst.md").unwrap();
        assert_eq!(
            resource_ids(&agent),
            vec!["checklists#review.md", "data#notes.md"]
        );
    }

    fn cyclic_store() -> MemoryStore {
        // a -> b -> a, through tasks which may nest
        MemoryStore::new()
            .with(
                Category::Agents,
                "looper.md",
                "---\ndependencies:\n  tasks:\n    - a.md\n---\n",
            )
            .with(
                Category::Tasks,
                "a.md",
                "---\ndependencies:\n  tasks:\n    - b.md\n---\n",
            )
            .with(
                Category::Tasks,
                "b.md",
                "---\ndependencies:\n  tasks:\n    - a.md\n---\n",
            )
    }

    #[test]
    fn test_cycle_tolerated_by_default() {
        let store = cyclic_store();
        let resolver = Resolver::new(&store, ResolverOptions::default());
        let agent = resolver.resolve_agent("looper.md").unwrap();
        assert_eq!(resource_ids(&agent), vec!["tasks#a.md", "tasks#b.md"]);
    }

    #[test]
    fn test_cycle_denied_under_strict_policy() {
        let store = cyclic_store();
        let options = ResolverOptions {
            cycle_policy: CyclePolicy::Deny,
            ..ResolverOptions::default()
        };
        let resolver = Resolver::new(&store, options);
        let err = resolver.resolve_agent("looper.md").unwrap_err();
        match err {
            BundlesmithError::CycleDetected { chain } => {
                assert!(chain.contains("tasks#a.md"), "got: {chain}");
                assert!(chain.contains("tasks#b.md"), "got: {chain}");
            }
            other => panic!("expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn test_diamond_is_not_a_cycle_under_strict_policy() {
        let store = analyst_store();
        let options = ResolverOptions {
            cycle_policy: CyclePolicy::Deny,
            ..ResolverOptions::default()
        };
        let resolver = Resolver::new(&store, options);
        // report.md is reachable via the agent and via eda.md; that is a
        // diamond, not a back-reference
        assert!(resolver.resolve_agent("analyst.md").is_ok());
    }

    #[test]
    fn test_load_resource_returns_none_when_exhausted() {
        let store = MemoryStore::new().with(Category::Data, "notes.md", "text");
        let resolver = Resolver::new(&store, ResolverOptions::default());
        assert!(
            resolver
                .load_resource(Category::Data, "notes.md")
                .unwrap()
                .is_some()
        );
        assert!(
            resolver
                .load_resource(Category::Data, "absent.md")
                .unwrap()
                .is_none()
        );
    }
}
