//! Team resolution
//!
//! A team bundles the resolutions of its member agents. The orchestrator agent
//! is always implicitly included first. Member resolution is all-or-nothing:
//! one failing member fails the whole team. The resource union keeps first-seen
//! order: team member order outermost, each agent's own resolution order
//! within.

use std::collections::HashSet;

use super::Resolver;
use crate::domain::{Category, DefinitionDocument, ResourceId, TeamDefinition, TeamMembers};
use crate::error::{BundlesmithError, Result, invalid_definition, not_found};

/// Result of resolving one team: the team document, final member order, and
/// the deduplicated union of member agent documents and their resources.
#[derive(Debug, Clone)]
pub struct ResolvedTeam {
    pub id: String,
    /// Declared team display name
    #[allow(dead_code)] // root metadata, read by tests
    pub name: String,
    pub document: DefinitionDocument,
    /// Member agent ids in resolution order, orchestrator first
    #[allow(dead_code)] // root metadata, read by tests
    pub members: Vec<String>,
    /// Agent documents and their resources, first-seen order, no duplicates
    pub resources: Vec<DefinitionDocument>,
    pub warnings: Vec<String>,
}

impl ResolvedTeam {
    /// Documents in assembly order: the team document first, then the union
    pub fn documents(&self) -> impl Iterator<Item = &DefinitionDocument> {
        std::iter::once(&self.document).chain(self.resources.iter())
    }
}

impl Resolver<'_> {
    /// Resolve one team into the union of its members' resolutions.
    pub fn resolve_team(&self, id: &str) -> Result<ResolvedTeam> {
        let raw = self
            .store()
            .load(Category::Teams, id)?
            .ok_or_else(|| not_found(Category::Teams, id))?;
        let definition = TeamDefinition::from_yaml(&raw)
            .map_err(|e| invalid_definition(Category::Teams, id, e.to_string()))?;

        // Wildcard expands against the store's live state at resolution time
        let declared = match definition.members() {
            TeamMembers::Wildcard => self.list_agents()?,
            TeamMembers::Explicit(list) => list,
        };

        let mut members = vec![self.options().orchestrator_id.clone()];
        for member in declared {
            if !members.contains(&member) {
                members.push(member);
            }
        }

        let mut seen: HashSet<ResourceId> = HashSet::new();
        let mut resources = Vec::new();
        let mut warnings = Vec::new();

        for member in &members {
            let agent = self.resolve_agent(member).map_err(|e| {
                BundlesmithError::TeamMemberFailed {
                    team: id.to_string(),
                    member: member.clone(),
                    source: Box::new(e),
                }
            })?;
            warnings.extend(agent.warnings);
            if seen.insert(agent.document.id.clone()) {
                resources.push(agent.document);
            }
            for doc in agent.resources {
                if seen.insert(doc.id.clone()) {
                    resources.push(doc);
                }
            }
        }

        Ok(ResolvedTeam {
            id: id.to_string(),
            name: definition.name.clone(),
            document: DefinitionDocument::new(ResourceId::new(Category::Teams, id), raw),
            members,
            resources,
            warnings,
        })
    }
}
