//! Team composition documents
//!
//! A team document is a whole-file YAML definition carrying a display name and
//! a member list. The member list is either explicit agent filenames or the
//! single `"*"` sentinel meaning "every currently known agent".

use serde::Deserialize;

/// Member-list sentinel expanding to all agents known at resolution time
pub const WILDCARD_MEMBER: &str = "*";

/// Parsed team definition document. Unknown keys (descriptions, notes) are
/// ignored; only the name and member list matter to resolution.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TeamDefinition {
    pub name: String,
    pub agents: Vec<String>,
}

/// Interpreted member list of a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamMembers {
    /// All agents known to the store at resolution time
    Wildcard,
    /// Explicit agent filenames in declared order
    Explicit(Vec<String>),
}

impl TeamDefinition {
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    pub fn members(&self) -> TeamMembers {
        if self.agents.iter().any(|a| a == WILDCARD_MEMBER) {
            TeamMembers::Wildcard
        } else {
            TeamMembers::Explicit(self.agents.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_team() {
        let raw = "name: Data Team\ndescription: Core data crew\nagents:\n  - analyst.md\n  - engineer.md\n";
        let team = TeamDefinition::from_yaml(raw).unwrap();
        assert_eq!(team.name, "Data Team");
        assert_eq!(
            team.members(),
            TeamMembers::Explicit(vec!["analyst.md".to_string(), "engineer.md".to_string()])
        );
    }

    #[test]
    fn test_parse_wildcard_team() {
        let raw = "name: Everyone\nagents: ['*']\n";
        let team = TeamDefinition::from_yaml(raw).unwrap();
        assert_eq!(team.members(), TeamMembers::Wildcard);
    }

    #[test]
    fn test_missing_agents_list_is_an_error() {
        let raw = "name: No Members\n";
        assert!(TeamDefinition::from_yaml(raw).is_err());
    }
}
