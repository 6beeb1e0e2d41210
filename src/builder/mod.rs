//! Build orchestration: enumerate units, resolve, assemble, summarize
//!
//! Batch builds isolate per-unit failures: a bad definition is recorded and
//! the batch proceeds. `validate` is the opposite: a fail-fast dry-run for
//! configuration health checks. Assembly only starts after a unit's
//! resolution fully succeeded, so no partial artifact is ever written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assembler::{assemble_flat, write_unit};
use crate::domain::Category;
use crate::error::{Result, write_failed};
use crate::resolver::{Resolver, ResolverOptions};
use crate::store::{FsStore, PACKS_DIR, ResourceStore, list_packs};

/// Which output subdirectories a clean pass touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanScope {
    Agents,
    Teams,
    Packs,
    All,
}

/// One recorded per-unit failure
#[derive(Debug)]
pub struct BuildFailure {
    pub unit: String,
    pub category: Category,
    pub reason: String,
}

/// Outcome of one batch build
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Artifact paths written, in build order
    pub built: Vec<PathBuf>,
    pub failures: Vec<BuildFailure>,
    pub warnings: Vec<String>,
}

impl BuildSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: BuildSummary) {
        self.built.extend(other.built);
        self.failures.extend(other.failures);
        self.warnings.extend(other.warnings);
    }
}

/// Drives resolver and assembler over every known agent, team and pack
pub struct Builder {
    source_root: PathBuf,
    output_root: PathBuf,
    options: ResolverOptions,
}

impl Builder {
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            options,
        }
    }

    pub fn build_agents(&self) -> Result<BuildSummary> {
        let store = FsStore::new(&self.source_root);
        self.build_agents_with(&store, &store, &self.output_root, "")
    }

    pub fn build_teams(&self) -> Result<BuildSummary> {
        let store = FsStore::new(&self.source_root);
        self.build_teams_with(&store, &store, &self.output_root, "")
    }

    /// Build every pack's agents and teams. Enumeration is pack-local (a
    /// pack builds only the units it contributes) while resolution falls
    /// back to the primary root and shared fallback.
    pub fn build_packs(&self) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();
        for pack in list_packs(&self.source_root)? {
            let pack_root = self.source_root.join(PACKS_DIR).join(&pack);
            let local = FsStore::new(&pack_root);
            let store = FsStore::for_pack(&pack_root, &self.source_root);
            let out = self.output_root.join(PACKS_DIR).join(&pack);
            let prefix = format!("{pack}/");
            summary.merge(self.build_agents_with(&local, &store, &out, &prefix)?);
            summary.merge(self.build_teams_with(&local, &store, &out, &prefix)?);
        }
        Ok(summary)
    }

    fn build_agents_with(
        &self,
        enumerate: &dyn ResourceStore,
        store: &dyn ResourceStore,
        out: &Path,
        unit_prefix: &str,
    ) -> Result<BuildSummary> {
        let resolver = Resolver::new(store, self.options.clone());
        let mut summary = BuildSummary::default();
        for id in enumerate.list(Category::Agents)? {
            let unit = format!("{unit_prefix}{id}");
            match resolver.resolve_agent(&id) {
                Ok(agent) => {
                    summary.warnings.extend(agent.warnings.iter().cloned());
                    let artifact = assemble_flat(agent.documents());
                    record(&mut summary, unit, Category::Agents, || {
                        write_unit(out, Category::Agents, &agent.id, &artifact)
                    });
                }
                Err(e) => summary.failures.push(BuildFailure {
                    unit,
                    category: Category::Agents,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(summary)
    }

    fn build_teams_with(
        &self,
        enumerate: &dyn ResourceStore,
        store: &dyn ResourceStore,
        out: &Path,
        unit_prefix: &str,
    ) -> Result<BuildSummary> {
        let resolver = Resolver::new(store, self.options.clone());
        let mut summary = BuildSummary::default();
        for id in enumerate.list(Category::Teams)? {
            let unit = format!("{unit_prefix}{id}");
            match resolver.resolve_team(&id) {
                Ok(team) => {
                    summary.warnings.extend(team.warnings.iter().cloned());
                    let artifact = assemble_flat(team.documents());
                    record(&mut summary, unit, Category::Teams, || {
                        write_unit(out, Category::Teams, &team.id, &artifact)
                    });
                }
                Err(e) => summary.failures.push(BuildFailure {
                    unit,
                    category: Category::Teams,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(summary)
    }

    /// Remove prior artifacts within the requested scope only, so partial
    /// rebuilds never destroy unrelated output.
    pub fn clean(&self, scope: CleanScope) -> Result<()> {
        let dirs: Vec<PathBuf> = match scope {
            CleanScope::Agents => vec![self.output_root.join(Category::Agents.dir_name())],
            CleanScope::Teams => vec![self.output_root.join(Category::Teams.dir_name())],
            CleanScope::Packs => vec![self.output_root.join(PACKS_DIR)],
            CleanScope::All => vec![
                self.output_root.join(Category::Agents.dir_name()),
                self.output_root.join(Category::Teams.dir_name()),
                self.output_root.join(PACKS_DIR),
            ],
        };
        for dir in dirs {
            if dir.exists() {
                fs::remove_dir_all(&dir)
                    .map_err(|e| write_failed(dir.display().to_string(), e.to_string()))?;
            }
        }
        Ok(())
    }

    /// Dry-run: resolve every known agent and team, core and packs, without
    /// writing artifacts. Returns on the first failure encountered.
    pub fn validate(&self) -> Result<ValidateReport> {
        let mut report = ValidateReport::default();
        let core = FsStore::new(&self.source_root);
        self.validate_with(&core, &core, &mut report)?;
        for pack in list_packs(&self.source_root)? {
            let pack_root = self.source_root.join(PACKS_DIR).join(&pack);
            let local = FsStore::new(&pack_root);
            let store = FsStore::for_pack(&pack_root, &self.source_root);
            self.validate_with(&local, &store, &mut report)?;
            report.packs += 1;
        }
        Ok(report)
    }

    fn validate_with(
        &self,
        enumerate: &dyn ResourceStore,
        store: &dyn ResourceStore,
        report: &mut ValidateReport,
    ) -> Result<()> {
        let resolver = Resolver::new(store, self.options.clone());
        for id in enumerate.list(Category::Agents)? {
            let agent = resolver.resolve_agent(&id)?;
            report.warnings.extend(agent.warnings);
            report.agents += 1;
        }
        for id in enumerate.list(Category::Teams)? {
            let team = resolver.resolve_team(&id)?;
            report.warnings.extend(team.warnings);
            report.teams += 1;
        }
        Ok(())
    }
}

/// Counts from a successful validation pass
#[derive(Debug, Default)]
pub struct ValidateReport {
    pub agents: usize,
    pub teams: usize,
    pub packs: usize,
    pub warnings: Vec<String>,
}

fn record(
    summary: &mut BuildSummary,
    unit: String,
    category: Category,
    write: impl FnOnce() -> Result<PathBuf>,
) {
    match write() {
        Ok(path) => summary.built.push(path),
        Err(e) => summary.failures.push(BuildFailure {
            unit,
            category,
            reason: e.to_string(),
        }),
    }
}
