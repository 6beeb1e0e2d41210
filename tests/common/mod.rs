//! Common test utilities for Bundlesmith integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const EMPTY_DEPS: &str = "---\ndependencies: {}\n---\nbody\n";

/// A temporary definition corpus with a separate output directory
#[allow(dead_code)]
pub struct TestCorpus {
    /// Temporary directory, kept alive for the test's duration
    pub temp: TempDir,
    /// Source corpus root
    pub source: PathBuf,
    /// Output directory for built artifacts
    pub output: PathBuf,
}

#[allow(dead_code)]
impl TestCorpus {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create tempdir");
        let source = temp.path().join("corpus");
        let output = temp.path().join("dist");
        fs::create_dir_all(&source).expect("create corpus dir");
        Self {
            temp,
            source,
            output,
        }
    }

    /// Write one file relative to the source root
    pub fn write(&self, rel: &str, text: &str) -> &Self {
        let path = self.source.join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
        fs::write(path, text).expect("write fixture");
        self
    }

    /// A small healthy corpus: orchestrator + two agents sharing a task,
    /// plus a wildcard team
    pub fn seeded() -> Self {
        let corpus = Self::new();
        corpus
            .write("agents/orchestrator.md", EMPTY_DEPS)
            .write(
                "agents/analyst.md",
                "---\nname: Analyst\ndependencies:\n  tasks:\n    - eda.md\n  templates:\n    - report.md\n---\nanalyst persona\n",
            )
            .write(
                "agents/engineer.md",
                "---\nname: Engineer\ndependencies:\n  tasks:\n    - eda.md\n---\nengineer persona\n",
            )
            .write(
                "tasks/eda.md",
                "---\ndependencies:\n  templates:\n    - report.md\n---\nexploratory analysis\n",
            )
            .write("templates/report.md", EMPTY_DEPS)
            .write(
                "teams/data-team.yaml",
                "name: Data Team\nagents: ['*']\n",
            );
        corpus
    }

    pub fn source_arg(&self) -> String {
        self.source.display().to_string()
    }

    pub fn output_arg(&self) -> String {
        self.output.display().to_string()
    }
}
