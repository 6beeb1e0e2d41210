//! Filesystem-backed resource store over ordered search roots

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{ResourceStore, is_definition_entry};
use crate::domain::Category;
use crate::error::{Result, read_failed};

/// Directory under a source root holding add-on packs
pub const PACKS_DIR: &str = "packs";

/// Directory under a source root holding shared fallback definitions
pub const COMMON_DIR: &str = "common";

/// Store reading from an ordered list of root directories.
///
/// Search order is fixed: earlier roots win. `new` yields
/// `[primary, primary/common]`; `for_pack` puts the pack root first so a pack
/// resolves its own definitions before falling back to the primary corpus.
#[derive(Debug, Clone)]
pub struct FsStore {
    roots: Vec<PathBuf>,
}

impl FsStore {
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        let primary = primary.into();
        let mut roots = vec![primary.clone()];
        push_common(&mut roots, &primary);
        Self { roots }
    }

    pub fn for_pack(pack_root: impl Into<PathBuf>, primary: impl Into<PathBuf>) -> Self {
        let primary = primary.into();
        let mut roots = vec![pack_root.into(), primary.clone()];
        push_common(&mut roots, &primary);
        Self { roots }
    }
}

fn push_common(roots: &mut Vec<PathBuf>, primary: &Path) {
    let common = primary.join(COMMON_DIR);
    if common.is_dir() {
        roots.push(common);
    }
}

impl ResourceStore for FsStore {
    fn load(&self, category: Category, id: &str) -> Result<Option<String>> {
        for root in &self.roots {
            let path = root.join(category.dir_name()).join(id);
            if path.is_file() {
                let text = fs::read_to_string(&path)
                    .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
                return Ok(Some(text));
            }
        }
        Ok(None)
    }

    fn list(&self, category: Category) -> Result<Vec<String>> {
        let mut ids = BTreeSet::new();
        for root in &self.roots {
            let dir = root.join(category.dir_name());
            if !dir.is_dir() {
                continue;
            }
            for entry in fs::read_dir(&dir)
                .map_err(|e| read_failed(dir.display().to_string(), e.to_string()))?
            {
                let entry =
                    entry.map_err(|e| read_failed(dir.display().to_string(), e.to_string()))?;
                if !entry.path().is_file() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                if is_definition_entry(&name) {
                    ids.insert(name);
                }
            }
        }
        Ok(ids.into_iter().collect())
    }
}

/// Enumerate add-on pack names under `{source_root}/packs`, sorted.
pub fn list_packs(source_root: &Path) -> Result<Vec<String>> {
    let packs_dir = source_root.join(PACKS_DIR);
    if !packs_dir.is_dir() {
        return Ok(vec![]);
    }
    let mut packs: Vec<String> = WalkDir::new(&packs_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    packs.sort();
    Ok(packs)
}
