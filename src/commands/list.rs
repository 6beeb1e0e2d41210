//! List commands: known agents and add-on packs

use std::path::{Path, PathBuf};

use console::Style;

use crate::domain::Category;
use crate::error::Result;
use crate::frontmatter;
use crate::store::{FsStore, PACKS_DIR, ResourceStore, list_packs};

/// Run list-agents command
pub fn run_agents(source: PathBuf) -> Result<()> {
    let store = FsStore::new(&source);
    let agents = store.list(Category::Agents)?;

    if agents.is_empty() {
        println!("No agents found.");
        return Ok(());
    }

    println!("Known agents ({}):", agents.len());
    for id in &agents {
        match store.load(Category::Agents, id)? {
            Some(raw) => println!("  {}{}", Style::new().bold().yellow().apply_to(id), describe(&raw)),
            None => println!("  {}", Style::new().bold().yellow().apply_to(id)),
        }
    }
    Ok(())
}

fn describe(raw: &str) -> String {
    let Some(block) = frontmatter::parse_block(raw) else {
        return String::new();
    };
    let name = frontmatter::get_str(&block, "name");
    let title = frontmatter::get_str(&block, "title");
    match (name, title) {
        (Some(name), Some(title)) => format!("  {}", Style::new().dim().apply_to(format!("{name} - {title}"))),
        (Some(name), None) => format!("  {}", Style::new().dim().apply_to(name)),
        (None, Some(title)) => format!("  {}", Style::new().dim().apply_to(title)),
        (None, None) => String::new(),
    }
}

/// Run list-packs command
pub fn run_packs(source: PathBuf) -> Result<()> {
    let packs = list_packs(&source)?;

    if packs.is_empty() {
        println!("No packs found.");
        return Ok(());
    }

    println!("Add-on packs ({}):", packs.len());
    for pack in &packs {
        let pack_root = source.join(PACKS_DIR).join(pack);
        let (agents, teams) = pack_counts(&pack_root)?;
        println!(
            "  {}  {}",
            Style::new().bold().yellow().apply_to(pack),
            Style::new()
                .dim()
                .apply_to(format!("{agents} agents, {teams} teams"))
        );
    }
    Ok(())
}

/// Counts of definitions the pack itself contributes, excluding the primary
/// corpus it falls back to
fn pack_counts(pack_root: &Path) -> Result<(usize, usize)> {
    let local = FsStore::new(pack_root);
    Ok((
        local.list(Category::Agents)?.len(),
        local.list(Category::Teams)?.len(),
    ))
}
