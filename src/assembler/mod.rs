//! Serialize a resolved set into text artifacts
//!
//! The flattened form concatenates each resource's raw text in resolution
//! order, framed by boundary markers carrying `category#id` so the artifact
//! can be mechanically re-split. Raw text is preserved byte-for-byte:
//! `split_flat` inverts exactly what `assemble_flat` inserted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Category, DefinitionDocument, ResourceId};
use crate::error::{Result, write_failed};

const FENCE: &str = "====================";

/// Boundary marker opening a resource segment
pub fn start_marker(id: &ResourceId) -> String {
    format!("{FENCE} START: {id} {FENCE}")
}

/// Boundary marker closing a resource segment
pub fn end_marker(id: &ResourceId) -> String {
    format!("{FENCE} END: {id} {FENCE}")
}

/// Concatenate documents into one flattened artifact.
///
/// Segment count equals the input count; segment order is input order. One
/// newline after the raw text belongs to the end-marker framing and is
/// stripped again by `split_flat`.
pub fn assemble_flat<'a>(docs: impl IntoIterator<Item = &'a DefinitionDocument>) -> String {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&start_marker(&doc.id));
        out.push('\n');
        out.push_str(&doc.text);
        out.push('\n');
        out.push_str(&end_marker(&doc.id));
        out.push_str("\n\n");
    }
    out
}

/// Mechanically re-split a flattened artifact into its segments.
/// Malformed segments (unknown category, unterminated frame) are skipped.
#[allow(dead_code)] // consumers re-split downstream; exercised in tests
pub fn split_flat(artifact: &str) -> Vec<(ResourceId, String)> {
    let start_prefix = format!("{FENCE} START: ");
    let mut segments = Vec::new();
    let mut rest = artifact;

    while let Some(start) = rest.find(&start_prefix) {
        let after_prefix = &rest[start + start_prefix.len()..];
        let Some(token_end) = after_prefix.find(&format!(" {FENCE}\n")) else {
            break;
        };
        let token = &after_prefix[..token_end];
        let body_start = token_end + FENCE.len() + 2;
        let body = &after_prefix[body_start..];

        let end_frame = format!("\n{FENCE} END: {token} {FENCE}");
        let Some(body_end) = body.find(&end_frame) else {
            rest = &after_prefix[body_start..];
            continue;
        };

        if let Some(id) = parse_token(token) {
            segments.push((id, body[..body_end].to_string()));
        }
        rest = &body[body_end + end_frame.len()..];
    }
    segments
}

#[allow(dead_code)] // called by split_flat only
fn parse_token(token: &str) -> Option<ResourceId> {
    let (category, id) = token.split_once('#')?;
    Some(ResourceId::new(Category::from_dir_name(category)?, id))
}

/// Write one unit's artifact beneath its category-scoped output directory.
/// Deterministic naming: `{output_root}/{category}/{stem}.txt`.
pub fn write_unit(
    output_root: &Path,
    category: Category,
    id: &str,
    artifact: &str,
) -> Result<PathBuf> {
    let id = ResourceId::new(category, id);
    let dir = output_root.join(category.dir_name());
    fs::create_dir_all(&dir).map_err(|e| write_failed(dir.display().to_string(), e.to_string()))?;
    let path = dir.join(format!("{}.txt", id.stem()));
    fs::write(&path, artifact)
        .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
    Ok(path)
}
