//! Extract the leading dependency declaration from a definition document.
//!
//! Agent, task and template documents start with a YAML block between two
//! `---` lines. The block must carry a `dependencies` mapping from category
//! name to an ordered list of bare filenames. An absent or unparsable block is
//! `None`; callers treat that as `InvalidDefinition`, never as an empty
//! declaration. An empty `dependencies: {}` mapping is a valid declaration of
//! zero dependencies; the two cases must not be conflated.

use serde_yaml::Value;

use crate::domain::{Category, DependencyDecl, DependencyRef};

/// Parse the leading YAML block (between the first `---` and the second `---`).
/// Returns `None` if no such block is present or it is not valid YAML.
pub fn parse_block(content: &str) -> Option<Value> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let block = lines[1..end_idx].join("\n");
    let value: Value = serde_yaml::from_str(&block).ok()?;
    if value.as_mapping().is_none() {
        return None;
    }
    Some(value)
}

/// Get a string value from a parsed block by top-level key.
pub fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    match mapping.get(Value::String(key.to_string()))? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract the dependency declaration from a document's raw text.
///
/// Returns `None` when the block is absent, is not valid YAML, lacks a
/// `dependencies` mapping, names an unknown category, or holds a malformed
/// entry. Entry forms: `eda.md` (required) or `{file: eda.md, required: false}`.
pub fn extract(raw: &str) -> Option<DependencyDecl> {
    let block = parse_block(raw)?;
    let mapping = block.as_mapping()?;
    let deps = mapping.get(Value::String("dependencies".to_string()))?;

    let mut decl = DependencyDecl::new();
    match deps {
        // `dependencies:` with no entries parses as null; an explicit empty
        // mapping is the same zero-dependency declaration.
        Value::Null => {}
        Value::Mapping(categories) => {
            for (key, value) in categories {
                let category = Category::from_dependency_key(key.as_str()?)?;
                let refs = parse_refs(value)?;
                decl.push(category, refs);
            }
        }
        _ => return None,
    }
    Some(decl)
}

/// Declared display name of an agent document, from the same leading block.
pub fn agent_name(raw: &str) -> Option<String> {
    get_str(&parse_block(raw)?, "name")
}

fn parse_refs(value: &Value) -> Option<Vec<DependencyRef>> {
    let items = match value {
        Value::Null => return Some(vec![]),
        Value::Sequence(items) => items,
        _ => return None,
    };
    items.iter().map(parse_ref).collect()
}

fn parse_ref(item: &Value) -> Option<DependencyRef> {
    match item {
        Value::String(id) => Some(DependencyRef::required(id.clone())),
        Value::Mapping(entry) => {
            let id = entry.get(Value::String("file".to_string()))?.as_str()?;
            let required = match entry.get(Value::String("required".to_string())) {
                Some(v) => v.as_bool()?,
                None => true,
            };
            Some(DependencyRef {
                id: id.to_string(),
                required,
            })
        }
        _ => None,
    }
}
