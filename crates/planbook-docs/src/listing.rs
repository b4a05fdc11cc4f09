//! Scanning the documents directories.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::DocsResult;
use crate::paths::{PLANS_DIR, SPECS_DIR};

/// How many leading lines of a spec document are searched for its scope.
const SCOPE_HEAD_LINES: usize = 8;

/// A `Scope: repo` declaration at the start of a line.
fn repo_scope() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^Scope:\s*repo\b").expect("valid scope regex"))
}

/// Stems of the `.md` files directly under a directory, sorted.
fn markdown_stems(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let mut stems: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("md"))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|s| s.to_str())
                .map(ToString::to_string)
        })
        .collect();
    stems.sort();
    stems
}

/// Names of all plan documents under `root`, sorted.
///
/// A missing plans directory is an empty workspace, not an error.
pub fn list_plans(root: &Path) -> Vec<String> {
    markdown_stems(&root.join(PLANS_DIR))
}

/// Names of the repo-scoped spec documents under `root`, sorted.
///
/// A spec is repo-scoped when one of its first few lines declares
/// `Scope: repo`; everything else (feature specs, drafts) is skipped.
pub fn list_repo_specs(root: &Path) -> DocsResult<Vec<String>> {
    let dir = root.join(SPECS_DIR);
    let mut names = Vec::new();

    for stem in markdown_stems(&dir) {
        let text = fs::read_to_string(dir.join(format!("{stem}.md")))?;
        let head = text
            .lines()
            .take(SCOPE_HEAD_LINES)
            .collect::<Vec<_>>()
            .join("\n");
        if repo_scope().is_match(&head) {
            names.push(stem);
        }
    }

    Ok(names)
}
