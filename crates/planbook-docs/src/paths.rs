//! Filename sanitization and document key resolution.

use std::path::{Component, Path};

use crate::error::{DocsError, DocsResult};

/// Directory of plan documents, relative to the workspace root.
pub const PLANS_DIR: &str = "docs/plans";

/// Directory of spec documents, relative to the workspace root.
pub const SPECS_DIR: &str = "docs/specs";

/// Characters replaced with `_` in filenames.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Turn an arbitrary name into a safe filename stem.
///
/// ASCII control characters are removed, path and shell metacharacters become
/// `_`, and surrounding whitespace is trimmed. A name with nothing left
/// becomes `"untitled"`.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| !c.is_ascii_control())
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let sanitized = sanitized.trim();
    if sanitized.is_empty() {
        "untitled".to_string()
    } else {
        sanitized.to_string()
    }
}

/// Store key of the plan document for `name`.
pub fn plan_key(name: &str) -> DocsResult<String> {
    secure_join(PLANS_DIR, name)
}

/// Store key of the spec document for `name`.
pub fn spec_key(name: &str) -> DocsResult<String> {
    secure_join(SPECS_DIR, name)
}

/// Join a sanitized `<name>.md` onto `base`, guaranteeing the result stays
/// relative and below the base directory.
fn secure_join(base: &str, name: &str) -> DocsResult<String> {
    let key = format!("{base}/{}.md", sanitize_filename(name));
    for component in Path::new(&key).components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            _ => return Err(DocsError::PathEscape { path: key }),
        }
    }
    Ok(key)
}
