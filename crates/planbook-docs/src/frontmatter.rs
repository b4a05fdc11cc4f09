//! Plan frontmatter normalization and parsing.
//!
//! Plan documents open with a `---` delimited block of `plan name`,
//! `plan description`, and `plan status` fields. Normalization rewrites that
//! block canonically so tools can update the status without disturbing the
//! rest of the document.

use std::sync::OnceLock;

use regex::Regex;

/// Leading frontmatter block, including its trailing blank line.
fn frontmatter_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\A---.*?---\n\n?").expect("valid frontmatter regex"))
}

/// Fields of a plan's frontmatter block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanMeta {
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Replace any leading frontmatter block of `content` with a canonical one.
///
/// Content without a leading block simply gains one.
pub fn normalize_frontmatter(
    content: &str,
    name: &str,
    description: &str,
    status: &str,
) -> String {
    let header = format!(
        "---\nplan name: {name}\nplan description: {description}\nplan status: {status}\n---\n\n"
    );
    let rest = frontmatter_block().replace(content, "");
    format!("{header}{rest}")
}

/// Read the frontmatter fields from a plan document.
///
/// Returns `None` when the document has no leading frontmatter block.
/// Fields absent from the block come back empty.
pub fn parse_frontmatter(content: &str) -> Option<PlanMeta> {
    let block = frontmatter_block().find(content)?.as_str();
    let field = |key: &str| {
        block
            .lines()
            .find_map(|line| line.strip_prefix(key))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    };

    Some(PlanMeta {
        name: field("plan name:"),
        description: field("plan description:"),
        status: field("plan status:"),
    })
}
