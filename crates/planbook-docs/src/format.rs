//! Document templates for fresh plans and specs.

use planbook_section::{SPECS_END, SPECS_START};

/// Render a new plan document.
///
/// The plan carries frontmatter (status starts as `active`), the idea, an
/// optional implementation checklist, and a `## Required Specs` heading over
/// an empty marker section ready for concurrent merges.
pub fn format_plan(name: &str, description: &str, idea: &str, steps: &[String]) -> String {
    let implementation = if steps.is_empty() {
        String::new()
    } else {
        let items = steps
            .iter()
            .map(|step| format!("- {step}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("\n## Implementation\n{items}\n")
    };

    format!(
        "---\n\
         plan name: {name}\n\
         plan description: {description}\n\
         plan status: active\n\
         ---\n\
         \n\
         ## Idea\n\
         {idea}\n\
         {implementation}\n\
         ## Required Specs\n\
         {SPECS_START}\n\
         {SPECS_END}"
    )
}

/// Render a new spec document.
pub fn format_spec(name: &str, scope: &str, content: &str) -> String {
    format!("# Spec: {name}\n\nScope: {scope}\n\n{content}")
        .trim_end()
        .to_string()
}
