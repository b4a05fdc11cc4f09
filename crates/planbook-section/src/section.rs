//! Locating the marker-delimited section inside a document.

use crate::markers::{HEADING_BOUNDARY, SPECS_END, SPECS_START};

/// The bounded section of a document, as a lossless three-way partition.
///
/// `before` ends with the start marker, `after` begins with the end marker
/// (when one exists), and `middle` is everything between. Concatenating the
/// three fields reconstructs the document exactly. The value is plain
/// immutable data so retry loops can recompute it freshly on every attempt
/// without aliasing the document text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Document text up to and including the start marker.
    pub before: String,
    /// Text strictly between the markers (the list body).
    pub middle: String,
    /// Text from the end marker (or recovered boundary) to end of document.
    pub after: String,
}

impl Section {
    /// Reconstruct the document this section was carved from.
    pub fn reassemble(&self) -> String {
        format!("{}{}{}", self.before, self.middle, self.after)
    }
}

/// Find the marker-delimited section in `document`.
///
/// Returns `None` when the start marker is absent; that is a structural
/// failure the caller cannot retry away. When the end marker is missing, or
/// only occurs at or before the start marker, a boundary is recovered at the
/// first `"\n## "` heading after the start marker so that trailing document
/// sections survive the next write. With no such heading the section runs to
/// end of document and `after` is empty.
pub fn locate(document: &str) -> Option<Section> {
    let start_idx = document.find(SPECS_START)?;
    let start_end = start_idx + SPECS_START.len();

    if let Some(rel) = document[start_end..].find(SPECS_END) {
        let end_idx = start_end + rel;
        return Some(Section {
            before: document[..start_end].to_string(),
            middle: document[start_end..end_idx].to_string(),
            after: document[end_idx..].to_string(),
        });
    }

    let boundary = document[start_end..]
        .find(HEADING_BOUNDARY)
        .map(|rel| start_end + rel)
        .unwrap_or(document.len());

    Some(Section {
        before: document[..start_end].to_string(),
        middle: document[start_end..boundary].to_string(),
        after: document[boundary..].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn well_formed_document() {
        let doc = "# Plan\n<!-- SPECS_START -->\n- auth\n<!-- SPECS_END -->\n## Notes\n";
        let section = locate(doc).unwrap();

        assert_eq!(section.before, "# Plan\n<!-- SPECS_START -->");
        assert_eq!(section.middle, "\n- auth\n");
        assert_eq!(section.after, "<!-- SPECS_END -->\n## Notes\n");
    }

    #[test]
    fn missing_start_marker() {
        assert!(locate("# Plan\nno markers here\n").is_none());
        assert!(locate("").is_none());
    }

    #[test]
    fn adjacent_markers_yield_empty_middle() {
        let doc = "<!-- SPECS_START --><!-- SPECS_END -->";
        let section = locate(doc).unwrap();

        assert_eq!(section.middle, "");
        assert_eq!(section.after, "<!-- SPECS_END -->");
    }

    #[test]
    fn missing_end_recovers_at_heading() {
        let doc = "<!-- SPECS_START -->\n- auth\n\n## Notes\nbody\n";
        let section = locate(doc).unwrap();

        assert_eq!(section.middle, "\n- auth\n");
        assert_eq!(section.after, "\n## Notes\nbody\n");
    }

    #[test]
    fn missing_end_without_heading_runs_to_eof() {
        let doc = "<!-- SPECS_START -->\n- auth\n- db\n";
        let section = locate(doc).unwrap();

        assert_eq!(section.middle, "\n- auth\n- db\n");
        assert_eq!(section.after, "");
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        // A stray end marker ahead of the start marker does not bound the
        // section; recovery kicks in instead.
        let doc = "<!-- SPECS_END -->\n<!-- SPECS_START -->\n- auth\n\n## Next\n";
        let section = locate(doc).unwrap();

        assert!(section.before.ends_with("<!-- SPECS_START -->"));
        assert_eq!(section.middle, "\n- auth\n");
        assert_eq!(section.after, "\n## Next\n");
    }

    #[test]
    fn recovery_ignores_deeper_headings() {
        // Only `## ` headings recover the boundary; `###` does not match the
        // narrow pattern, so the section swallows it.
        let doc = "<!-- SPECS_START -->\n- auth\n\n### Deep\n";
        let section = locate(doc).unwrap();

        assert_eq!(section.middle, "\n- auth\n\n### Deep\n");
        assert_eq!(section.after, "");
    }

    #[test]
    fn first_start_marker_wins() {
        let doc = "<!-- SPECS_START -->\na\n<!-- SPECS_START -->\n<!-- SPECS_END -->";
        let section = locate(doc).unwrap();

        assert_eq!(section.before, "<!-- SPECS_START -->");
        assert_eq!(section.middle, "\na\n<!-- SPECS_START -->\n");
    }

    proptest! {
        #[test]
        fn partition_is_lossless(prefix in ".*", middle in ".*", suffix in ".*") {
            let doc = format!("{prefix}<!-- SPECS_START -->{middle}{suffix}");
            let section = locate(&doc).expect("start marker is present");
            prop_assert_eq!(section.reassemble(), doc);
        }

        #[test]
        fn locate_agrees_with_start_marker_presence(doc in ".*") {
            prop_assert_eq!(locate(&doc).is_some(), doc.contains(super::SPECS_START));
        }
    }
}
