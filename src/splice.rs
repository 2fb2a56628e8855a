use std::ops::Range;

pub const START_MARKER: &str = "<!-- INDEX-START -->";
pub const END_MARKER: &str = "<!-- INDEX-END -->";

/// Byte range of the index region, markers included. The end marker is the
/// first one at or after the end of the first start marker.
pub fn find_region(doc: &str) -> Option<Range<usize>> {
    let start = doc.find(START_MARKER)?;
    let after_start = start + START_MARKER.len();
    let end = after_start + doc[after_start..].find(END_MARKER)?;
    Some(start..end + END_MARKER.len())
}

/// Replace the index region with `body`. Returns `None` when the document has
/// no complete marker pair.
pub fn splice_index(doc: &str, body: &str) -> Option<String> {
    let region = find_region(doc)?;
    let mut result = String::with_capacity(doc.len() + body.len());
    result.push_str(&doc[..region.start]);
    result.push_str(START_MARKER);
    result.push('\n');
    result.push_str(body);
    result.push('\n');
    result.push_str(END_MARKER);
    result.push_str(&doc[region.end..]);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_region() {
        let doc = "# AoC\n\n<!-- INDEX-START -->\nold\nstuff\n<!-- INDEX-END -->\n\nfooter\n";
        assert_eq!(
            splice_index(doc, "new").unwrap(),
            "# AoC\n\n<!-- INDEX-START -->\nnew\n<!-- INDEX-END -->\n\nfooter\n"
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let doc = "a<!-- INDEX-START --><!-- INDEX-END -->b";
        assert_eq!(
            splice_index(doc, "x").unwrap(),
            "a<!-- INDEX-START -->\nx\n<!-- INDEX-END -->b"
        );
    }

    #[test]
    fn test_empty_body() {
        let doc = "<!-- INDEX-START -->\nold\n<!-- INDEX-END -->";
        assert_eq!(
            splice_index(doc, "").unwrap(),
            "<!-- INDEX-START -->\n\n<!-- INDEX-END -->"
        );
    }

    #[test]
    fn test_surrounding_content_untouched() {
        let before = "intro æøå\r\n<!-- not a marker -->\n";
        let after = "\n<!-- INDEX-END -->trailing\n";
        let doc = format!("{before}<!-- INDEX-START -->x<!-- INDEX-END -->{after}");
        let result = splice_index(&doc, "body").unwrap();
        assert!(result.starts_with(before));
        assert!(result.ends_with(after));
    }

    #[test]
    fn test_missing_start_marker() {
        assert_eq!(splice_index("no markers\n<!-- INDEX-END -->", "x"), None);
    }

    #[test]
    fn test_missing_end_marker() {
        assert_eq!(splice_index("<!-- INDEX-START -->\nbody", "x"), None);
    }

    #[test]
    fn test_end_before_start_is_missing() {
        assert_eq!(
            find_region("<!-- INDEX-END -->\n<!-- INDEX-START -->"),
            None
        );
    }

    #[test]
    fn test_region_is_non_greedy() {
        let doc = "<!-- INDEX-START -->a<!-- INDEX-END -->b<!-- INDEX-END -->";
        assert_eq!(find_region(doc), Some(0..39));
    }
}
