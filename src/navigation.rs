use log::debug;

use crate::config;
use crate::document::DocumentController;

/// Header appearance. Switches once the page leaves the very top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Expanded,
    Compact,
}

impl HeaderStyle {
    pub fn for_scroll(offset_y: f64) -> Self {
        if offset_y > config::COMPACT_HEADER_AFTER_PX {
            HeaderStyle::Compact
        } else {
            HeaderStyle::Expanded
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderStyle::Expanded => "site-header",
            HeaderStyle::Compact => "site-header compact",
        }
    }
}

/// Section id for an in-page anchor such as `#services`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scrolls so the section sits just below the fixed header.
/// Returns `false`, doing nothing, when the target does not exist.
pub fn scroll_to_anchor(doc: &dyn DocumentController, href: &str) -> bool {
    let Some(top) = anchor_id(href).and_then(|id| doc.section_offset_top(id)) else {
        debug!("no section for {}, ignoring", href);
        return false;
    };
    doc.smooth_scroll_to(top - config::HEADER_OFFSET_PX);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::testing::RecordingDocument;

    #[test]
    fn header_compacts_only_past_threshold() {
        assert_eq!(HeaderStyle::for_scroll(0.0), HeaderStyle::Expanded);
        assert_eq!(HeaderStyle::for_scroll(10.0), HeaderStyle::Expanded);
        assert_eq!(HeaderStyle::for_scroll(11.0), HeaderStyle::Compact);
    }

    #[test]
    fn anchor_id_strips_hash() {
        assert_eq!(anchor_id("#team"), Some("team"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("team"), None);
    }

    #[test]
    fn scrolls_below_fixed_header() {
        let doc = RecordingDocument::default().with_section("services", 900.0);
        assert!(scroll_to_anchor(&doc, "#services"));
        assert_eq!(*doc.scrolls.borrow(), vec![820.0]);
    }

    #[test]
    fn missing_section_is_a_silent_no_op() {
        let doc = RecordingDocument::default().with_section("home", 0.0);
        assert!(!scroll_to_anchor(&doc, "#pricing"));
        assert!(!scroll_to_anchor(&doc, "https://example.com"));
        assert!(doc.scrolls.borrow().is_empty());
    }
}
