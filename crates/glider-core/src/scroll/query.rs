//! Geometry queries over a host viewport
//!
//! Read-only helpers used for navigation state: which section the user is
//! currently looking at, and whether an element is fully visible.

use crate::host::Viewport;

/// True iff the element's bounding rect is fully inside the viewport,
/// with `offset` pixels of vertical slack. Unknown ids are not visible.
pub fn is_element_in_viewport<V: Viewport>(host: &V, id: &str, offset: f64) -> bool {
    let Some(rect) = host.element_rect(id) else {
        return false;
    };
    let (width, height) = host.viewport_size();
    rect.top >= -offset && rect.left >= 0.0 && rect.bottom() <= height + offset && rect.right() <= width
}

/// Id of the section the current scroll position has reached.
///
/// Scans all addressable elements from the bottom of the document upward
/// and returns the first whose document-relative top is at or above
/// `scroll + offset`. `None` when the viewport has no elements or the
/// scroll position is above every one of them.
pub fn current_section<V: Viewport>(host: &V, offset: f64) -> Option<String> {
    let scroll = host.scroll_position();

    for id in host.element_ids().into_iter().rev() {
        let Some(rect) = host.element_rect(&id) else {
            continue;
        };
        let doc_top = rect.top + scroll;
        if scroll >= doc_top - offset {
            return Some(id);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::MockViewport;

    fn three_sections() -> MockViewport {
        MockViewport::new(2400.0, 600.0)
            .with_element("hero", 0.0, 800.0)
            .with_element("features", 800.0, 800.0)
            .with_element("contact", 1600.0, 800.0)
    }

    #[test]
    fn test_current_section_midway() {
        let mut host = three_sections();
        host.scroll = 900.0;
        assert_eq!(current_section(&host, 0.0).as_deref(), Some("features"));
    }

    #[test]
    fn test_current_section_at_top() {
        let host = three_sections();
        assert_eq!(current_section(&host, 0.0).as_deref(), Some("hero"));
    }

    #[test]
    fn test_current_section_offset_pulls_next_in_early() {
        let mut host = three_sections();
        host.scroll = 1550.0;
        assert_eq!(current_section(&host, 0.0).as_deref(), Some("features"));
        assert_eq!(current_section(&host, 100.0).as_deref(), Some("contact"));
    }

    #[test]
    fn test_current_section_empty_document() {
        let host = MockViewport::new(2400.0, 600.0);
        assert_eq!(current_section(&host, 0.0), None);
    }

    #[test]
    fn test_element_in_viewport() {
        let mut host = three_sections();
        host.height = 900.0;
        // hero spans rows 0..800, viewport shows 0..900
        assert!(is_element_in_viewport(&host, "hero", 0.0));
        assert!(!is_element_in_viewport(&host, "features", 0.0));
        // 700px of slack lets features (800..1600) count as visible
        assert!(is_element_in_viewport(&host, "features", 700.0));
        assert!(!is_element_in_viewport(&host, "missing", 0.0));
    }

    #[test]
    fn test_element_scrolled_past_is_not_visible() {
        let mut host = three_sections();
        host.scroll = 850.0;
        // hero's top is now at -850
        assert!(!is_element_in_viewport(&host, "hero", 0.0));
    }
}
