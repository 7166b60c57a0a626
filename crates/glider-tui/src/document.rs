//! Scrollable text document
//!
//! The terminal-side implementation of the core `Viewport` trait. Rows are
//! the pixel unit: scroll position, content height, and element geometry
//! are all measured in lines of text. Sections are the addressable
//! elements — every `# ` heading becomes one, with a slug id derived from
//! its title.

use glider_core::{Rect, ScrollBehavior, Viewport};

/// One addressable section of the document
#[derive(Debug, Clone)]
pub struct Section {
    /// Slug id used as the scroll target (e.g. "getting-started")
    pub id: String,
    /// Heading text as written
    pub title: String,
    /// Line the heading sits on
    pub line: usize,
    /// Lines from the heading to the next section (or end of document)
    pub len: usize,
}

/// In-memory document with named sections and one vertical scroll position
#[derive(Debug)]
pub struct Document {
    lines: Vec<String>,
    sections: Vec<Section>,
    scroll: f64,
    width: u16,
    height: u16,
    native_behavior: ScrollBehavior,
}

impl Document {
    /// Parse text into a document. Lines starting with `# ` become
    /// section headings.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();

        let mut sections: Vec<Section> = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(title) = line.strip_prefix("# ") {
                let title = title.trim();
                if title.is_empty() {
                    continue;
                }
                sections.push(Section {
                    id: slugify(title),
                    title: title.to_string(),
                    line: index,
                    len: 0,
                });
            }
        }

        // Each section runs until the next heading
        let total = lines.len();
        for index in 0..sections.len() {
            let end = sections.get(index + 1).map_or(total, |next| next.line);
            sections[index].len = end - sections[index].line;
        }

        Self {
            lines,
            sections,
            scroll: 0.0,
            width: 0,
            height: 0,
            native_behavior: ScrollBehavior::Smooth,
        }
    }

    /// Built-in sample page for running without a file argument
    pub fn sample() -> Self {
        let mut text = String::new();
        let sections: [(&str, &str); 6] = [
            ("Welcome", "A smooth-scrolling document viewer."),
            ("Features", "Eased scroll animations between named sections."),
            ("Showcase", "Cubic ease-in, ease-out, and ease-in-out curves."),
            ("Testimonials", "Sections reveal themselves once per session."),
            ("Pricing", "Free, as in both senses."),
            ("Contact", "File an issue if a curve feels wrong."),
        ];
        for (title, blurb) in sections {
            text.push_str(&format!("# {title}\n\n{blurb}\n"));
            for i in 1..=18 {
                text.push_str(&format!("{title} paragraph line {i}.\n"));
            }
            text.push('\n');
        }
        Self::from_text(&text)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Highest reachable scroll position
    pub fn max_scroll(&self) -> f64 {
        (self.lines.len() as f64 - self.height as f64).max(0.0)
    }

    /// Record the renderable area. Until this is called with a non-zero
    /// size the document reports itself unavailable.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Scroll by whole lines without animating
    pub fn scroll_by(&mut self, delta: f64) {
        let position = (self.scroll + delta).clamp(0.0, self.max_scroll());
        self.scroll = position;
    }

    /// First visible line for rendering
    pub fn top_line(&self) -> usize {
        self.scroll.round() as usize
    }

    /// Section following `id` in document order, if any
    pub fn section_after(&self, id: &str) -> Option<&Section> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        self.sections.get(index + 1)
    }

    /// Section preceding `id` in document order, if any
    pub fn section_before(&self, id: &str) -> Option<&Section> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        index.checked_sub(1).and_then(|i| self.sections.get(i))
    }

    /// Section whose heading sits on this line, if any
    pub fn section_at_line(&self, line: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.line == line)
    }
}

impl Viewport for Document {
    fn is_available(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    fn scroll_position(&self) -> f64 {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: f64) {
        self.scroll = position.clamp(0.0, self.max_scroll());
    }

    fn viewport_size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn content_height(&self) -> f64 {
        self.lines.len() as f64
    }

    fn element_rect(&self, id: &str) -> Option<Rect> {
        self.sections.iter().find(|s| s.id == id).map(|s| {
            Rect::new(
                s.line as f64 - self.scroll,
                0.0,
                self.width as f64,
                s.len as f64,
            )
        })
    }

    fn element_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    fn native_behavior(&self) -> ScrollBehavior {
        self.native_behavior
    }

    fn set_native_behavior(&mut self, behavior: ScrollBehavior) {
        self.native_behavior = behavior;
    }
}

/// Lowercase, alphanumeric words joined with hyphens
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glider_core::scroll::query;

    fn doc() -> Document {
        let mut doc = Document::from_text(
            "# Getting Started\nline\nline\n# User Guide!\nline\nline\nline\n# FAQ\nline\n",
        );
        doc.set_viewport(80, 4);
        doc
    }

    #[test]
    fn test_sections_from_headings() {
        let doc = doc();
        let ids: Vec<&str> = doc.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["getting-started", "user-guide", "faq"]);
        assert_eq!(doc.sections()[0].line, 0);
        assert_eq!(doc.sections()[0].len, 3);
        assert_eq!(doc.sections()[1].line, 3);
        assert_eq!(doc.sections()[1].len, 4);
        assert_eq!(doc.sections()[2].len, 2);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("User Guide!"), "user-guide");
        assert_eq!(slugify("  FAQ  "), "faq");
        assert_eq!(slugify("A -- B"), "a-b");
    }

    #[test]
    fn test_viewport_geometry() {
        let mut doc = doc();
        assert!(doc.is_available());
        assert_eq!(doc.content_height(), 9.0);
        assert_eq!(doc.max_scroll(), 5.0);

        doc.set_scroll_position(2.0);
        let rect = doc.element_rect("user-guide").unwrap();
        assert_eq!(rect.top, 1.0);
        assert_eq!(rect.height, 4.0);
        assert_eq!(doc.element_rect("nope"), None);
    }

    #[test]
    fn test_scroll_writes_are_clamped() {
        let mut doc = doc();
        doc.set_scroll_position(100.0);
        assert_eq!(doc.scroll_position(), 5.0);
        doc.scroll_by(-100.0);
        assert_eq!(doc.scroll_position(), 0.0);
    }

    #[test]
    fn test_unavailable_until_sized() {
        let doc = Document::from_text("# A\n");
        assert!(!doc.is_available());
    }

    #[test]
    fn test_current_section_over_document() {
        let mut doc = doc();
        doc.set_scroll_position(4.0);
        assert_eq!(query::current_section(&doc, 0.0).as_deref(), Some("user-guide"));
    }

    #[test]
    fn test_section_navigation() {
        let doc = doc();
        assert_eq!(doc.section_after("getting-started").map(|s| s.id.as_str()), Some("user-guide"));
        assert_eq!(doc.section_before("user-guide").map(|s| s.id.as_str()), Some("getting-started"));
        assert_eq!(doc.section_before("getting-started").map(|s| s.id.as_str()), None);
        assert_eq!(doc.section_after("faq").map(|s| s.id.as_str()), None);
    }

    #[test]
    fn test_sample_has_sections() {
        let doc = Document::sample();
        assert!(doc.sections().len() >= 4);
        assert_eq!(doc.sections()[0].id, "welcome");
    }
}
