//! Host viewport abstraction
//!
//! The scroll engine never talks to a concrete rendering environment.
//! Everything it needs from the host — scroll position, geometry, the
//! native smooth-scroll flag, the teardown signal — comes through the
//! types in this module.

use crate::config::ScrollBehavior;

/// Bounding rectangle of a named element, relative to the visible
/// viewport (the top of a scrolled-past element is negative).
/// Document-relative top is `rect.top + scroll_position`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// A scrollable rendering surface the engine can drive.
///
/// Implementations own one vertical scroll position, a document of named
/// elements, and a native smooth-scroll flag the engine toggles around
/// its own animation so the host does not animate the same writes twice.
pub trait Viewport {
    /// Whether the host can render at all. When this returns false the
    /// engine reports an environment error and performs no other calls
    /// on the viewport.
    fn is_available(&self) -> bool;

    /// Current vertical scroll offset
    fn scroll_position(&self) -> f64;

    /// Set the vertical scroll offset directly (one animation frame)
    fn set_scroll_position(&mut self, position: f64);

    /// Visible size as (width, height)
    fn viewport_size(&self) -> (f64, f64);

    /// Total scrollable height of the document
    fn content_height(&self) -> f64;

    /// Viewport-relative bounding rect of the element with this id,
    /// or `None` if no such element exists
    fn element_rect(&self, id: &str) -> Option<Rect>;

    /// Ids of all addressable elements, in document order (top to bottom)
    fn element_ids(&self) -> Vec<String>;

    /// Current native smooth-scroll flag
    fn native_behavior(&self) -> ScrollBehavior;

    /// Overwrite the native smooth-scroll flag
    fn set_native_behavior(&mut self, behavior: ScrollBehavior);
}

/// Teardown notification for host shutdown (the page-unload analogue).
///
/// Subscribers are registered once, at construction time of whatever
/// service needs them; `fire` runs every hook and is idempotent — the
/// underlying event happens at most once per host lifetime, and repeated
/// fires are ignored.
#[derive(Default)]
pub struct UnloadSignal {
    hooks: Vec<Box<dyn FnMut()>>,
    fired: bool,
}

impl UnloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook to run when the host tears down
    pub fn subscribe<F>(&mut self, hook: F)
    where
        F: FnMut() + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Number of registered hooks
    pub fn subscriber_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run all hooks. Only the first call has any effect.
    pub fn fire(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;
        for hook in &mut self.hooks {
            hook();
        }
    }
}

impl std::fmt::Debug for UnloadSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnloadSignal")
            .field("hooks", &self.hooks.len())
            .field("fired", &self.fired)
            .finish()
    }
}

/// In-memory viewport used by the engine and query tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;

    /// Fake document: named elements at fixed document-relative tops,
    /// with a record of every scroll write the engine performs.
    pub struct MockViewport {
        pub available: bool,
        pub scroll: f64,
        pub width: f64,
        pub height: f64,
        pub content_height: f64,
        pub behavior: ScrollBehavior,
        /// (id, document-relative top, height), in document order
        pub elements: Vec<(String, f64, f64)>,
        pub writes: Vec<f64>,
    }

    impl MockViewport {
        pub fn new(content_height: f64, viewport_height: f64) -> Self {
            Self {
                available: true,
                scroll: 0.0,
                width: 1280.0,
                height: viewport_height,
                content_height,
                behavior: ScrollBehavior::Smooth,
                elements: Vec::new(),
                writes: Vec::new(),
            }
        }

        pub fn with_element(mut self, id: &str, doc_top: f64, height: f64) -> Self {
            self.elements.push((id.to_string(), doc_top, height));
            self
        }
    }

    impl Viewport for MockViewport {
        fn is_available(&self) -> bool {
            self.available
        }

        fn scroll_position(&self) -> f64 {
            self.scroll
        }

        fn set_scroll_position(&mut self, position: f64) {
            self.scroll = position;
            self.writes.push(position);
        }

        fn viewport_size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn content_height(&self) -> f64 {
            self.content_height
        }

        fn element_rect(&self, id: &str) -> Option<Rect> {
            self.elements
                .iter()
                .find(|(eid, _, _)| eid == id)
                .map(|(_, doc_top, height)| {
                    Rect::new(*doc_top - self.scroll, 0.0, self.width, *height)
                })
        }

        fn element_ids(&self) -> Vec<String> {
            self.elements.iter().map(|(id, _, _)| id.clone()).collect()
        }

        fn native_behavior(&self) -> ScrollBehavior {
            self.behavior
        }

        fn set_native_behavior(&mut self, behavior: ScrollBehavior) {
            self.behavior = behavior;
        }
    }
}
