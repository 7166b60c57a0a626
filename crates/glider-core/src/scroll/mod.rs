//! Smooth scrolling engine
//!
//! Animates a host viewport's vertical scroll position toward a named
//! element (or the top of the document) over a fixed duration with a
//! configurable easing curve, instead of relying on the host's native
//! smooth scrolling.
//!
//! - `easing` - Pure easing functions (linear, cubic in/out/in-out)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `query` - Geometry queries (viewport containment, current section)
//! - `engine` - The per-request state machine combining the above
//!
//! # Usage
//!
//! ```ignore
//! use glider_core::{ScrollEngine, ScrollOptions};
//!
//! let mut engine = ScrollEngine::new();
//!
//! // Kick off an animation toward the element with id "pricing"
//! engine.scroll_to(&mut viewport, "#pricing", ScrollOptions::default());
//!
//! // In the main loop, advance one frame per tick
//! while engine.tick(&mut viewport) {
//!     // redraw
//! }
//! ```

pub mod easing;
pub mod engine;
pub mod query;
pub mod timing;

pub use engine::{ScrollEngine, ScrollOptions, ScrollTarget};
pub use query::{current_section, is_element_in_viewport};
