//! Scroll request state machine
//!
//! One engine drives at most one animation at a time. `scroll_to` resolves
//! and validates a request, then either finishes it on the spot (already
//! at the target, or failed) or arms the single animation slot; `tick`
//! advances the armed animation one frame per call until it completes.
//!
//! A request issued while another is in flight supersedes it: the old
//! frame loop stops immediately and the new one starts from the current
//! position. The native smooth-scroll flag saved by the first request is
//! carried forward so the value restored at the end is the host's real
//! prior setting, never the `Auto` the engine forced.

use std::time::{Duration, Instant};

use crate::config::{EasingKind, ScrollBehavior, ScrollConfig};
use crate::error::Error;
use crate::host::Viewport;

use super::timing;

/// Positions closer than this are treated as already reached,
/// so a zero-distance animation is never started.
const SKIP_THRESHOLD: f64 = 1.0;

/// Destination of a scroll request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Element id, with or without a leading `#`
    Id(String),
    /// Top of the document
    Top,
}

impl From<&str> for ScrollTarget {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ScrollTarget {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

/// Per-request options and lifecycle hooks
///
/// Built with the defaults from the option table (offset 0, 1000 ms,
/// ease-in-out, smooth) and adjusted builder-style:
///
/// ```ignore
/// let options = ScrollOptions::from_config(&config.scroll)
///     .with_offset(64.0)
///     .on_complete(|| tracing::debug!("arrived"));
/// ```
pub struct ScrollOptions {
    pub offset: f64,
    pub duration: Duration,
    pub easing: EasingKind,
    /// Informational only; the engine always self-animates
    pub behavior: ScrollBehavior,
    on_start: Option<Box<dyn FnMut()>>,
    on_complete: Option<Box<dyn FnMut()>>,
    on_error: Option<Box<dyn FnMut(&Error)>>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            duration: Duration::from_millis(1000),
            easing: EasingKind::EaseInOut,
            behavior: ScrollBehavior::Smooth,
            on_start: None,
            on_complete: None,
            on_error: None,
        }
    }
}

impl ScrollOptions {
    /// Options taken from the scroll section of the app config
    pub fn from_config(config: &ScrollConfig) -> Self {
        Self {
            offset: config.offset,
            duration: config.duration(),
            easing: config.easing,
            behavior: config.behavior,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Invoked once, before the first frame, only if an animation starts
    pub fn on_start<F: FnMut() + 'static>(mut self, hook: F) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Invoked once on reaching the target, including the skip path
    pub fn on_complete<F: FnMut() + 'static>(mut self, hook: F) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Invoked once on any failure; failures never propagate as panics
    pub fn on_error<F: FnMut(&Error) + 'static>(mut self, hook: F) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("offset", &self.offset)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("behavior", &self.behavior)
            .finish_non_exhaustive()
    }
}

/// Armed animation occupying the engine's single slot
struct ActiveScroll {
    started: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingKind,
    /// Native behavior to restore when the animation completes
    restore: ScrollBehavior,
    on_complete: Option<Box<dyn FnMut()>>,
}

/// Smooth scroll animation driver
#[derive(Default)]
pub struct ScrollEngine {
    active: Option<ActiveScroll>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an animation currently occupies the slot
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Final position of the in-flight animation, if any
    pub fn target_position(&self) -> Option<f64> {
        self.active.as_ref().map(|anim| anim.to)
    }

    /// Start animating the viewport toward `target`.
    ///
    /// Returns immediately; progress is observed through the option
    /// hooks and by calling [`tick`](Self::tick) each frame. Failures
    /// (unknown id, unavailable host) are delivered to `on_error` and
    /// logged, never returned or panicked.
    pub fn scroll_to<V, T>(&mut self, host: &mut V, target: T, options: ScrollOptions)
    where
        V: Viewport,
        T: Into<ScrollTarget>,
    {
        let target = target.into();
        let ScrollOptions {
            offset,
            duration,
            easing,
            behavior: _,
            mut on_start,
            mut on_complete,
            mut on_error,
        } = options;

        if !host.is_available() {
            let err = Error::EnvironmentUnavailable(
                "no renderable viewport for this scroll request".to_string(),
            );
            report(&mut on_error, &err);
            return;
        }

        let target_position = match resolve(host, &target, offset) {
            Ok(position) => position,
            Err(err) => {
                report(&mut on_error, &err);
                return;
            }
        };

        let start_position = host.scroll_position();

        // Within a pixel of the destination: complete without a single frame
        if (start_position - target_position).abs() < SKIP_THRESHOLD {
            tracing::debug!(
                position = start_position,
                ?target,
                "already at scroll target, skipping animation"
            );
            run(&mut on_complete);
            return;
        }

        // Force native smooth scrolling off so the host does not animate
        // our per-frame writes a second time. A superseded animation
        // already holds the flag's true prior value.
        let restore = match self.active.take() {
            Some(previous) => {
                tracing::debug!(from = previous.to, to = target_position, "superseding scroll");
                previous.restore
            }
            None => host.native_behavior(),
        };
        host.set_native_behavior(ScrollBehavior::Auto);

        tracing::debug!(
            from = start_position,
            to = target_position,
            ?easing,
            duration_ms = duration.as_millis() as u64,
            "starting scroll animation"
        );
        run(&mut on_start);

        self.active = Some(ActiveScroll {
            started: Instant::now(),
            from: start_position,
            to: target_position,
            duration,
            easing,
            restore,
            on_complete,
        });
    }

    /// Animate to the top of the document; same machine with the target
    /// fixed at position 0
    pub fn scroll_to_top<V: Viewport>(&mut self, host: &mut V, options: ScrollOptions) {
        self.scroll_to(host, ScrollTarget::Top, options);
    }

    /// Advance the in-flight animation one frame.
    ///
    /// Call once per display frame. Returns true while an animation
    /// remains active, false once the slot is free.
    pub fn tick<V: Viewport>(&mut self, host: &mut V) -> bool {
        let elapsed = match &self.active {
            Some(anim) => anim.started.elapsed(),
            None => return false,
        };
        self.step(host, elapsed)
    }

    /// One frame at an explicit elapsed time since the animation started
    fn step<V: Viewport>(&mut self, host: &mut V, elapsed: Duration) -> bool {
        let Some(anim) = self.active.as_ref() else {
            return false;
        };

        let t = timing::progress(elapsed, anim.duration);
        let eased = anim.easing.apply(t);
        host.set_scroll_position(timing::lerp(anim.from, anim.to, eased));

        if t < 1.0 {
            return true;
        }

        if let Some(mut anim) = self.active.take() {
            host.set_native_behavior(anim.restore);
            tracing::debug!(position = anim.to, "scroll animation complete");
            run(&mut anim.on_complete);
        }
        false
    }
}

/// Resolve a target to a document position, clamped to the scrollable range
fn resolve<V: Viewport>(host: &V, target: &ScrollTarget, offset: f64) -> crate::Result<f64> {
    let raw = match target {
        ScrollTarget::Top => 0.0,
        ScrollTarget::Id(id) => {
            let id = id.strip_prefix('#').unwrap_or(id);
            let rect = host
                .element_rect(id)
                .ok_or_else(|| Error::TargetNotFound(id.to_string()))?;
            rect.top + host.scroll_position() - offset
        }
    };

    let (_, viewport_height) = host.viewport_size();
    let max_scroll = (host.content_height() - viewport_height).max(0.0);
    Ok(raw.clamp(0.0, max_scroll))
}

fn run(hook: &mut Option<Box<dyn FnMut()>>) {
    if let Some(hook) = hook.as_mut() {
        hook();
    }
}

fn report(hook: &mut Option<Box<dyn FnMut(&Error)>>, err: &Error) {
    tracing::warn!(%err, "scroll request failed");
    if let Some(hook) = hook.as_mut() {
        hook(err);
    }
}
