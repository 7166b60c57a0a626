use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use glider_core::scroll::query;
use glider_core::{
    AppConfig, Error, ScrollEngine, ScrollOptions, SharedTriggerRegistry, TriggerRegistry,
    UnloadSignal, Viewport,
};

use crate::document::Document;

/// One-shot entrance highlight for a section heading
#[derive(Debug, Clone)]
pub struct Reveal {
    pub id: String,
    started: Instant,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub document: Document,
    pub engine: ScrollEngine,
    unload: UnloadSignal,
    registry: SharedTriggerRegistry,
    /// Last engine failure, drained into the status line each tick
    last_error: Rc<RefCell<Option<String>>>,
    pub current_section: Option<String>,
    pub reveal: Option<Reveal>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, document: Document) -> Self {
        let mut unload = UnloadSignal::new();
        // Subscribed once here; cleared when the app tears down
        let registry = TriggerRegistry::shared_with_unload(&mut unload);

        Self {
            config,
            document,
            engine: ScrollEngine::new(),
            unload,
            registry,
            last_error: Rc::new(RefCell::new(None)),
            current_section: None,
            reveal: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.document.scroll_by(1.0),
            KeyCode::Char('k') | KeyCode::Up => self.document.scroll_by(-1.0),
            KeyCode::Char('d') | KeyCode::PageDown => self.document.scroll_by(self.half_page()),
            KeyCode::Char('u') | KeyCode::PageUp => self.document.scroll_by(-self.half_page()),
            KeyCode::Char('n') | KeyCode::Tab => self.goto_adjacent_section(true),
            KeyCode::Char('p') | KeyCode::BackTab => self.goto_adjacent_section(false),
            KeyCode::Char('g') | KeyCode::Home => {
                let options = self.request_options();
                self.engine.scroll_to_top(&mut self.document, options);
            }
            KeyCode::Char('G') | KeyCode::End => {
                if let Some(last) = self.document.sections().last() {
                    let id = last.id.clone();
                    self.goto_section(&id);
                }
            }
            KeyCode::Char('r') => {
                if let Ok(mut registry) = self.registry.lock() {
                    registry.reset();
                }
                self.reveal = None;
                self.status_message = Some("section reveals re-armed".to_string());
            }
            _ => {}
        }
    }

    /// Handle terminal resize; the bottom row is reserved for the status bar
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.document.set_viewport(width, height.saturating_sub(1));
    }

    /// Advance one frame: animation, section tracking, reveal expiry
    pub fn on_tick(&mut self) {
        self.engine.tick(&mut self.document);

        if let Some(err) = self.last_error.borrow_mut().take() {
            self.status_message = Some(err);
        }

        let section = query::current_section(&self.document, 0.0);
        if section != self.current_section {
            if let Some(id) = &section {
                let fire = self
                    .registry
                    .lock()
                    .map(|mut registry| registry.should_trigger(id))
                    .unwrap_or(false);
                if fire {
                    tracing::debug!(section = %id, "playing section reveal");
                    self.reveal = Some(Reveal {
                        id: id.clone(),
                        started: Instant::now(),
                    });
                }
            }
            self.current_section = section;
        }

        if let Some(reveal) = &self.reveal {
            let lifetime = Duration::from_millis(self.config.ui.reveal_duration_ms);
            if reveal.started.elapsed() >= lifetime {
                self.reveal = None;
            }
        }
    }

    /// Fire the teardown signal; the trigger registry clears itself here
    pub fn shutdown(&mut self) {
        self.unload.fire();
    }

    /// Percentage of the scrollable range covered, for the status bar
    pub fn scroll_percent(&self) -> u16 {
        let max = self.document.max_scroll();
        if max <= 0.0 {
            return 100;
        }
        ((self.document.scroll_position() / max) * 100.0).round() as u16
    }

    /// Title of the section the viewport has reached, if any
    pub fn current_section_title(&self) -> Option<&str> {
        let id = self.current_section.as_deref()?;
        self.document
            .sections()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.title.as_str())
    }

    fn half_page(&self) -> f64 {
        let (_, height) = self.document.viewport_size();
        (height / 2.0).max(1.0)
    }

    fn goto_adjacent_section(&mut self, forward: bool) {
        let sections = self.document.sections();
        if sections.is_empty() {
            return;
        }

        let id = match self.current_section.as_deref() {
            None => Some(sections[0].id.clone()),
            Some(current) => {
                let neighbor = if forward {
                    self.document.section_after(current)
                } else {
                    self.document.section_before(current)
                };
                neighbor.map(|s| s.id.clone())
            }
        };

        if let Some(id) = id {
            self.goto_section(&id);
        }
    }

    fn goto_section(&mut self, id: &str) {
        let options = self.request_options();
        self.engine.scroll_to(&mut self.document, id, options);
    }

    /// Per-request options from config, with the error hook wired to the
    /// status line
    fn request_options(&self) -> ScrollOptions {
        let slot = Rc::clone(&self.last_error);
        ScrollOptions::from_config(&self.config.scroll)
            .on_error(move |err: &Error| *slot.borrow_mut() = Some(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app() -> App {
        let mut app = App::new(AppConfig::default(), Document::sample());
        app.handle_resize(80, 25);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_line_scroll_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.document.scroll_position(), 2.0);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.document.scroll_position(), 1.0);
    }

    #[test]
    fn test_next_section_starts_animation() {
        let mut app = app();
        app.on_tick(); // establishes the current section
        assert_eq!(app.current_section.as_deref(), Some("welcome"));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.engine.is_animating());
        let features_line = app.document.sections()[1].line as f64;
        assert_eq!(app.engine.target_position(), Some(features_line));
    }

    #[test]
    fn test_reveal_fires_once_per_section() {
        let mut app = app();
        app.on_tick();
        assert!(app.reveal.is_some());
        let first = app.reveal.clone().map(|r| r.id);
        assert_eq!(first.as_deref(), Some("welcome"));

        // Re-entering the same section must not replay the reveal
        app.reveal = None;
        app.current_section = None;
        app.on_tick();
        assert!(app.reveal.is_none());
    }

    #[test]
    fn test_reset_key_rearms_reveals() {
        let mut app = app();
        app.on_tick();
        app.reveal = None;
        app.current_section = None;

        press(&mut app, KeyCode::Char('r'));
        app.on_tick();
        assert!(app.reveal.is_some());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_shutdown_clears_registry() {
        let mut app = app();
        app.on_tick();
        assert!(!app.registry.lock().unwrap().is_empty());
        app.shutdown();
        assert!(app.registry.lock().unwrap().is_empty());
    }

    #[test]
    fn test_engine_error_lands_in_status() {
        let mut app = app();
        app.goto_section("no-such-section");
        app.on_tick();
        let status = app.status_message.clone().unwrap_or_default();
        assert!(status.contains("no-such-section"));
    }
}
