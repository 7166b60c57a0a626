use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use glider_core::{AppConfig, Error};
use glider_tui::{
    app::App,
    document::Document,
    event::{AppEvent, EventHandler},
    widgets::{PageWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, file: Option<PathBuf>) -> Result<()> {
    // Same failure the engine reports for a headless host, surfaced
    // before any terminal state is touched
    if !io::stdout().is_terminal() {
        return Err(
            Error::EnvironmentUnavailable("stdout is not a terminal".to_string()).into(),
        );
    }

    let document = match file {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Document::from_text(&text)
        }
        None => Document::sample(),
    };
    tracing::debug!(sections = document.sections().len(), "document loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Glider"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, document);

    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    let result = run_loop(&mut terminal, &mut app, &events);

    // Host teardown: fires the unload signal
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());
            PageWidget::render(frame, chunks[0], app);
            StatusBarWidget::render(frame, chunks[1], app);
        })?;

        match events.next()? {
            Some(AppEvent::Key(key)) => app.handle_key(key),
            Some(AppEvent::Resize(width, height)) => app.handle_resize(width, height),
            Some(AppEvent::Tick) => app.on_tick(),
            None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
