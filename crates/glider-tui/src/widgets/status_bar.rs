use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let section = app.current_section_title().unwrap_or("-");
        let motion = if app.engine.is_animating() {
            "scrolling"
        } else {
            "idle"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            format!(" {} | {}% | {}", section, app.scroll_percent(), motion)
        };

        let help_hint = " q:quit j/k:line n/p:section g:top G:end r:re-arm ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Color::Black).bg(Color::Gray),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Color::Gray)),
            Span::styled(
                help_hint,
                Style::default().fg(Color::DarkGray).bg(Color::Gray),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
