use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let top = app.document.top_line();
        let visible = area.height as usize;

        let mut lines: Vec<Line> = Vec::with_capacity(visible);
        for (row, text) in app
            .document
            .lines()
            .iter()
            .enumerate()
            .skip(top)
            .take(visible)
        {
            let line = match app.document.section_at_line(row) {
                Some(section) => {
                    let revealing = app
                        .reveal
                        .as_ref()
                        .is_some_and(|reveal| reveal.id == section.id);
                    let style = if revealing {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    };
                    Line::from(Span::styled(text.clone(), style))
                }
                None => Line::from(text.clone()),
            };
            lines.push(line);
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
