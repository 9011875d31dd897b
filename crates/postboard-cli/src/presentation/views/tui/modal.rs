use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{FocusTarget, ModalViewModel};

pub struct ModalView<'a> {
    model: &'a ModalViewModel,
}

impl<'a> ModalView<'a> {
    pub fn new(model: &'a ModalViewModel) -> Self {
        Self { model }
    }

    fn border_style(&self, target: FocusTarget) -> Style {
        if self.model.focus == target {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    }

    fn button(&self, label: &'a str, target: FocusTarget) -> Span<'a> {
        let style = if self.model.focus == target {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        Span::styled(format!("[ {} ]", label), style)
    }
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(self.model.heading.as_str())
            .title_bottom(" Tab: next field · Ctrl+S: send · Esc: cancel ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, body_area, buttons_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.model.title.as_str())
            .block(
                Block::default()
                    .title("Title")
                    .borders(Borders::ALL)
                    .border_style(self.border_style(FocusTarget::Title)),
            )
            .render(title_area, buf);

        Paragraph::new(self.model.body.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title("Body")
                    .borders(Borders::ALL)
                    .border_style(self.border_style(FocusTarget::Body)),
            )
            .render(body_area, buf);

        Paragraph::new(Line::from(vec![
            self.button("Cancel", FocusTarget::Cancel),
            Span::raw("  "),
            self.button("Send", FocusTarget::Send),
        ]))
        .render(buttons_area, buf);
    }
}
