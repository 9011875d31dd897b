//! Full-screen text shown instead of the board while loading or after the
//! initial query failed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};

pub struct MessageView {
    text: String,
    style: Style,
}

impl MessageView {
    pub fn loading() -> Self {
        Self {
            text: "Loading...".to_string(),
            style: Style::default(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            text: format!("Error: {}", message),
            style: Style::default().fg(Color::Red),
        }
    }
}

impl Widget for MessageView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(self.text, self.style))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
