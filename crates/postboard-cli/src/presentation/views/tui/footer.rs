use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::BoardViewModel;

pub struct FooterView<'a> {
    model: &'a BoardViewModel,
}

impl<'a> FooterView<'a> {
    pub fn new(model: &'a BoardViewModel) -> Self {
        Self { model }
    }
}

fn action(key: &'static str, label: &'static str, enabled: bool) -> Vec<Span<'static>> {
    let label_style = if enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
        Span::styled(label, label_style),
        Span::raw("   "),
    ]
}

impl<'a> Widget for FooterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has_selection = self.model.selected_id.is_some();

        let mut spans = action("c", "Create a new post", true);
        spans.extend(action("u", "Update post", has_selection));
        spans.extend(action("d", "Delete post", has_selection));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
