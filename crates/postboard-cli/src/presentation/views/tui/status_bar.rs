use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::BoardViewModel;

pub struct StatusBarView<'a> {
    model: &'a BoardViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a BoardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
                .areas(area);

        let selected = match &self.model.selected_id {
            Some(id) => format!("#{}", id),
            None => "none".to_string(),
        };
        let in_flight_style = if self.model.in_flight > 0 {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        Paragraph::new(Line::from(vec![
            Span::raw(format!("Posts: {} ", self.model.posts.len())),
            Span::raw("| "),
            Span::raw(format!("Selected: {} ", selected)),
            Span::raw("| "),
            Span::styled(format!("In flight: {}", self.model.in_flight), in_flight_style),
        ]))
        .render(left, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw("move "),
            Span::styled("[space]", Style::default().fg(Color::Yellow)),
            Span::raw("select"),
        ]))
        .render(right, buf);
    }
}
