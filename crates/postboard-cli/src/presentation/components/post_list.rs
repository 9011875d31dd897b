//! Post list component.
//!
//! Keeps the keyboard cursor. The cursor is not the selection: selection
//! lives on the board and only changes when a toggle is forwarded.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::PostItemViewModel;
use crate::presentation::views::tui::PostListView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostListAction {
    /// Toggle selection of the post at this index.
    Toggle(usize),
}

pub struct PostListComponent {
    state: ListState,
}

impl Default for PostListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl PostListComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default().with_selected(Some(0)),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_input(&mut self, key: KeyEvent, data_len: usize) -> Option<PostListAction> {
        if data_len == 0 {
            return None;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home => {
                self.state.select(Some(0));
                None
            }
            KeyCode::End => {
                self.state.select(Some(data_len - 1));
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let cursor = self.state.selected()?.min(data_len - 1);
                Some(PostListAction::Toggle(cursor))
            }
            _ => None,
        }
    }

    /// Render with the cursor clamped to the current data.
    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &[PostItemViewModel]) {
        if data.is_empty() {
            self.state.select(None);
        } else {
            let cursor = self.state.selected().unwrap_or(0).min(data.len() - 1);
            self.state.select(Some(cursor));
        }

        let list = PostListView::new(data).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn next(&mut self, data_len: usize) {
        let i = match self.state.selected() {
            Some(i) if i + 1 < data_len => i + 1,
            Some(i) => i.min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }
}
