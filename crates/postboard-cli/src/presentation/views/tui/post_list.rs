use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::view_models::PostItemViewModel;

pub const SELECTED_BG: Color = Color::Blue;

/// Builds the stateful list; the caller renders it with the cursor state.
pub struct PostListView<'a> {
    posts: &'a [PostItemViewModel],
}

impl<'a> PostListView<'a> {
    pub fn new(posts: &'a [PostItemViewModel]) -> Self {
        Self { posts }
    }

    pub fn build_list(&self) -> List<'a> {
        let items: Vec<ListItem> = self.posts.iter().map(post_item).collect();

        List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
    }
}

fn post_item(post: &PostItemViewModel) -> ListItem<'_> {
    let mut title = vec![Span::styled(
        post.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if post.is_new {
        title.push(Span::styled(" [new]", Style::default().fg(Color::Green)));
    }

    let mut lines = vec![Line::from(title)];
    lines.extend(
        post.body
            .lines()
            .map(|line| Line::styled(line, Style::default().fg(Color::Gray))),
    );
    lines.push(Line::default());

    let style = if post.is_selected {
        Style::default().bg(SELECTED_BG).fg(Color::White)
    } else {
        Style::default()
    };

    ListItem::new(Text::from(lines)).style(style)
}
