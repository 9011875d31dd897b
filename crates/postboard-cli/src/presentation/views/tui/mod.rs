//! Ratatui widgets for the post board.
//!
//! Each view borrows a ViewModel and maps it onto widgets. No state lives
//! here; the list cursor belongs to `PostListComponent`.

pub mod footer;
pub mod header;
pub mod message;
pub mod modal;
pub mod post_list;
pub mod status_bar;

pub use footer::FooterView;
pub use header::HeaderView;
pub use message::MessageView;
pub use modal::ModalView;
pub use post_list::PostListView;
pub use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A rectangle of the given percentage size centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
