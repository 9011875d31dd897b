//! Components own UI-only state and turn key presses into board actions.

pub mod modal;
pub mod post_list;

pub use modal::{ModalAction, ModalComponent};
pub use post_list::{PostListAction, PostListComponent};
