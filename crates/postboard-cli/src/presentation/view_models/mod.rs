pub mod board;
pub mod common;
pub mod config;
pub mod post;
pub mod result;

pub use board::{BoardStatus, BoardViewModel, FocusTarget, ModalViewModel, PostItemViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use post::{
    DeleteResultViewModel, MutationKind, PostListViewModel, PostResultViewModel, PostViewModel,
};
pub use result::CommandResultViewModel;
