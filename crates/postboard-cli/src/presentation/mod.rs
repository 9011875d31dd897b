//! # Presentation Layer
//!
//! MVVM adapted for two front ends.
//!
//! ```text
//! Console:  [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] --> JSON | Display
//!
//! TUI:      [ Board ] --> [ Presenter ] --> [ BoardViewModel ] --> [ Views (Widgets) ]
//!               ^                                                        |
//!               |  Action            [ Component ] <-- key events        |
//!               +-------------------- (UI state)  <----------------------+
//! ```
//!
//! ViewModels carry raw data and derive `Serialize`; `--format json` dumps
//! them as-is inside a `CommandResultViewModel` envelope. Views own layout
//! only. Components own UI state that is not part of the board (the list
//! cursor) and translate keys into board actions.

pub mod components;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{BoardScreen, ConsoleRenderer, Renderer, TuiRenderer};
