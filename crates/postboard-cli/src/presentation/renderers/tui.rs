//! TUI renderer for the post board.
//!
//! `BoardScreen` is the pure part: it owns the `Board` plus the components,
//! turns keys into actions and draws a frame. `TuiRenderer` adds the
//! terminal and the dispatcher, and runs the event loop.
//!
//! ## Design:
//! - All state changes happen on the UI thread, inside `Board::update`
//! - Effects go to the dispatcher; their outcomes come back over a channel
//! - The loop polls input with a timeout so outcomes are applied promptly

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use postboard_runtime::{Action, Board, Dispatcher, Effect, Outcome};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tracing::debug;

use crate::presentation::components::{
    ModalAction, ModalComponent, PostListAction, PostListComponent,
};
use crate::presentation::presenters::present_board;
use crate::presentation::view_models::BoardStatus;
use crate::presentation::views::tui::{
    FooterView, HeaderView, MessageView, ModalView, StatusBarView, centered_rect,
};

pub struct BoardScreen {
    board: Board,
    list: PostListComponent,
    should_quit: bool,
}

impl BoardScreen {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            list: PostListComponent::new(),
            should_quit: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn apply(&mut self, outcome: Outcome) {
        self.board.update(Action::Resolved(outcome));
    }

    /// Route one key press. Returns the effect the board asked for, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if let Some(modal) = self.board.modal_mut() {
            return match ModalComponent::handle_input(key, modal)? {
                ModalAction::Submit => self.board.update(Action::Submit),
                ModalAction::Cancel => self.board.update(Action::CloseModal),
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ if !self.board.is_ready() => None,
            KeyCode::Char('c') => self.board.update(Action::OpenCreate),
            KeyCode::Char('u') => self.board.update(Action::OpenUpdate),
            KeyCode::Char('d') => self.board.update(Action::Delete),
            _ => match self.list.handle_input(key, self.board.posts().len())? {
                PostListAction::Toggle(index) => self.board.update(Action::ToggleSelect(index)),
            },
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let model = present_board(&self.board);

        match &model.status {
            BoardStatus::Loading => {
                f.render_widget(MessageView::loading(), area);
                return;
            }
            BoardStatus::Error { message } => {
                f.render_widget(MessageView::error(message), area);
                return;
            }
            BoardStatus::Ready => {}
        }

        let [header, main, footer, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&model.header), header);
        self.list.render(f, main, &model.posts);
        f.render_widget(FooterView::new(&model), footer);
        f.render_widget(StatusBarView::new(&model), status);

        if let Some(modal) = &model.modal {
            f.render_widget(ModalView::new(modal), centered_rect(70, 70, area));
        }
    }
}

/// Run `body`, then `restore` regardless of how `body` ended. An error from
/// `body` takes precedence over one from `restore`.
fn run_restoring(
    body: impl FnOnce() -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = body();
    let restored = restore();
    result.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

pub struct TuiRenderer {
    screen: BoardScreen,
    dispatcher: Dispatcher,
    outcomes: Receiver<Outcome>,
}

impl TuiRenderer {
    pub fn new(screen: BoardScreen, dispatcher: Dispatcher, outcomes: Receiver<Outcome>) -> Self {
        Self {
            screen,
            dispatcher,
            outcomes,
        }
    }

    /// Take over the terminal, send `initial`, and loop until the user quits.
    ///
    /// Once raw mode is on, the terminal is restored on every exit path.
    pub fn run(mut self, initial: Effect) -> Result<()> {
        enable_raw_mode()?;
        run_restoring(|| self.run_in_terminal(initial), restore_terminal)
    }

    fn run_in_terminal(&mut self, initial: Effect) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        ctrlc::set_handler(move || {
            let _ = restore_terminal();
            std::process::exit(130);
        })?;

        self.dispatcher.dispatch(initial);
        self.event_loop(&mut terminal)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.screen.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && let Some(effect) = self.screen.handle_key(key)
            {
                self.dispatcher.dispatch(effect);
            }

            while let Ok(outcome) = self.outcomes.try_recv() {
                debug!(mutation = outcome.is_mutation(), "outcome received");
                self.screen.apply(outcome);
            }

            if self.screen.should_quit() {
                break;
            }
        }

        Ok(())
    }
}
