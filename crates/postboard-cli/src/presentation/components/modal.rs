//! Key handling for the create/update form.
//!
//! Edits go straight into the board's `Modal`; only submit and cancel need
//! the board's attention.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postboard_runtime::{Modal, ModalField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Submit,
    Cancel,
}

pub struct ModalComponent;

impl ModalComponent {
    pub fn handle_input(key: KeyEvent, modal: &mut Modal) -> Option<ModalAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Some(ModalAction::Submit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(ModalAction::Cancel),
            KeyCode::Tab => {
                modal.focus_next();
                None
            }
            KeyCode::BackTab => {
                modal.focus_previous();
                None
            }
            KeyCode::Enter => match modal.focus() {
                ModalField::Title => {
                    modal.set_focus(ModalField::Body);
                    None
                }
                ModalField::Body => {
                    modal.insert_char('\n');
                    None
                }
                ModalField::Cancel => Some(ModalAction::Cancel),
                ModalField::Send => Some(ModalAction::Submit),
            },
            KeyCode::Backspace => {
                modal.backspace();
                None
            }
            KeyCode::Char(c) => {
                modal.insert_char(c);
                None
            }
            _ => None,
        }
    }
}
