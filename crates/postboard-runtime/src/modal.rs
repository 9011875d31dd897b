//! Create/Update form state.
//!
//! The modal owns a draft and a focus cursor. It never validates: whatever
//! is in the draft when the user submits is sent as-is.

use postboard_types::{Draft, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalMode {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalField {
    Title,
    Body,
    Cancel,
    Send,
}

impl ModalField {
    const ORDER: [ModalField; 4] = [
        ModalField::Title,
        ModalField::Body,
        ModalField::Cancel,
        ModalField::Send,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    mode: ModalMode,
    draft: Draft,
    focus: ModalField,
}

impl Modal {
    /// Open the form. The draft is seeded from `post` only when updating.
    pub fn open(post: Option<&Post>, is_updating: bool) -> Self {
        let (mode, draft) = match (post, is_updating) {
            (Some(post), true) => (ModalMode::Update, Draft::from(post)),
            (None, true) => (ModalMode::Update, Draft::default()),
            (_, false) => (ModalMode::Create, Draft::default()),
        };

        Self {
            mode,
            draft,
            focus: ModalField::Title,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Create Post",
            ModalMode::Update => "Update Post",
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn focus(&self) -> ModalField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ModalField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Replace a text field's value, like an `onChange` from an input.
    pub fn set_field(&mut self, field: ModalField, value: impl Into<String>) {
        match field {
            ModalField::Title => self.draft.title = value.into(),
            ModalField::Body => self.draft.body = value.into(),
            ModalField::Cancel | ModalField::Send => {}
        }
    }

    /// Type into the focused field. No-op when a button has focus.
    /// Newlines are dropped from the single-line title.
    pub fn insert_char(&mut self, c: char) {
        match self.focus {
            ModalField::Title if c != '\n' => self.draft.title.push(c),
            ModalField::Body => self.draft.body.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            ModalField::Title => {
                self.draft.title.pop();
            }
            ModalField::Body => {
                self.draft.body.pop();
            }
            ModalField::Cancel | ModalField::Send => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_types::PostId;

    fn post() -> Post {
        Post {
            id: PostId::from(1),
            title: "existing".to_string(),
            body: "text".to_string(),
            user: None,
        }
    }

    #[test]
    fn test_update_mode_seeds_draft() {
        let modal = Modal::open(Some(&post()), true);
        assert_eq!(modal.heading(), "Update Post");
        assert_eq!(modal.draft(), &Draft::new("existing", "text"));
    }

    #[test]
    fn test_create_mode_ignores_post() {
        let modal = Modal::open(Some(&post()), false);
        assert_eq!(modal.heading(), "Create Post");
        assert_eq!(modal.draft(), &Draft::default());
    }

    #[test]
    fn test_typing_follows_focus() {
        let mut modal = Modal::open(None, false);
        modal.insert_char('T');
        modal.insert_char('\n');
        modal.focus_next();
        modal.insert_char('B');
        modal.insert_char('\n');
        modal.insert_char('b');
        modal.backspace();
        modal.focus_next();
        modal.insert_char('x');

        assert_eq!(modal.draft(), &Draft::new("T", "B\n"));
        assert_eq!(modal.focus(), ModalField::Cancel);
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        assert_eq!(ModalField::Send.next(), ModalField::Title);
        assert_eq!(ModalField::Title.previous(), ModalField::Send);
    }
}
