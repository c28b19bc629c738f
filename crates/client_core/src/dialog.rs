//! Which modal a screen currently shows.
//!
//! A screen holds one [`Dialogs`] value instead of a flag per dialog, so at
//! most one of its dialogs is open at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialogs<D> {
    active: Option<D>,
}

impl<D: Copy + Eq> Dialogs<D> {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<D> {
        self.active
    }

    pub fn state(&self, dialog: D) -> DialogState {
        if self.active == Some(dialog) {
            DialogState::Open
        } else {
            DialogState::Closed
        }
    }

    pub fn is_open(&self, dialog: D) -> bool {
        self.state(dialog) == DialogState::Open
    }

    /// Open `dialog`, replacing any other open one. Returns whether the
    /// state changed.
    pub fn open(&mut self, dialog: D) -> bool {
        if self.active == Some(dialog) {
            return false;
        }
        self.active = Some(dialog);
        true
    }

    /// Close `dialog` if it is the open one. Returns whether the state
    /// changed.
    pub fn close(&mut self, dialog: D) -> bool {
        if self.active != Some(dialog) {
            return false;
        }
        self.active = None;
        true
    }
}

impl<D: Copy + Eq> Default for Dialogs<D> {
    fn default() -> Self {
        Self::new()
    }
}
