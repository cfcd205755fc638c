//! Dialog lifecycle state.
//!
//! The page has two modal overlays; each one mirrors its state into the
//! DOM as presence of the `active` CSS class. The shell keeps one
//! [`PageDialogs`] registry for the page lifetime and syncs the class
//! after every transition.

/// Modal overlays on the board page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogId {
    Search,
    Emoji,
}

/// Lifecycle of a single dialog. There are no other states: a dialog is
/// created inactive on page load and toggles until page unload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Inactive,
    Active,
}

impl DialogState {
    pub fn is_active(self) -> bool {
        matches!(self, DialogState::Active)
    }
}

/// Page-level registry of dialog states.
///
/// The two dialogs are independent on purpose: opening one does not
/// close the other, so both may be active at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageDialogs {
    search: DialogState,
    emoji: DialogState,
}

impl PageDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: DialogId) -> DialogState {
        match id {
            DialogId::Search => self.search,
            DialogId::Emoji => self.emoji,
        }
    }

    /// Transition to [`DialogState::Active`]. Returns whether the state
    /// actually changed.
    pub fn open(&mut self, id: DialogId) -> bool {
        let slot = self.slot_mut(id);
        let changed = !slot.is_active();
        *slot = DialogState::Active;
        changed
    }

    /// Transition to [`DialogState::Inactive`]. Idempotent; returns
    /// whether the state actually changed.
    pub fn close(&mut self, id: DialogId) -> bool {
        let slot = self.slot_mut(id);
        let changed = slot.is_active();
        *slot = DialogState::Inactive;
        changed
    }

    fn slot_mut(&mut self, id: DialogId) -> &mut DialogState {
        match id {
            DialogId::Search => &mut self.search,
            DialogId::Emoji => &mut self.emoji,
        }
    }
}
