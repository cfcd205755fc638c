//! Pure page state and decision logic for the message-board web shell.
//!
//! Everything that can be decided without touching the DOM lives here:
//! dialog state transitions, search-query parsing and navigation URL
//! building, the emoji catalog and caret arithmetic, post ordering, and
//! post-form validation. The WASM shell in `apps/board/web-shell` owns
//! the browser boundary and calls into this crate, which keeps every
//! decision natively testable.

pub mod dialog;
pub mod emoji;
pub mod form;
pub mod posts;
pub mod search;
