//! Rust/WASM entrypoint for the board page behavior layer.
//!
//! The server renders the message-board page; this crate attaches
//! behavior to it: dialog toggling, search navigation via the query
//! string, the emoji palette, client-side post sorting, and
//! pre-submission form checks. Decision logic lives in
//! `board-page-state`; this crate owns the browser boundary only, and
//! every missing page element degrades to a silent no-op.

#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::thread::LocalKey;

    use board_page_state::dialog::{DialogId, PageDialogs};
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

    use crate::wasm_constants::*;

    mod dialogs;
    mod dom;
    mod emoji;
    mod forms;
    mod navigation;
    mod posts;

    use dialogs::*;
    use dom::*;
    use emoji::*;
    use forms::*;
    use navigation::*;
    use posts::*;

    type EventHandlerSlot = RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>;
    type KeyboardHandlerSlot = RefCell<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>>;
    type EventHandlerListSlot = RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>>;

    thread_local! {
        static DIALOGS: RefCell<PageDialogs> = RefCell::new(PageDialogs::new());
        static FOCUS_TIMEOUT: RefCell<Option<Timeout>> = const { RefCell::new(None) };
        static SEARCH_OPEN_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static SEARCH_CLOSE_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static SEARCH_OVERLAY_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static EMOJI_OPEN_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static EMOJI_CLOSE_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static EMOJI_OVERLAY_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static EXECUTE_SEARCH_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static SEARCH_KEYWORD_KEYDOWN_HANDLER: KeyboardHandlerSlot = const { RefCell::new(None) };
        static CLEAR_SEARCH_CLICK_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static POST_FORM_SUBMIT_HANDLER: EventHandlerSlot = const { RefCell::new(None) };
        static EMOJI_BUTTON_CLICK_HANDLERS: EventHandlerListSlot = RefCell::new(Vec::new());
        static LIKE_CLICK_HANDLERS: EventHandlerListSlot = RefCell::new(Vec::new());
        static DISLIKE_CLICK_HANDLERS: EventHandlerListSlot = RefCell::new(Vec::new());
        static SORT_CHANGE_HANDLERS: EventHandlerListSlot = RefCell::new(Vec::new());
    }

    /// Entry point, run when the module is instantiated (the page loads
    /// it as a deferred module, so the document is already parsed).
    /// Binding twice is safe: every listener closure parks in a
    /// once-filled slot.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        bind_dialog_controls();
        bind_search_actions();
        bind_emoji_grid();
        bind_post_actions();
        bind_form_validation();
        reflect_search_keyword();
    }
}
