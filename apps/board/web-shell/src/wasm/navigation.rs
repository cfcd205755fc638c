use super::*;

use board_page_state::search::{self, ListingView};

fn location() -> Option<web_sys::Location> {
    web_sys::window().map(|window| window.location())
}

fn current_query() -> String {
    location()
        .and_then(|location| location.search().ok())
        .unwrap_or_default()
}

fn current_view() -> ListingView {
    let pathname = location()
        .and_then(|location| location.pathname().ok())
        .unwrap_or_default();
    ListingView::from_pathname(&pathname)
}

pub(super) fn current_keyword() -> Option<String> {
    search::query_param(&current_query(), search::KEYWORD_PARAM)
}

fn resolved_bbs_id() -> String {
    let hidden = input_by_id(BBS_ID_HIDDEN_ID).map(|input| input.value());
    search::resolve_bbs_id(&current_query(), hidden.as_deref())
}

/// Apply the keyword field as a new filter: full-page navigation with
/// the page index reset to 0. An empty keyword aborts with a blocking
/// notice instead of navigating.
pub(super) fn execute_search() {
    let Some(input) = input_by_id(SEARCH_KEYWORD_INPUT_ID) else {
        return;
    };
    let value = input.value();
    let keyword = value.trim();
    if keyword.is_empty() {
        alert(EMPTY_KEYWORD_NOTICE);
        return;
    }
    navigate_to(&search::listing_url(
        current_view(),
        &resolved_bbs_id(),
        Some(keyword),
    ));
}

/// Drop the keyword, keep the board, reset the page index.
pub(super) fn clear_search() {
    navigate_to(&search::listing_url(current_view(), &resolved_bbs_id(), None));
}

fn navigate_to(url: &str) {
    if let Some(location) = location() {
        let _ = location.set_href(url);
    }
}

/// Read-only reflection of a keyword already encoded in the URL: show
/// the info banner and print the keyword into it.
pub(super) fn reflect_search_keyword() {
    let Some(keyword) = current_keyword().filter(|keyword| !keyword.is_empty()) else {
        return;
    };
    let Some(banner) = html_element_by_id(SEARCH_INFO_ID) else {
        return;
    };
    let Some(display) = html_element_by_id(SEARCH_KEYWORD_DISPLAY_ID) else {
        return;
    };
    let _ = banner.style().set_property("display", "block");
    display.set_text_content(Some(&keyword));
}

pub(super) fn bind_search_actions() {
    if let Some(button) = element_by_id(EXECUTE_SEARCH_ID) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            execute_search();
        }));
        park_handler(&EXECUTE_SEARCH_CLICK_HANDLER, &button, "click", callback);
    }

    if let Some(input) = element_by_id(SEARCH_KEYWORD_INPUT_ID) {
        let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Enter" {
                    execute_search();
                }
            },
        ));
        park_handler(
            &SEARCH_KEYWORD_KEYDOWN_HANDLER,
            &input,
            "keydown",
            callback,
        );
    }

    if let Some(anchor) = element_by_id(CLEAR_SEARCH_BUTTON_ID) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                // The clear control is an anchor; its default navigation
                // is replaced with the rebuilt listing URL.
                event.prevent_default();
                clear_search();
            },
        ));
        park_handler(&CLEAR_SEARCH_CLICK_HANDLER, &anchor, "click", callback);
    }
}
