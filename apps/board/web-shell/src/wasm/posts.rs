use super::*;

use board_page_state::posts::{SortDirection, ordered_indices, parse_post_timestamp};

pub(super) fn bind_post_actions() {
    bind_reaction_buttons(LIKE_BUTTON_SELECTOR, LIKE_PRESSED_LOG, &LIKE_CLICK_HANDLERS);
    bind_reaction_buttons(
        DISLIKE_BUTTON_SELECTOR,
        DISLIKE_PRESSED_LOG,
        &DISLIKE_CLICK_HANDLERS,
    );
    bind_sort_options();
}

/// Reaction presses are logged and otherwise left alone: the enclosing
/// form submission carries them to the server.
fn bind_reaction_buttons(
    selector: &str,
    log_message: &'static str,
    slot: &'static LocalKey<EventHandlerListSlot>,
) {
    let Some(document) = document() else {
        return;
    };
    let Ok(buttons) = document.query_selector_all(selector) else {
        return;
    };
    slot.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for index in 0..buttons.length() {
            let Some(node) = buttons.item(index) else {
                continue;
            };
            let Ok(button) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                console_log(log_message);
            }));
            let _ =
                button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });
}

fn bind_sort_options() {
    let Some(document) = document() else {
        return;
    };
    let Ok(options) = document.query_selector_all(SORT_OPTION_SELECTOR) else {
        return;
    };
    SORT_CHANGE_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for index in 0..options.length() {
            let Some(node) = options.item(index) else {
                continue;
            };
            let Ok(option) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |event: web_sys::Event| {
                    handle_sort_change(&event);
                },
            ));
            let _ = option
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });
}

fn handle_sort_change(event: &web_sys::Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Ok(option) = target.dyn_into::<HtmlInputElement>() else {
        return;
    };
    let Some(direction) = SortDirection::from_value(&option.value()) else {
        return;
    };
    sort_post_list(direction);
}

/// Re-append every rendered post in the computed order. Appending a
/// node that is already a child moves it to the end, so the full
/// sequence rebuilds the list in place without touching post content.
pub(super) fn sort_post_list(direction: SortDirection) {
    let Some(document) = document() else {
        return;
    };
    let Some(list) = document.query_selector(POST_LIST_SELECTOR).ok().flatten() else {
        return;
    };
    let Ok(items) = list.query_selector_all(POST_ITEM_SELECTOR) else {
        return;
    };

    let mut nodes = Vec::with_capacity(items.length() as usize);
    let mut stamps = Vec::with_capacity(items.length() as usize);
    for index in 0..items.length() {
        let Some(node) = items.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let stamp = item
            .query_selector(POST_DATE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|date| date.text_content())
            .and_then(|text| parse_post_timestamp(&text));
        stamps.push(stamp);
        nodes.push(item);
    }

    for index in ordered_indices(&stamps, direction) {
        let _ = list.append_child(&nodes[index]);
    }
}
