use super::*;

fn dialog_dom_id(id: DialogId) -> &'static str {
    match id {
        DialogId::Search => SEARCH_DIALOG_ID,
        DialogId::Emoji => EMOJI_DIALOG_ID,
    }
}

fn dialog_element(id: DialogId) -> Option<HtmlElement> {
    html_element_by_id(dialog_dom_id(id))
}

pub(super) fn open_dialog(id: DialogId) {
    let Some(dialog) = dialog_element(id) else {
        return;
    };
    DIALOGS.with(|dialogs| dialogs.borrow_mut().open(id));
    let _ = dialog.class_list().add_1(DIALOG_ACTIVE_CLASS);
}

pub(super) fn close_dialog(id: DialogId) {
    let Some(dialog) = dialog_element(id) else {
        return;
    };
    let changed = DIALOGS.with(|dialogs| dialogs.borrow_mut().close(id));
    let _ = dialog.class_list().remove_1(DIALOG_ACTIVE_CLASS);
    if changed && id == DialogId::Search {
        // A deferred focus pending from open must not fire into a
        // closed dialog.
        FOCUS_TIMEOUT.with(|slot| drop(slot.borrow_mut().take()));
    }
}

/// Opening the search dialog pre-fills the keyword input from the URL
/// and focuses it once the open transition has had a frame to render.
/// The pending focus is held as a cancellable handle; replacing the
/// slot drops, and thereby cancels, any earlier one.
pub(super) fn open_search_dialog() {
    open_dialog(DialogId::Search);
    let Some(input) = input_by_id(SEARCH_KEYWORD_INPUT_ID) else {
        return;
    };
    input.set_value(&current_keyword().unwrap_or_default());
    let timeout = Timeout::new(KEYWORD_FOCUS_DELAY_MS, move || {
        let _ = input.focus();
    });
    FOCUS_TIMEOUT.with(|slot| *slot.borrow_mut() = Some(timeout));
}

pub(super) fn bind_dialog_controls() {
    bind_dialog(
        DialogId::Search,
        SEARCH_BUTTON_ID,
        CLOSE_SEARCH_DIALOG_ID,
        &SEARCH_OPEN_CLICK_HANDLER,
        &SEARCH_CLOSE_CLICK_HANDLER,
        &SEARCH_OVERLAY_CLICK_HANDLER,
    );
    bind_dialog(
        DialogId::Emoji,
        EMOJI_BUTTON_ID,
        CLOSE_EMOJI_DIALOG_ID,
        &EMOJI_OPEN_CLICK_HANDLER,
        &EMOJI_CLOSE_CLICK_HANDLER,
        &EMOJI_OVERLAY_CLICK_HANDLER,
    );
}

fn bind_dialog(
    id: DialogId,
    open_button_id: &str,
    close_button_id: &str,
    open_slot: &'static LocalKey<EventHandlerSlot>,
    close_slot: &'static LocalKey<EventHandlerSlot>,
    overlay_slot: &'static LocalKey<EventHandlerSlot>,
) {
    if let Some(button) = element_by_id(open_button_id) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            match id {
                DialogId::Search => open_search_dialog(),
                DialogId::Emoji => open_dialog(DialogId::Emoji),
            }
        }));
        park_handler(open_slot, &button, "click", callback);
    }

    if let Some(button) = element_by_id(close_button_id) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            close_dialog(id);
        }));
        park_handler(close_slot, &button, "click", callback);
    }

    if let Some(dialog) = dialog_element(id) {
        let overlay = dialog.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
            move |event: web_sys::Event| {
                // Only clicks on the backdrop itself close the dialog,
                // not clicks inside its content.
                let Some(target) = event.target() else {
                    return;
                };
                let Ok(element) = target.dyn_into::<HtmlElement>() else {
                    return;
                };
                if element == overlay {
                    close_dialog(id);
                }
            },
        ));
        park_handler(overlay_slot, &dialog, "click", callback);
    }
}
