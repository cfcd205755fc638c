use super::*;

use board_page_state::form::{notice_text, validate_post_form};

pub(super) fn bind_form_validation() {
    let Some(form) = element_by_id(POST_FORM_ID) else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
        move |event: web_sys::Event| {
            handle_post_submit(&event);
        },
    ));
    park_handler(&POST_FORM_SUBMIT_HANDLER, &form, "submit", callback);
}

/// Pre-submission checks. The server re-validates everything; this only
/// saves the user a round trip and keeps their input intact.
fn handle_post_submit(event: &web_sys::Event) {
    let name = input_by_id(NAME_INPUT_ID)
        .map(|input| input.value())
        .unwrap_or_default();
    let message = textarea_by_id(MESSAGE_INPUT_ID)
        .map(|field| field.value())
        .unwrap_or_default();

    let errors = validate_post_form(&name, &message);
    if errors.is_empty() {
        return;
    }
    event.prevent_default();
    alert(&notice_text(&errors));
}
