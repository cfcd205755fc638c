use super::*;

use board_page_state::emoji::{EMOJI_GLYPHS, insert_glyph};

/// Render one button per palette glyph into the emoji grid. The grid is
/// populated once; a filled handler list means the buttons exist.
pub(super) fn bind_emoji_grid() {
    let Some(document) = document() else {
        return;
    };
    let Some(grid) = element_by_id(EMOJI_GRID_ID) else {
        return;
    };
    EMOJI_BUTTON_CLICK_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for glyph in EMOJI_GLYPHS {
            let Ok(element) = document.create_element("button") else {
                continue;
            };
            let Ok(button) = element.dyn_into::<web_sys::HtmlButtonElement>() else {
                continue;
            };
            button.set_type("button");
            button.set_class_name(EMOJI_BUTTON_CLASS);
            button.set_text_content(Some(glyph));
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                insert_glyph_into_message(glyph);
            }));
            let _ =
                button.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
            let _ = grid.append_child(&button);
            handlers.push(callback);
        }
    });
}

/// Splice the glyph into the message field at the caret (replacing any
/// selection), put the caret right after it, restore focus, then close
/// the emoji dialog.
pub(super) fn insert_glyph_into_message(glyph: &str) {
    if let Some(field) = textarea_by_id(MESSAGE_INPUT_ID) {
        let start = field.selection_start().ok().flatten().unwrap_or(0) as usize;
        let end = field
            .selection_end()
            .ok()
            .flatten()
            .map_or(start, |end| end as usize);
        let insertion = insert_glyph(&field.value(), start, end, glyph);
        field.set_value(&insertion.text);
        let caret = insertion.caret as u32;
        let _ = field.set_selection_range(caret, caret);
        let _ = field.focus();
        console_log(&format!("絵文字を挿入: {glyph}"));
    }
    close_dialog(DialogId::Emoji);
}
