use super::*;

pub(super) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(super) fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|document| document.get_element_by_id(id))
}

pub(super) fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub(super) fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    element_by_id(id).and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

pub(super) fn textarea_by_id(id: &str) -> Option<HtmlTextAreaElement> {
    element_by_id(id).and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
}

/// Blocking modal notice.
pub(super) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub(super) fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Attach `callback` to `target` and park it in its slot for the page
/// lifetime. A slot that is already filled means the listener is bound;
/// the fresh closure is dropped unused.
pub(super) fn park_handler<T: ?Sized>(
    slot: &'static LocalKey<RefCell<Option<Closure<T>>>>,
    target: &web_sys::EventTarget,
    event_type: &str,
    callback: Closure<T>,
) {
    slot.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let _ = target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}
