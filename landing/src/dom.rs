//! Thin browser bindings used by the sections.

use leptos::prelude::*;
use stormsense_core::gesture::{GestureCallback, GestureKind, GestureTarget};
use stormsense_core::Layout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => tracing::debug!(url, "opened external link"),
        Ok(None) => tracing::warn!(url, "popup blocked"),
        Err(err) => tracing::warn!(url, "window.open failed: {}", describe_js_error(&err)),
    }
}

pub fn set_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    check("window.alert", window.alert_with_message(message));
}

/// Logs a failed browser call. Returns whether it succeeded.
fn check(call: &str, result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(call, "browser call failed: {}", describe_js_error(&err));
            false
        }
    }
}

/// Best-effort readable text for a thrown JS value (DOMException name,
/// Error message, or the value itself).
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(exception) = err.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Current showcase layout, tracked across window resizes until the calling
/// owner is disposed.
pub fn use_layout(breakpoint: f64) -> ReadSignal<Layout> {
    let current = move || {
        viewport_width()
            .map(|width| Layout::for_width(width, breakpoint))
            .unwrap_or_default()
    };
    let (layout, set_layout) = signal(current());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        let next = current();
        if layout.get_untracked() != next {
            tracing::debug!(?next, "showcase layout changed");
            set_layout.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    layout
}

/// `document`-level gesture listeners for the hero video retry.
#[derive(Clone)]
pub struct DocumentGestureTarget {
    document: Option<web_sys::Document>,
}

/// A registered listener; keeps the JS closure alive until removed.
pub struct DocumentListener {
    kind: GestureKind,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentGestureTarget {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        if document.is_none() {
            tracing::warn!("no document, gesture retry disabled");
        }
        Self { document }
    }
}

impl Default for DocumentGestureTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTarget for DocumentGestureTarget {
    type Handle = DocumentListener;

    fn listen(&self, kind: GestureKind, callback: GestureCallback) -> Option<DocumentListener> {
        let document = self.document.as_ref()?;

        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            callback(kind);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_once(true);
        options.set_passive(true);

        if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
            kind.event_name(),
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!(%kind, "addEventListener failed: {}", describe_js_error(&err));
            return None;
        }
        Some(DocumentListener { kind, closure })
    }

    fn unlisten(&self, listener: DocumentListener) {
        let Some(document) = self.document.as_ref() else {
            return;
        };
        // Removing an already-fired `once` listener is a no-op for the DOM.
        let _ = document.remove_event_listener_with_callback(
            listener.kind.event_name(),
            listener.closure.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use stormsense_core::{MediaFallbackController, PlayAttempt};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    pub(crate) fn click() {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let event = web_sys::Event::new("click").unwrap();
        document.dispatch_event(&event).unwrap();
    }

    fn counter() -> (Rc<Cell<u32>>, GestureCallback) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        (hits, Rc::new(move |_| sink.set(sink.get() + 1)))
    }

    #[wasm_bindgen_test]
    fn failed_browser_calls_are_reported() {
        assert!(check("window.alert", Ok(())));
        let thrown = js_sys::Error::new("blocked by sandbox");
        assert!(!check("window.alert", Err(thrown.into())));
    }

    #[wasm_bindgen_test]
    fn document_listener_fires_once() {
        let target = DocumentGestureTarget::new();
        let (hits, callback) = counter();
        let handle = target.listen(GestureKind::Click, callback).unwrap();

        click();
        click();
        assert_eq!(hits.get(), 1);
        target.unlisten(handle);
    }

    #[wasm_bindgen_test]
    fn unlisten_before_gesture_detaches() {
        let target = DocumentGestureTarget::new();
        let (hits, callback) = counter();
        let handle = target.listen(GestureKind::Click, callback).unwrap();
        target.unlisten(handle);

        click();
        assert_eq!(hits.get(), 0);
    }

    #[wasm_bindgen_test]
    fn unmounted_controller_ignores_later_clicks() {
        let (hits, callback) = counter();
        let mut controller = MediaFallbackController::new(DocumentGestureTarget::new());
        controller.mount();
        controller.on_play_rejected(PlayAttempt::Initial, "NotAllowedError", callback);
        assert_eq!(controller.pending_listeners(), 2);

        controller.unmount();
        click();
        assert_eq!(hits.get(), 0);
    }
}
