use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(err) =
            target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to add {} listener: {:?}", event_type, err);
        }

        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_listener_removed_on_drop() {
        let document = web_sys::window().unwrap().document().unwrap();
        let button: web_sys::HtmlElement =
            document.create_element("button").unwrap().unchecked_into();

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let listener = EventListener::new(&button, "click", move |_| {
            counter.set(counter.get() + 1);
        });

        button.click();
        assert_eq!(clicks.get(), 1);

        drop(listener);
        button.click();
        assert_eq!(clicks.get(), 1);
    }
}
