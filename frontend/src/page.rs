//! Page lifecycle helpers: configuration block, loading marker, DOM ready.

use headphones_shared::config::CONFIG_ELEMENT_ID;
use headphones_shared::MenuConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, Window};

/// Reads overrides from `<script type="application/json" id="nav-config">`.
///
/// A missing block yields the defaults. An invalid one is logged and ignored.
pub fn read_config(document: &Document) -> MenuConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return MenuConfig::default();
    };

    let json = element.text_content().unwrap_or_default();
    match MenuConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}; using default menu configuration", err);
            MenuConfig::default()
        }
    }
}

/// Marks `<body>` with the loading class until the window `load` event.
pub fn mark_loading(document: &Document, config: &MenuConfig) {
    let Some(body) = document.body() else {
        return;
    };
    if document.ready_state() == "complete" {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    add_loading_marker(body, &window, config.loading_class.clone());
}

fn add_loading_marker(body: HtmlElement, window: &Window, class: String) {
    if let Err(err) = body.class_list().add_1(&class) {
        log::warn!("failed to add {} class: {:?}", class, err);
        return;
    }

    let on_load = Closure::wrap(Box::new(move |_: Event| {
        let _ = body.class_list().remove_1(&class);
    }) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
    {
        log::warn!("failed to add load listener: {:?}", err);
    }
    on_load.forget();
}

/// Runs `f` once the document has been parsed.
pub fn when_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let mut f = Some(f);
    let on_ready = Closure::wrap(Box::new(move |_: Event| {
        if let Some(f) = f.take() {
            f();
        }
    }) as Box<dyn FnMut(Event)>);
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::warn!("failed to add DOMContentLoaded listener: {:?}", err);
    }
    on_ready.forget();
}
