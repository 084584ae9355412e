//! Binds the menu state machine to the page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use headphones_shared::{Effect, MenuConfig, MenuEvent, MenuState, Presentation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, KeyboardEvent, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::listener::EventListener;
use crate::surfaces::MenuSurfaces;

/// Controller for one navigation menu.
///
/// Listeners hold only a weak reference to the controller state and are
/// removed when the controller is dropped.
pub struct MenuController {
    inner: Rc<Inner>,
    _listeners: Vec<EventListener>,
}

struct Inner {
    surfaces: MenuSurfaces,
    config: MenuConfig,
    state: RefCell<MenuState>,
    pending_scroll: RefCell<Option<PendingScroll>>,
}

struct PendingScroll {
    armed: Rc<Cell<bool>>,
    // Dropping the timeout clears it.
    _timeout: Timeout,
}

impl MenuController {
    pub fn attach(surfaces: MenuSurfaces, config: MenuConfig) -> Self {
        let inner = Rc::new(Inner {
            state: RefCell::new(MenuState::new(&config)),
            surfaces,
            config,
            pending_scroll: RefCell::new(None),
        });
        inner.render(inner.state.borrow().presentation());

        let mut listeners = Vec::new();

        listeners.push(bind(&inner, &inner.surfaces.toggle, "click", |inner, event| {
            inner.dispatch(MenuEvent::ToggleClicked, Some(event));
        }));

        for link in &inner.surfaces.links {
            let anchor = link.clone();
            listeners.push(bind(&inner, link, "click", move |inner, event| {
                let href = anchor.get_attribute("href");
                inner.dispatch(
                    MenuEvent::LinkClicked {
                        href: href.as_deref(),
                    },
                    Some(event),
                );
            }));
        }

        if let Some(document) = inner.document() {
            listeners.push(bind(&inner, &document, "click", |inner, event| {
                let outside = !inner.contains(event.target());
                inner.dispatch(MenuEvent::DocumentClicked { outside }, Some(event));
            }));

            listeners.push(bind(&inner, &document, "keydown", |inner, event| {
                if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
                    let key = keyboard.key();
                    inner.dispatch(MenuEvent::KeyDown { key: &key }, Some(event));
                }
            }));
        }

        if let Some(window) = web_sys::window() {
            let resize_window = window.clone();
            listeners.push(bind(&inner, &window, "resize", move |inner, event| {
                if let Some(width) = resize_window.inner_width().ok().and_then(|w| w.as_f64()) {
                    inner.dispatch(MenuEvent::Resized { width }, Some(event));
                }
            }));
        }

        Self {
            inner,
            _listeners: listeners,
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().is_open()
    }

    pub fn toggle(&self) {
        self.inner.dispatch(MenuEvent::ToggleClicked, None);
    }

    /// Closes the menu and reasserts the closed presentation.
    pub fn close(&self) {
        let presentation = self.inner.state.borrow_mut().close();
        self.inner.render(presentation);
    }

    /// True while a delayed in-page scroll has been scheduled but not run.
    pub fn has_pending_scroll(&self) -> bool {
        self.inner
            .pending_scroll
            .borrow()
            .as_ref()
            .is_some_and(|pending| pending.armed.get())
    }

    pub fn link_count(&self) -> usize {
        self.inner.surfaces.links.len()
    }

    #[cfg(test)]
    pub(crate) fn dispatch(&self, event: MenuEvent<'_>) {
        self.inner.dispatch(event, None);
    }
}

fn bind<F>(inner: &Rc<Inner>, target: &EventTarget, event_type: &'static str, handler: F) -> EventListener
where
    F: Fn(&Inner, &Event) + 'static,
{
    let weak: Weak<Inner> = Rc::downgrade(inner);
    EventListener::new(target, event_type, move |event| {
        if let Some(inner) = weak.upgrade() {
            handler(&inner, &event);
        }
    })
}

impl Inner {
    fn document(&self) -> Option<Document> {
        self.surfaces.body.owner_document()
    }

    /// Whether the event target lies within the menu panel or the toggle.
    fn contains(&self, target: Option<EventTarget>) -> bool {
        let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
            return false;
        };
        self.surfaces.panel.contains(Some(&node)) || self.surfaces.toggle.contains(Some(&node))
    }

    fn dispatch(&self, event: MenuEvent<'_>, dom_event: Option<&Event>) {
        let effects = self.state.borrow_mut().handle(event);
        for effect in effects {
            match effect {
                Effect::Render(presentation) => self.render(presentation),
                Effect::PreventDefault => {
                    if let Some(event) = dom_event {
                        event.prevent_default();
                    }
                }
                Effect::ScrollTo {
                    target_id,
                    delay_ms,
                } => self.schedule_scroll(&target_id, delay_ms),
                Effect::CancelScroll => {
                    if let Some(pending) = self.pending_scroll.borrow_mut().take() {
                        if pending.armed.get() {
                            log::debug!("cancelled pending scroll");
                        }
                    }
                }
            }
        }
    }

    fn render(&self, presentation: Presentation) {
        let class = &self.config.active_class;
        for element in [&self.surfaces.toggle, &self.surfaces.panel] {
            report(
                element
                    .class_list()
                    .toggle_with_force(class, presentation.active)
                    .map(drop),
                "active marker",
            );
        }
        report(
            self.surfaces
                .toggle
                .set_attribute("aria-expanded", presentation.aria_expanded()),
            "aria-expanded",
        );
        report(
            self.surfaces
                .body
                .style()
                .set_property("overflow", presentation.body_overflow()),
            "scroll lock",
        );
    }

    fn schedule_scroll(&self, target_id: &str, delay_ms: u32) {
        let Some(target) = self
            .document()
            .and_then(|document| document.get_element_by_id(target_id))
        else {
            log::debug!("no element with id '{}', skipping scroll", target_id);
            return;
        };

        let armed = Rc::new(Cell::new(true));
        let fired = armed.clone();
        let timeout = Timeout::new(delay_ms, move || {
            fired.set(false);
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });

        // Replacing an earlier pending scroll cancels it.
        *self.pending_scroll.borrow_mut() = Some(PendingScroll {
            armed,
            _timeout: timeout,
        });
    }
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("failed to update {}: {:?}", what, err);
    }
}
