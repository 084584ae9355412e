//! Open/closed state of the mobile navigation menu.
//!
//! `MenuState` knows nothing about the DOM. Each input is turned into a list
//! of [`Effect`]s that the frontend applies to the page. Every render carries
//! the complete presentation for the current state, so applying it always
//! converges the page onto `is_open`.

use crate::config::MenuConfig;

/// Visual attributes derived from the open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Active marker on both the toggle control and the menu panel.
    pub active: bool,
    pub expanded: bool,
    pub scroll_locked: bool,
}

impl Presentation {
    pub fn for_state(is_open: bool) -> Self {
        Self {
            active: is_open,
            expanded: is_open,
            scroll_locked: is_open,
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// Inline `overflow` value for the body; empty clears the property.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent<'a> {
    ToggleClicked,
    LinkClicked { href: Option<&'a str> },
    /// A click anywhere in the document. `outside` is true when the target is
    /// in neither the menu panel nor the toggle control.
    DocumentClicked { outside: bool },
    KeyDown { key: &'a str },
    Resized { width: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render(Presentation),
    PreventDefault,
    ScrollTo { target_id: String, delay_ms: u32 },
    CancelScroll,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    is_open: bool,
    desktop_breakpoint: f64,
    scroll_delay_ms: u32,
}

impl MenuState {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            is_open: false,
            desktop_breakpoint: config.desktop_breakpoint,
            scroll_delay_ms: config.scroll_delay_ms,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::for_state(self.is_open)
    }

    pub fn toggle(&mut self) -> Presentation {
        self.is_open = !self.is_open;
        self.presentation()
    }

    /// Drives the menu closed. Always returns the closed presentation, even
    /// when the menu was already closed.
    pub fn close(&mut self) -> Presentation {
        self.is_open = false;
        self.presentation()
    }

    pub fn handle(&mut self, event: MenuEvent<'_>) -> Vec<Effect> {
        let effects = match event {
            MenuEvent::ToggleClicked => {
                let presentation = self.toggle();
                if self.is_open {
                    // A scroll queued by an earlier link click must not move
                    // the page under a freshly opened menu.
                    vec![Effect::CancelScroll, Effect::Render(presentation)]
                } else {
                    vec![Effect::Render(presentation)]
                }
            }
            MenuEvent::LinkClicked { href } => {
                let mut effects = vec![Effect::Render(self.close())];
                if let Some(target_id) = href.and_then(anchor_target) {
                    effects.push(Effect::PreventDefault);
                    effects.push(Effect::ScrollTo {
                        target_id: target_id.to_string(),
                        delay_ms: self.scroll_delay_ms,
                    });
                }
                effects
            }
            MenuEvent::DocumentClicked { outside } if outside && self.is_open => {
                vec![Effect::Render(self.close())]
            }
            MenuEvent::KeyDown { key } if key == "Escape" && self.is_open => {
                vec![Effect::Render(self.close())]
            }
            MenuEvent::Resized { width } if width > self.desktop_breakpoint && self.is_open => {
                vec![Effect::Render(self.close())]
            }
            MenuEvent::DocumentClicked { .. }
            | MenuEvent::KeyDown { .. }
            | MenuEvent::Resized { .. } => Vec::new(),
        };

        if !effects.is_empty() {
            log::debug!("menu {:?} -> open={}", event, self.is_open);
        }
        effects
    }
}

/// Returns the element id referenced by an in-page anchor (`#id`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}
