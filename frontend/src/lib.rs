pub mod controller;
pub mod listener;
pub mod page;
pub mod surfaces;

use std::cell::RefCell;

use headphones_shared::{MenuConfig, MenuError};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use controller::MenuController;
use surfaces::MenuSurfaces;

thread_local! {
    // The page-wide controller, alive for the lifetime of the page.
    static CONTROLLER: RefCell<Option<MenuController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    let config = page::read_config(&document);
    log::set_max_level(config.level_filter());
    page::mark_loading(&document, &config);

    let ready_document = document.clone();
    page::when_ready(&document, move || {
        if let Err(err) = install(&ready_document, config) {
            log::error!("{}", err);
        }
    });
}

/// Builds the page's menu controller.
///
/// Returns `Ok(false)` when a controller is already installed. On
/// `MissingSurface` no listeners are attached.
pub fn install(document: &Document, config: MenuConfig) -> Result<bool, MenuError> {
    let surfaces = MenuSurfaces::query(document, &config)?;

    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::debug!("navigation menu already installed");
            return Ok(false);
        }

        let controller = MenuController::attach(surfaces, config);
        log::info!("navigation menu ready ({} links)", controller.link_count());
        *slot = Some(controller);
        Ok(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use headphones_shared::Surface;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn config(prefix: &str) -> MenuConfig {
        MenuConfig {
            toggle_selector: format!("#{}-toggle", prefix),
            panel_selector: format!("#{}-panel", prefix),
            link_selector: format!(".{}-link", prefix),
            ..MenuConfig::default()
        }
    }

    #[wasm_bindgen_test]
    fn test_install_without_toggle_reports_missing_surface() {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<ul id="inst-missing-panel"></ul>"#);
        document.body().unwrap().append_child(&root).unwrap();

        let result = install(&document, config("inst-missing"));
        assert!(matches!(
            result,
            Err(MenuError::MissingSurface {
                surface: Surface::Toggle,
                ..
            })
        ));

        root.remove();
    }

    #[wasm_bindgen_test]
    fn test_install_is_once_per_page() {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<button id="inst-once-toggle"></button><ul id="inst-once-panel"></ul>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();

        assert!(install(&document, config("inst-once")).unwrap());
        assert!(!install(&document, config("inst-once")).unwrap());

        let toggle: web_sys::HtmlElement = document
            .get_element_by_id("inst-once-toggle")
            .unwrap()
            .dyn_into()
            .unwrap();
        toggle.click();
        assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));

        // Release the body scroll lock taken by the installed controller.
        toggle.click();
    }
}
