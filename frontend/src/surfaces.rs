use headphones_shared::{MenuConfig, MenuError, Surface};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// The page elements a menu controller reads from and writes to.
#[derive(Clone)]
pub struct MenuSurfaces {
    pub toggle: HtmlElement,
    pub panel: HtmlElement,
    pub links: Vec<HtmlElement>,
    /// Receives the scroll lock while the menu is open.
    pub body: HtmlElement,
}

impl MenuSurfaces {
    pub fn query(document: &Document, config: &MenuConfig) -> Result<Self, MenuError> {
        let toggle = query_one(document, &config.toggle_selector, Surface::Toggle)?;
        let panel = query_one(document, &config.panel_selector, Surface::Panel)?;
        let body = document.body().ok_or_else(|| MenuError::MissingSurface {
            surface: Surface::Body,
            selector: "body".to_string(),
        })?;

        let mut links = Vec::new();
        if let Ok(nodes) = document.query_selector_all(&config.link_selector) {
            for i in 0..nodes.length() {
                if let Some(link) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    links.push(link);
                }
            }
        }

        Ok(Self {
            toggle,
            panel,
            links,
            body,
        })
    }
}

fn query_one(document: &Document, selector: &str, surface: Surface) -> Result<HtmlElement, MenuError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| MenuError::MissingSurface {
            surface,
            selector: selector.to_string(),
        })
}
