use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "nav-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub panel_selector: String,
    pub link_selector: String,
    pub active_class: String,
    pub loading_class: String,
    /// Viewport width above which an open menu closes itself.
    pub desktop_breakpoint: f64,
    /// Delay before an in-page scroll, so the close animation can finish.
    pub scroll_delay_ms: u32,
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".hamburger".to_string(),
            panel_selector: ".nav-menu".to_string(),
            link_selector: ".nav-link".to_string(),
            active_class: "active".to_string(),
            loading_class: "loading".to_string(),
            desktop_breakpoint: 480.0,
            scroll_delay_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl MenuConfig {
    /// Parses a JSON override block. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, selector) in [
            ("toggle_selector", &self.toggle_selector),
            ("panel_selector", &self.panel_selector),
            ("link_selector", &self.link_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(invalid(field, "selector must not be empty"));
            }
        }

        for (field, class) in [
            ("active_class", &self.active_class),
            ("loading_class", &self.loading_class),
        ] {
            if class.is_empty() {
                return Err(invalid(field, "class name must not be empty"));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(invalid(field, "class name must not contain whitespace"));
            }
        }

        if !self.desktop_breakpoint.is_finite() || self.desktop_breakpoint < 0.0 {
            return Err(invalid(
                "desktop_breakpoint",
                "must be a finite, non-negative width",
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(invalid(
                "log_level",
                &format!("unknown level '{}'", self.log_level),
            ));
        }

        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
