use std::fmt;

use thiserror::Error;

/// The page elements a menu controller binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Toggle,
    Panel,
    Body,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Toggle => write!(f, "toggle control"),
            Surface::Panel => write!(f, "menu panel"),
            Surface::Body => write!(f, "page body"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Hamburger menu elements not found: missing {surface} ({selector})")]
    MissingSurface { surface: Surface, selector: String },
    #[error("Invalid menu configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse menu configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
