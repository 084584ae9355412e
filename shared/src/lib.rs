pub mod config;
pub mod error;
pub mod menu;

pub use config::MenuConfig;
pub use error::{ConfigError, MenuError, Surface};
pub use menu::{anchor_target, Effect, MenuEvent, MenuState, Presentation};
