//! Terminal presentation configuration.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Show the ASCII banner at startup.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Clear the terminal before the banner is shown.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner: true,
            clear_screen: true,
        }
    }
}
