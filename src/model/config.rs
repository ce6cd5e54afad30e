use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::id::IdScheme;

/// Configuration from sprig.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// What happens to the todos of a deleted category
    #[serde(default)]
    pub on_category_delete: DeletePolicy,
    #[serde(default)]
    pub ids: IdScheme,
}

/// Fate of the todos filed under a deleted category subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletePolicy {
    /// Remove only the deleted category's own entry; descendants' entries
    /// stay in the mapping, unreachable.
    #[default]
    DropEntry,
    /// Remove the entries of the deleted category and all its descendants.
    Cascade,
    /// Move the subtree's todos to the deleted category's parent.
    /// Deleting a root drops them like `Cascade`.
    Reparent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides by theme slot name (e.g. `background = "#0C001B"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset (e.g. "debug", "sprig=trace")
    #[serde(default)]
    pub level: Option<String>,
    /// Log file. The TUI only logs when one is set.
    #[serde(default)]
    pub file: Option<String>,
}
