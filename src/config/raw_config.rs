use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Config, GestureTuning};

/// On-disk shape of [`Config`]. Layout names are kept as strings here and
/// checked when converting into `Config`.
///
/// Plain values come before tables so the TOML writer can emit them in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawConfig {
    pub default_layout: String,
    pub respect_manual_choice: bool,
    pub cycle_order: Vec<String>,
    pub language_layouts: BTreeMap<String, String>,
    pub gesture: GestureTuning,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self::from(Config::default())
    }
}

impl From<Config> for RawConfig {
    fn from(cfg: Config) -> Self {
        Self {
            default_layout: cfg.default_layout.to_string(),
            respect_manual_choice: cfg.respect_manual_choice,
            cycle_order: cfg.cycle_order.iter().map(ToString::to_string).collect(),
            language_layouts: cfg
                .language_layouts
                .iter()
                .map(|(tag, id)| (tag.clone(), id.to_string()))
                .collect(),
            gesture: cfg.gesture,
        }
    }
}
