mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{collections::BTreeMap, io, path::Path};

pub use config_validator::{find_duplicate_cycle_entries, find_invalid_gesture_tuning};
use keeplang_core::LayoutId;
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::language::normalize_tag;

/// Tuning for the drag-to-move-cursor gesture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureTuning {
    pub max_velocity: f64,
    pub velocity_epsilon: f64,
    pub pixels_per_step: f64,
    pub max_steps_per_tick: u32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            max_velocity: constants::MAX_VELOCITY,
            velocity_epsilon: constants::VELOCITY_EPSILON,
            pixels_per_step: constants::PIXELS_PER_STEP,
            max_steps_per_tick: constants::MAX_STEPS_PER_TICK,
        }
    }
}

/// Keyboard tuning shipped with the host. Read-only at runtime; the keyboard
/// never writes session state back.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(into = "RawConfig")]
pub struct Config {
    pub(crate) default_layout: LayoutId,
    pub(crate) cycle_order: Vec<LayoutId>,
    pub(crate) language_layouts: BTreeMap<String, LayoutId>,
    pub(crate) respect_manual_choice: bool,
    pub(crate) gesture: GestureTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layout: constants::DEFAULT_LAYOUT,
            cycle_order: constants::CYCLE_ORDER.to_vec(),
            language_layouts: constants::LANGUAGE_LAYOUTS
                .iter()
                .map(|(tag, id)| ((*tag).to_string(), *id))
                .collect(),
            respect_manual_choice: true,
            gesture: GestureTuning::default(),
        }
    }
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

/// Loads the config at `path`, writing the defaults there first if the file is missing.
pub fn load(path: &Path) -> io::Result<Config> {
    ensure_parent_dir(path)?;

    confy::load_path(path).map_err(confy_err)
}

pub fn save(path: &Path, cfg: &Config) -> io::Result<()> {
    cfg.validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    ensure_parent_dir(path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let parse = |name: &str| name.parse::<LayoutId>().map_err(|e| e.to_string());

        let language_layouts = raw
            .language_layouts
            .iter()
            .map(|(tag, name)| -> Result<(String, LayoutId), String> {
                Ok((normalize_tag(tag), parse(name.as_str())?))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let cfg = Self {
            default_layout: parse(raw.default_layout.as_str())?,
            cycle_order: raw
                .cycle_order
                .iter()
                .map(|name| parse(name.as_str()))
                .collect::<Result<_, _>>()?,
            language_layouts,
            respect_manual_choice: raw.respect_manual_choice,
            gesture: raw.gesture,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    pub fn default_layout(&self) -> LayoutId {
        self.default_layout
    }

    pub fn cycle_order(&self) -> &[LayoutId] {
        &self.cycle_order
    }

    /// Layout for a normalised language tag, if the table has one.
    pub fn layout_for_language(&self, tag: &str) -> Option<LayoutId> {
        self.language_layouts.get(tag).copied()
    }

    pub fn respect_manual_choice(&self) -> bool {
        self.respect_manual_choice
    }

    pub fn set_respect_manual_choice(&mut self, value: bool) {
        self.respect_manual_choice = value;
    }

    pub fn gesture(&self) -> GestureTuning {
        self.gesture
    }
}
