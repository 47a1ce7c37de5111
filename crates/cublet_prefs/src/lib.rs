//! User preferences.
//!
//! Preferences are stored as YAML. Missing fields fall back to the built-in
//! defaults in `default.yaml`.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::Result;
use serde::{Deserialize, Serialize};

mod animation;
pub mod paths;
mod scramble;

pub use animation::*;
pub use scramble::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub scramble: ScramblePreferences,
}
impl Preferences {
    /// Loads preferences from `path`, or from the user preferences file if
    /// `path` is `None`. If loading fails, the default preferences are
    /// returned.
    ///
    /// An explicit `path` must exist; the user preferences file is optional.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    fn try_load(path: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match path {
            Some(path) => {
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            None => match paths::prefs_file() {
                Ok(path) => {
                    log::trace!("Loading preferences from {}", path.display());
                    config = config.add_source(
                        config::File::from(path)
                            .format(PREFS_FILE_FORMAT)
                            .required(false),
                    );
                }
                Err(e) => log::warn!("Error locating user preferences: {e}"),
            },
        }

        Ok(config.build()?.try_deserialize()?)
    }

    /// Saves preferences to `path`, or to the user preferences file if `path`
    /// is `None`.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = match path {
            Some(p) => p,
            None => paths::prefs_file()?,
        };
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}
