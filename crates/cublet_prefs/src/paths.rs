use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "cublet-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = ProjectDirs::from("", "", "Cublet").map(|dirs| {
        dirs.config_dir()
            .join(PREFS_FILE_NAME)
            .with_extension(PREFS_FILE_EXTENSION)
    });
}

/// Returns the user preferences file in the platform configuration directory.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE
        .as_deref()
        .ok_or_eyre("no configuration directory")
}
