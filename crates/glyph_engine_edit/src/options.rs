use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{EditorError, MagicWandOptions, editor::DEFAULT_MAX_HISTORY_SIZE};

/// Persistent editor preferences, stored as `editor.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Number of undo steps kept. Values below 1 are treated as 1.
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,

    /// Minimum distance in cells between two kept lasso points.
    #[serde(default = "default_lasso_smoothing_tolerance")]
    pub lasso_smoothing_tolerance: f32,

    #[serde(default)]
    pub magic_wand: MagicWandOptions,

    /// Keep rectangle selections inside the canvas while dragging.
    #[serde(default = "default_true")]
    pub clip_rectangle_to_canvas: bool,
}

fn default_max_history_size() -> usize {
    DEFAULT_MAX_HISTORY_SIZE
}

fn default_lasso_smoothing_tolerance() -> f32 {
    0.5
}

fn default_true() -> bool {
    true
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_history_size: default_max_history_size(),
            lasso_smoothing_tolerance: default_lasso_smoothing_tolerance(),
            magic_wand: MagicWandOptions::default(),
            clip_rectangle_to_canvas: true,
        }
    }
}

impl EditorOptions {
    pub const FILE_NAME: &'static str = "editor.toml";

    pub fn from_toml_str(txt: &str) -> Result<Self, EditorError> {
        Ok(toml::from_str(txt)?)
    }

    pub fn to_toml_string(&self) -> Result<String, EditorError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reads options from `path`. Missing or broken files give the defaults.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(txt) => match Self::from_toml_str(&txt) {
                Ok(options) => return options,
                Err(err) => log::error!("Error parsing options file {}: {}", path.display(), err),
            },
            Err(err) => log::error!("Error reading options file {}: {}", path.display(), err),
        }
        Self::default()
    }

    /// Writes to a temp file next to `path` first, then renames it over `path`.
    pub fn store(&self, path: &Path) -> Result<(), EditorError> {
        let text = self.to_toml_string()?;
        let temp_path = temp_path_for(path);

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result {
            log::error!("Error writing temp options file: {}", err);
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        if let Err(err) = fs::rename(&temp_path, path) {
            log::error!("Error renaming options file: {}", err);
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path.file_name().map_or_else(|| EditorOptions::FILE_NAME.into(), |name| name.to_string_lossy());
    path.with_file_name(format!(".{file_name}.tmp"))
}
