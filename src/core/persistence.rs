//! Persistence of the local user's assistant preferences in ~/.config/docsnip/.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::assistants::UserPreferences;
use crate::core::error::AppError;
use crate::core::paths;

/// Read preferences from `path`. A missing file means no preferences yet.
pub(crate) fn read_preferences(path: &Path) -> Result<UserPreferences, AppError> {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserPreferences::default()),
        Err(source) => {
            return Err(AppError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&data).map_err(|source| AppError::Json {
        origin: path.display().to_string(),
        source,
    })
}

/// Write preferences to `path` through a temp file, creating the parent directory if needed.
pub(crate) fn write_preferences(path: &Path, prefs: &UserPreferences) -> Result<(), AppError> {
    let write_err = |source: io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = serde_json::to_string_pretty(prefs).map_err(|source| AppError::Json {
        origin: path.display().to_string(),
        source,
    })?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;
    log::debug!("Saved preferences to {}", path.display());
    Ok(())
}

/// Load the stored preferences of the local user.
pub fn load_preferences() -> Result<UserPreferences, AppError> {
    let path = paths::preferences_path().ok_or(AppError::NoConfigDir)?;
    read_preferences(&path)
}

/// Store the local user's preferred assistant order.
pub fn save_chosen_assistants(ids: &[i64]) -> Result<(), AppError> {
    let path = paths::preferences_path().ok_or(AppError::NoConfigDir)?;
    let mut prefs = read_preferences(&path)?;
    prefs.chosen_assistants = Some(ids.to_vec());
    write_preferences(&path, &prefs)
}

/// Forget the local user's preferred assistant order.
pub fn clear_chosen_assistants() -> Result<(), AppError> {
    let path = paths::preferences_path().ok_or(AppError::NoConfigDir)?;
    let mut prefs = read_preferences(&path)?;
    prefs.chosen_assistants = None;
    write_preferences(&path, &prefs)
}
