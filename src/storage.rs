use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::Preferences;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad json: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk envelope for preferences. Unknown versions are discarded on
/// load, the same as corrupt content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesFile {
    pub version: u8,
    #[serde(flatten)]
    pub preferences: Preferences,
}

impl PreferencesFile {
    pub const VERSION: u8 = 1;
}

/// Last suggested activity, kept so consecutive `pick` invocations avoid an
/// immediate repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastPick {
    pub activity_id: String,
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "antsy", "antsy") {
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok();
        data_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "antsy", "antsy") {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
    }
    PathBuf::from(".")
}

pub fn get_preferences_path() -> PathBuf {
    get_data_dir().join("preferences.json")
}

pub fn get_last_pick_path() -> PathBuf {
    get_state_dir().join("last_pick.json")
}

/// Missing, unreadable, corrupt, or version-mismatched files all fall back
/// to defaults; the picker must never fail to start because of storage.
pub fn load_preferences(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    match read_json::<PreferencesFile>(path) {
        Ok(file) if file.version == PreferencesFile::VERSION => file.preferences,
        Ok(_) => {
            eprintln!("Warning: Unsupported preferences version, using defaults");
            Preferences::default()
        }
        Err(e) => {
            eprintln!("Warning: Could not load preferences: {}", e);
            Preferences::default()
        }
    }
}

pub fn save_preferences(path: &Path, preferences: &Preferences) -> Result<(), StorageError> {
    let file = PreferencesFile {
        version: PreferencesFile::VERSION,
        preferences: *preferences,
    };
    write_json_atomic(path, &file)
}

pub fn load_last_pick(path: &Path) -> Option<LastPick> {
    if !path.exists() {
        return None;
    }
    read_json(path).ok()
}

pub fn save_last_pick(path: &Path, pick: &LastPick) -> Result<(), StorageError> {
    write_json_atomic(path, pick)
}

pub fn delete_file_if_exists(path: &Path) -> Result<(), StorageError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, &json)
}

fn atomic_write(path: &Path, content: &str) -> Result<(), StorageError> {
    let tmp_path = path.with_extension("tmp");
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::SystemTime};

    use super::*;
    use crate::domain::{AgeGroup, Gender};

    fn unique_path(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        PathBuf::from(format!("/tmp/{}_{}.json", prefix, now))
    }

    #[test]
    fn test_preferences_round_trip() {
        let path = unique_path("antsy_prefs_roundtrip");
        let prefs = Preferences {
            age_group: Some(AgeGroup::Child),
            gender: Some(Gender::Girl),
        };

        save_preferences(&path, &prefs).unwrap();
        let loaded = load_preferences(&path);
        assert_eq!(loaded, prefs);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_preferences_default() {
        let path = unique_path("antsy_prefs_missing");
        assert_eq!(load_preferences(&path), Preferences::default());
    }

    #[test]
    fn test_corrupt_preferences_default() {
        let path = unique_path("antsy_prefs_corrupt");
        fs::write(&path, "{not json at all").unwrap();

        assert_eq!(load_preferences(&path), Preferences::default());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_version_mismatch_default() {
        let path = unique_path("antsy_prefs_version");
        fs::write(
            &path,
            r#"{"version": 99, "age_group": "CHILD", "gender": "GIRL"}"#,
        )
        .unwrap();

        assert_eq!(load_preferences(&path), Preferences::default());

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_last_pick_round_trip() {
        let path = unique_path("antsy_last_pick");
        let pick = LastPick {
            activity_id: "c4".to_string(),
        };

        save_last_pick(&path, &pick).unwrap();
        assert_eq!(load_last_pick(&path), Some(pick));

        delete_file_if_exists(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_last_pick(&path), None);
    }
}
