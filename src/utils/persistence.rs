//! Generic JSON persistence for ~/.numble/ save files.
//!
//! One helper pair shared by the config, stats, and streak records.

use std::fs;
use std::io;
use std::path::PathBuf;

/// The ~/.numble/ save directory, created on first use.
pub fn save_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home.join(".numble");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of a save file under ~/.numble/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(save_dir()?.join(filename))
}

/// Load a JSON save file, falling back to `T::default()` when the file is
/// missing or malformed. A broken record is recovered, never an error.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Write a value as pretty-printed JSON under ~/.numble/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
