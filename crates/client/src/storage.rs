//! Cross-platform key/value persistence.
//!
//! - Web: `localStorage`
//! - Desktop: one JSON file per key under the platform config directory
//!   (`~/.config/groupmatch/` on Linux).

use serde::{de::DeserializeOwned, Serialize};

/// Save a value. Returns `true` if it was written.
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    serde_json::to_string(value)
        .map(|json| backend::write(key, &json))
        .unwrap_or(false)
}

/// Load a value, or `None` if it is missing or no longer decodes.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = backend::read(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) {
    backend::delete(key);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn write(key: &str, value: &str) -> bool {
        storage().is_some_and(|s| s.set_item(key, value).is_ok())
    }

    pub fn read(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub fn delete(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::path::PathBuf;

    fn path_for(key: &str) -> Option<PathBuf> {
        let dir = dirs::config_dir()?.join("groupmatch");
        std::fs::create_dir_all(&dir).ok()?;
        let file = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        Some(dir.join(format!("{file}.json")))
    }

    pub fn write(key: &str, value: &str) -> bool {
        path_for(key).is_some_and(|path| std::fs::write(path, value).is_ok())
    }

    pub fn read(key: &str) -> Option<String> {
        std::fs::read_to_string(path_for(key)?).ok()
    }

    pub fn delete(key: &str) {
        if let Some(path) = path_for(key) {
            let _ = std::fs::remove_file(path);
        }
    }
}
