//! `localStorage` / `sessionStorage` behind the domain's [`KeyValueStore`].

use finance_domain::storage::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    fn name(&self) -> &'static str {
        match self {
            StorageArea::Local => "localStorage",
            StorageArea::Session => "sessionStorage",
        }
    }
}

/// Handle to one browser storage area. The underlying `Storage` object is
/// looked up on every call, so a handle is cheap to create and to clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };

        match storage {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable(format!("{} is disabled", self.area.name()))),
            Err(e) => Err(StorageError::Unavailable(format!("{}: {}", self.area.name(), js_error(e)))),
        }
    }
}

/// Browsers throw plain strings or `DOMException`s; keep whichever is readable
fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_error(e)))
    }

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_error(e),
            })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: js_error(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_domain::storage::{get_flag, get_json, set_flag, set_json};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trip() {
        let store = BrowserStore::local();
        set_json(&store, "test_numbers", &vec![1, 2, 3]).unwrap();
        let numbers: Vec<u32> = get_json(&store, "test_numbers");
        assert_eq!(numbers, vec![1, 2, 3]);

        store.remove("test_numbers").unwrap();
        assert!(store.get_raw("test_numbers").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_session_flag() {
        let store = BrowserStore::session();
        set_flag(&store, "test_flag", true).unwrap();
        assert!(get_flag(&store, "test_flag"));
        assert!(!get_flag(&BrowserStore::local(), "test_flag"));

        set_flag(&store, "test_flag", false).unwrap();
        assert!(!get_flag(&store, "test_flag"));
    }
}
