// ============================================================================
// STORAGE - Puerto de persistencia (localStorage / memoria)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{window, Storage};

/// Acceso mínimo a un almacén clave/valor de strings.
///
/// La sesión solo depende de este trait, nunca de `localStorage` directamente.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn clear(&self, key: &str);
}

/// `window.localStorage` del navegador
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("⚠️ [STORAGE] No se pudo eliminar '{}'", key);
            }
        }
    }
}

/// Almacén en memoria. Los clones comparten el mismo mapa.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<RefCell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula un almacén lleno: toda escritura falla
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.borrow_mut() = read_only;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if *self.read_only.borrow() {
            return Err(format!("QuotaExceededError: '{}'", key));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("budo_token", "t1").unwrap();
        assert_eq!(other.get("budo_token").as_deref(), Some("t1"));

        other.clear("budo_token");
        assert!(storage.is_empty());
    }

    #[test]
    fn read_only_storage_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.set_read_only(true);
        assert!(storage.set("budo_user", "{}").is_err());
        assert!(!storage.contains("budo_user"));
    }
}
