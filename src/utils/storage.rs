use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{window, Storage};

/// Clave fija del token en localStorage
pub const TOKEN_STORAGE_KEY: &str = "token";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Error writing '{}' to localStorage", key))
}

pub fn load_string(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("Could not access localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("Error removing '{}' from localStorage", key))
}

/// Persistencia del token de sesión
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Token en localStorage del navegador
#[derive(Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        load_string(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        save_string(TOKEN_STORAGE_KEY, token)
    }

    fn clear(&self) -> Result<(), String> {
        remove_from_storage(TOKEN_STORAGE_KEY)
    }
}

/// Token en memoria (navegación privada sin localStorage, tests)
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.borrow_mut() = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Elegir localStorage si está disponible, memoria en caso contrario
pub fn default_token_store() -> Rc<dyn TokenStore> {
    if get_local_storage().is_some() {
        Rc::new(LocalTokenStore)
    } else {
        log::warn!("⚠️ [STORAGE] localStorage no disponible, token solo en memoria");
        Rc::new(MemoryTokenStore::new())
    }
}
