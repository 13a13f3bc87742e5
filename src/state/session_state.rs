// ============================================================================
// SESSION STATE - Sesión del vendedor (inyectada en cada vista)
// ============================================================================
// Se construye al arrancar desde el token persistido y solo la modifican
// los flujos de login/logout. Las vistas se suscriben a los cambios.
// ============================================================================

use std::rc::Rc;
use crate::models::session::token_expired_at;
use crate::models::Session;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::storage::TokenStore;

/// Estado de sesión
#[derive(Clone)]
pub struct SessionState {
    session: ReactiveState<Session>,
    store: Rc<dyn TokenStore>,
}

impl SessionState {
    /// Crear estado vacío sobre un almacén de token
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            session: ReactiveState::new(Session::default()),
            store,
        }
    }

    /// Restaurar la sesión desde el token persistido (`now` en segundos Unix).
    /// Un token caducado se descarta.
    pub fn restore(store: Rc<dyn TokenStore>, now: i64) -> Self {
        let state = Self::new(store);
        if let Some(token) = state.store.load() {
            if token_expired_at(&token, now) {
                log::warn!("⚠️ [SESSION] Token persistido caducado, se descarta");
                if let Err(e) = state.store.clear() {
                    log::error!("❌ [SESSION] Error limpiando token: {}", e);
                }
            } else {
                let session = Session::from_token(token);
                if session.user.is_none() {
                    log::warn!("⚠️ [SESSION] Token sin identidad de vendedor");
                }
                log::info!("✅ [SESSION] Sesión restaurada desde storage");
                state.session.set(session);
            }
        }
        state
    }

    /// Copia de la sesión actual
    pub fn get_session(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn vendor_id(&self) -> Option<String> {
        self.session.with(|s| s.vendor_id().map(str::to_string))
    }

    /// (vendor_id, token) para peticiones autenticadas
    pub fn credentials(&self) -> Result<(String, String), String> {
        self.session.with(Session::credentials)
    }

    /// Login correcto: persistir el token y publicar la nueva sesión
    pub fn sign_in(&self, token: String) -> Result<(), String> {
        self.store.save(&token)?;
        self.session.set(Session::from_token(token));
        Ok(())
    }

    /// Logout: borrar el token persistido y vaciar la sesión
    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] Error borrando token: {}", e);
        }
        self.session.set(Session::default());
    }

    /// Suscribirse a cambios de sesión
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.session.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::fake_token;
    use crate::utils::storage::MemoryTokenStore;
    use std::cell::Cell;

    #[test]
    fn test_restore_without_token_is_anonymous() {
        let state = SessionState::restore(Rc::new(MemoryTokenStore::new()), 0);
        assert!(!state.is_authenticated());
        assert_eq!(state.vendor_id(), None);
    }

    #[test]
    fn test_restore_reads_vendor_from_token() {
        let token = fake_token(r#"{"_id":"v42","exp":2000}"#);
        let state = SessionState::restore(Rc::new(MemoryTokenStore::with_token(&token)), 1000);
        assert!(state.is_authenticated());
        assert_eq!(state.vendor_id().as_deref(), Some("v42"));
        assert_eq!(state.credentials(), Ok(("v42".to_string(), token)));
    }

    #[test]
    fn test_restore_discards_expired_token() {
        let token = fake_token(r#"{"_id":"v42","exp":10}"#);
        let store = MemoryTokenStore::with_token(&token);
        let state = SessionState::restore(Rc::new(store.clone()), 1000);
        assert!(!state.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_sign_in_persists_and_notifies() {
        let store = MemoryTokenStore::new();
        let state = SessionState::new(Rc::new(store.clone()));
        let notified = Rc::new(Cell::new(false));
        let notified_clone = notified.clone();
        state.subscribe(move |s| notified_clone.set(s.is_authenticated()));

        state.sign_in("abc".to_string()).unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        assert!(notified.get());

        state.sign_out();
        assert_eq!(store.load(), None);
        assert!(!notified.get());
    }
}
