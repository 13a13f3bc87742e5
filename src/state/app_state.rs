// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::{MountGuard, ReactiveState, SessionState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub route: ReactiveState<Route>,
    pub api: Rc<ApiClient>,
    // Marca de vida de la vista montada actualmente
    current_view: Rc<RefCell<MountGuard>>,
}

impl AppState {
    pub fn new(session: SessionState, initial_route: Route) -> Self {
        Self {
            session,
            route: ReactiveState::new(initial_route),
            api: Rc::new(ApiClient::new()),
            current_view: Rc::new(RefCell::new(MountGuard::new())),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }

    /// Ruta que realmente se muestra: sin sesión, las rutas protegidas van al login
    pub fn effective_route(&self) -> Route {
        let route = self.current_route();
        if route.requires_session() && !self.session.is_authenticated() {
            Route::Login
        } else {
            route
        }
    }

    /// Desmontar la vista anterior y entregar la marca de la nueva
    pub fn mount_view(&self) -> MountGuard {
        let guard = MountGuard::new();
        let previous = std::mem::replace(&mut *self.current_view.borrow_mut(), guard.clone());
        previous.unmount();
        guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::signed_in_session;
    use crate::utils::storage::MemoryTokenStore;

    #[test]
    fn test_protected_route_without_session_shows_login() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::new()));
        let state = AppState::new(session, Route::AddBanquet);
        assert_eq!(state.effective_route(), Route::Login);
    }

    #[test]
    fn test_protected_route_with_session() {
        let (session, _) = signed_in_session("v1");
        let state = AppState::new(session, Route::BanquetDetails("b1".into()));
        assert_eq!(state.effective_route(), Route::BanquetDetails("b1".into()));
    }

    #[test]
    fn test_mounting_a_view_unmounts_the_previous_one() {
        let session = SessionState::new(Rc::new(MemoryTokenStore::new()));
        let state = AppState::new(session, Route::Home);
        let first = state.mount_view();
        let second = state.mount_view();
        assert!(!first.is_mounted());
        assert!(second.is_mounted());
    }
}
