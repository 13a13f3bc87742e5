// ============================================================================
// LOGIN VIEWMODEL - Lógica de login del vendedor
// ============================================================================

use crate::models::{LoginErrors, Session};
use crate::router::Route;
use crate::services::VendorApi;
use crate::state::SessionState;

pub const MOBILE_LENGTH: usize = 10;
pub const MOBILE_REQUIRED: &str = "Mobile Number is required";
pub const MOBILE_LENGTH_ERROR: &str = "Mobile Number must be 10 digits";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Filtro del input de móvil: solo se aceptan dígitos (o vaciar el campo)
pub fn accept_mobile_input(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_digit())
}

/// Validación en el momento del envío
pub fn validate_credentials(mobile: &str, password: &str) -> LoginErrors {
    let mobile_error = if mobile.is_empty() {
        Some(MOBILE_REQUIRED)
    } else if mobile.len() != MOBILE_LENGTH || !accept_mobile_input(mobile) {
        Some(MOBILE_LENGTH_ERROR)
    } else {
        None
    };
    LoginErrors {
        mobile: mobile_error.map(str::to_string),
        password: password.is_empty().then(|| PASSWORD_REQUIRED.to_string()),
    }
}

/// A dónde ir si ya hay sesión (la vista de login no se muestra con sesión)
pub fn redirect_for(session: &Session) -> Option<Route> {
    session.is_authenticated().then_some(Route::Home)
}

#[derive(Clone, PartialEq, Debug)]
pub enum LoginOutcome {
    /// Errores de campo; no se hizo ninguna petición
    Invalid(LoginErrors),
    /// Token persistido y sesión publicada
    LoggedIn { redirect: Route },
    /// Error de red o `success: false` (solo se registra en el log)
    Failed(String),
}

/// ViewModel de login
pub struct LoginViewModel<A: VendorApi> {
    api: A,
    session: SessionState,
}

impl<A: VendorApi> LoginViewModel<A> {
    pub fn new(api: A, session: SessionState) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, mobile: &str, password: &str) -> LoginOutcome {
        let errors = validate_credentials(mobile, password);
        if !errors.is_empty() {
            log::info!("📝 [LOGIN] Validación fallida");
            return LoginOutcome::Invalid(errors);
        }

        log::info!("🔐 [LOGIN] Iniciando login...");
        let response = match self.api.login(mobile, password).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ [LOGIN] Error en login: {}", e);
                return LoginOutcome::Failed(e);
            }
        };

        if !response.success {
            let message = response.message.unwrap_or_else(|| "Login rejected".to_string());
            log::error!("❌ [LOGIN] Login rechazado: {}", message);
            return LoginOutcome::Failed(message);
        }

        let token = match response.token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                log::error!("❌ [LOGIN] Respuesta de login sin token");
                return LoginOutcome::Failed("Login response carried no token".to_string());
            }
        };

        if let Err(e) = self.session.sign_in(token) {
            log::error!("❌ [LOGIN] Error guardando token: {}", e);
            return LoginOutcome::Failed(e);
        }

        log::info!("✅ [LOGIN] Login exitoso");
        LoginOutcome::LoggedIn { redirect: Route::Home }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::testing::MockVendorApi;
    use crate::utils::storage::{MemoryTokenStore, TokenStore};
    use futures::executor::block_on;
    use std::rc::Rc;

    fn setup() -> (Rc<MockVendorApi>, MemoryTokenStore, LoginViewModel<Rc<MockVendorApi>>) {
        let api = MockVendorApi::new();
        let store = MemoryTokenStore::new();
        let session = SessionState::new(Rc::new(store.clone()));
        (api.clone(), store, LoginViewModel::new(api, session))
    }

    #[test]
    fn test_mobile_filter() {
        assert!(accept_mobile_input("98765"));
        assert!(accept_mobile_input(""));
        assert!(!accept_mobile_input("98a"));
        assert!(!accept_mobile_input("+91"));
    }

    #[test]
    fn test_validation_messages() {
        let errors = validate_credentials("", "");
        assert_eq!(errors.mobile.as_deref(), Some(MOBILE_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));

        let errors = validate_credentials("98765432101", "pw");
        assert_eq!(errors.mobile.as_deref(), Some(MOBILE_LENGTH_ERROR));
        assert!(validate_credentials("9876543210", "pw").is_empty());
    }

    #[test]
    fn test_short_mobile_blocks_login() {
        let (api, store, vm) = setup();
        let outcome = block_on(vm.login("12345", "anything"));
        match outcome {
            LoginOutcome::Invalid(errors) => {
                assert_eq!(errors.mobile.as_deref(), Some(MOBILE_LENGTH_ERROR));
                assert_eq!(errors.password, None);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(api.request_count(), 0);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_successful_login_persists_token_and_goes_home() {
        let (api, store, vm) = setup();
        *api.login_response.borrow_mut() = Ok(LoginResponse {
            success: true,
            token: Some("abc".to_string()),
            message: None,
        });

        let outcome = block_on(vm.login("9876543210", "x"));
        assert_eq!(outcome, LoginOutcome::LoggedIn { redirect: Route::Home });
        assert_eq!(store.load().as_deref(), Some("abc"));
        assert_eq!(
            *api.login_calls.borrow(),
            vec![("9876543210".to_string(), "x".to_string())]
        );
    }

    #[test]
    fn test_rejected_login_keeps_session_empty() {
        let (api, store, vm) = setup();
        *api.login_response.borrow_mut() = Ok(LoginResponse {
            success: false,
            token: None,
            message: Some("Invalid credentials".to_string()),
        });
        assert_eq!(
            block_on(vm.login("9876543210", "wrong")),
            LoginOutcome::Failed("Invalid credentials".to_string())
        );
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_network_error_is_reported() {
        let (api, _, vm) = setup();
        *api.login_response.borrow_mut() = Err("Network error: offline".to_string());
        assert!(matches!(block_on(vm.login("9876543210", "x")), LoginOutcome::Failed(_)));
    }

    #[test]
    fn test_redirect_only_with_session() {
        assert_eq!(redirect_for(&Session::default()), None);
        assert_eq!(redirect_for(&Session::from_token("abc".to_string())), Some(Route::Home));
    }
}
