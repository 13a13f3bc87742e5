// ============================================================================
// PRODUCT DETAILS VIEWMODEL - Carga de un banquete por id
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::Banquet;
use crate::services::VendorApi;
use crate::state::{MountGuard, SessionState};

/// ViewModel del detalle de banquete
pub struct ProductDetailsViewModel<A: VendorApi> {
    api: A,
    session: SessionState,
    banquet: Rc<RefCell<Banquet>>,
}

impl<A: VendorApi> ProductDetailsViewModel<A> {
    pub fn new(api: A, session: SessionState) -> Self {
        Self {
            api,
            session,
            banquet: Rc::new(RefCell::new(Banquet::default())),
        }
    }

    /// Registro actual (vacío hasta que llegue una respuesta correcta)
    pub fn banquet(&self) -> Banquet {
        self.banquet.borrow().clone()
    }

    /// Cargar el banquete. Devuelve true si el registro se actualizó.
    /// Si la vista se desmontó mientras tanto, la respuesta se descarta.
    pub async fn load(&self, banquet_id: &str, guard: &MountGuard) -> bool {
        let (vendor_id, token) = match self.session.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                log::error!("❌ [DETAILS] No se puede cargar el banquete: {}", e);
                return false;
            }
        };

        let result = self.api.get_banquet(&vendor_id, banquet_id, &token).await;

        if !guard.is_mounted() {
            log::debug!("🔕 [DETAILS] Vista desmontada, se descarta la respuesta de {}", banquet_id);
            return false;
        }

        match result {
            Ok(response) if response.success => match response.banquet {
                Some(banquet) => {
                    log::info!("✅ [DETAILS] Banquete {} cargado", banquet_id);
                    *self.banquet.borrow_mut() = banquet;
                    true
                }
                None => {
                    log::error!("❌ [DETAILS] Respuesta sin banquete para {}", banquet_id);
                    false
                }
            },
            Ok(response) => {
                log::error!(
                    "❌ [DETAILS] El servidor rechazó la petición: {}",
                    response.message.unwrap_or_default()
                );
                false
            }
            Err(e) => {
                log::error!("❌ [DETAILS] Error obteniendo banquete: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GetBanquetResponse;
    use crate::testing::{signed_in_session, MockVendorApi};
    use crate::utils::storage::MemoryTokenStore;
    use futures::executor::block_on;

    fn banquet_response() -> GetBanquetResponse {
        serde_json::from_str(
            r#"{"success":true,"banquet":{"_id":"b1","property_name":"Royal Palace","cover_photo":"covers/b1.jpg"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_load_scopes_request_to_vendor() {
        let api = MockVendorApi::new();
        *api.get_response.borrow_mut() = Ok(banquet_response());
        let (session, token) = signed_in_session("v7");
        let vm = ProductDetailsViewModel::new(api.clone(), session);

        assert!(block_on(vm.load("b1", &MountGuard::new())));
        assert_eq!(vm.banquet().property_name().as_deref(), Some("Royal Palace"));
        assert_eq!(*api.get_calls.borrow(), vec![("v7".to_string(), "b1".to_string(), token)]);
    }

    #[test]
    fn test_failure_leaves_empty_record() {
        let api = MockVendorApi::new();
        *api.get_response.borrow_mut() = Err("Network error: offline".to_string());
        let (session, _) = signed_in_session("v7");
        let vm = ProductDetailsViewModel::new(api, session);

        assert!(!block_on(vm.load("b1", &MountGuard::new())));
        assert_eq!(vm.banquet(), Banquet::default());
    }

    #[test]
    fn test_unsuccessful_response_is_ignored() {
        let api = MockVendorApi::new();
        *api.get_response.borrow_mut() = Ok(GetBanquetResponse {
            success: false,
            banquet: None,
            message: Some("Not found".to_string()),
        });
        let (session, _) = signed_in_session("v7");
        let vm = ProductDetailsViewModel::new(api, session);
        assert!(!block_on(vm.load("missing", &MountGuard::new())));
        assert_eq!(vm.banquet(), Banquet::default());
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let api = MockVendorApi::new();
        *api.get_response.borrow_mut() = Ok(banquet_response());
        let (session, _) = signed_in_session("v7");
        let vm = ProductDetailsViewModel::new(api, session);
        let guard = MountGuard::new();
        guard.unmount();

        assert!(!block_on(vm.load("b1", &guard)));
        assert_eq!(vm.banquet(), Banquet::default());
    }

    #[test]
    fn test_no_request_without_session() {
        let api = MockVendorApi::new();
        let session = SessionState::new(Rc::new(MemoryTokenStore::new()));
        let vm = ProductDetailsViewModel::new(api.clone(), session);
        assert!(!block_on(vm.load("b1", &MountGuard::new())));
        assert_eq!(api.request_count(), 0);
    }
}
