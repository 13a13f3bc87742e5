// ============================================================================
// APP - Aplicación principal: estado global + render de la ruta activa
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::navigation::current_path;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Route;
use crate::state::{AppState, SessionState};
use crate::utils::storage::default_token_store;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

/// Re-render diferido: agrupa varios cambios del mismo tick
fn schedule_rerender() {
    Timeout::new(0, crate::rerender_app).forget();
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        // Restaurar sesión desde storage (descarta tokens caducados)
        let session = SessionState::restore(default_token_store(), chrono::Utc::now().timestamp());
        if session.is_authenticated() {
            log::info!("💾 [APP] Sesión restaurada para {}", session.vendor_id().unwrap_or_default());
        }

        let state = AppState::new(session, Route::parse(&current_path()));

        // Suscribirse a cambios de ruta y sesión para re-renderizar
        state.route.subscribe(|_| schedule_rerender());
        state.session.subscribe(|_| schedule_rerender());

        Ok(Self { state, root })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        log::debug!("🎬 [APP] App::render() llamado");

        // La vista anterior deja de estar montada antes de limpiar el DOM
        let guard = self.state.mount_view();
        set_inner_html(&self.root, "");

        let view = render_app(&self.state, guard)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
