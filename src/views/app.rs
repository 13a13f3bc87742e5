// ============================================================================
// APP VIEW - Despacho de la ruta activa a su vista
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::navigation::redirect;
use crate::router::Route;
use crate::state::{AppState, MountGuard};
use crate::viewmodels::login_viewmodel::redirect_for;
use crate::views::{render_add_banquet, render_home, render_login, render_not_found, render_product_details};

/// Renderizar la vista de la ruta efectiva
pub fn render_app(state: &AppState, guard: MountGuard) -> Result<Element, JsValue> {
    let route = state.effective_route();
    log::debug!("🧭 [APP] Renderizando {:?}", route);

    match route {
        Route::Home => render_home(state),
        Route::Login => match redirect_for(&state.session.get_session()) {
            // Con sesión, el login no se muestra
            Some(target) => {
                redirect(state, target);
                render_home(state)
            }
            None => render_login(state, guard),
        },
        Route::AddBanquet => render_add_banquet(state, guard),
        Route::BanquetDetails(id) => render_product_details(state, &id, guard),
        Route::NotFound(path) => render_not_found(state, &path),
    }
}
