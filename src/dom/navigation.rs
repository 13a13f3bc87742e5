// ============================================================================
// NAVIGATION - History API sobre la tabla de rutas
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use crate::dom::window;
use crate::router::Route;
use crate::state::AppState;

/// Pathname actual del navegador
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Ir a una ruta (nueva entrada en el historial)
pub fn navigate(state: &AppState, route: Route) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            log::error!("❌ [NAV] pushState falló: {:?}", e);
        }
    }
    log::info!("🧭 [NAV] -> {}", route.path());
    state.route.set(route);
}

/// Sustituir la ruta actual (redirecciones)
pub fn redirect(state: &AppState, route: Route) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&route.path())) {
            log::error!("❌ [NAV] replaceState falló: {:?}", e);
        }
    }
    log::info!("🧭 [NAV] redirect -> {}", route.path());
    state.route.set(route);
}

/// Volver un paso atrás; el listener de popstate actualiza la ruta
pub fn go_back() {
    match window().and_then(|w| w.history().ok()) {
        Some(history) => {
            if let Err(e) = history.back() {
                log::error!("❌ [NAV] history.back falló: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [NAV] History API no disponible"),
    }
}

/// Registrar UNA VEZ el listener de popstate (atrás/adelante del navegador)
pub fn listen_popstate(state: AppState) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
        state.route.set(Route::parse(&current_path()));
    }) as Box<dyn FnMut(web_sys::Event)>);
    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
