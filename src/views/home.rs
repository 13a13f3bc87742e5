// ============================================================================
// HOME VIEW - Portada del proveedor y página de ruta desconocida
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::navigation::navigate;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;

fn nav_button(state: &AppState, label: &str, class: &str, route: Route) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(label)
        .build();
    let state = state.clone();
    on_click(&button, move |_| navigate(&state, route.clone()))?;
    Ok(button)
}

/// Portada: acceso al alta de banquetes o al login
pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    log::info!("🎬 [HOME] render_home() llamado");

    let home = ElementBuilder::new("div")?.class("home-screen").build();
    append_child(&home, &ElementBuilder::new("h1")?.text("Vendor Dashboard").build())?;

    if state.session.is_authenticated() {
        append_child(&home, &nav_button(state, "Add Banquet", "btn-primary", Route::AddBanquet)?)?;

        let logout = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .text("Logout")
            .build();
        let session = state.session.clone();
        on_click(&logout, move |_| {
            log::info!("👋 [HOME] Cerrando sesión");
            session.sign_out();
        })?;
        append_child(&home, &logout)?;
    } else {
        append_child(&home, &nav_button(state, "Login", "btn-primary", Route::Login)?)?;
    }

    Ok(home)
}

pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    log::warn!("⚠️ [ROUTER] Ruta desconocida: {}", path);
    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .child(ElementBuilder::new("h2")?.text("Page not found").build())?
        .child(nav_button(state, "Go Home", "btn-primary", Route::Home)?)?
        .build())
}
