// ============================================================================
// TOAST - Notificación temporal para el usuario
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use crate::config::CONFIG;
use crate::dom::{document, ElementBuilder};

/// Mostrar un toast de confirmación que se elimina solo
pub fn show_toast(message: &str) -> Result<(), JsValue> {
    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let toast = ElementBuilder::new("div")?
        .class("toast toast-success")
        .attr("role", "status")?
        .text(message)
        .build();
    body.append_child(&toast)?;

    Timeout::new(CONFIG.toast_duration_ms, move || {
        toast.remove();
    })
    .forget();
    Ok(())
}
