// ============================================================================
// EVENT HANDLING - Helpers para registrar listeners
// ============================================================================
// Los listeners de elementos se liberan cuando el navegador destruye el
// elemento (set_inner_html("") en cada render), por eso closure.forget()
// es seguro aquí. Los listeners globales se registran una sola vez en lib.rs.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, MouseEvent};

fn listen<F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler
pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |e: Event| {
        if let Ok(mouse_event) = e.dyn_into::<MouseEvent>() {
            handler(mouse_event);
        }
    })
}

/// Submit handler (evita el envío nativo del formulario)
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Input handler: entrega el input que disparó el evento
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(HtmlInputElement) + 'static,
{
    listen(element, "input", move |e: Event| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input);
        }
    })
}

/// Change handler para <select>: entrega el valor elegido
pub fn on_select_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "change", move |e: Event| {
        if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
            handler(select.value());
        }
    })
}

/// Change handler para <input type="file">
pub fn on_file_change<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(HtmlInputElement) + 'static,
{
    listen(element, "change", move |e: Event| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input);
        }
    })
}
