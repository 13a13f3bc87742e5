// ============================================================================
// PRODUCT DETAILS VIEW - Ficha de un banquete
// ============================================================================
// Se pinta primero con el registro vacío y se repinta cuando llega la
// respuesta. Todas las secciones toleran campos ausentes.
// ============================================================================

mod sections;

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::Banquet;
use crate::state::{AppState, MountGuard};
use crate::viewmodels::ProductDetailsViewModel;

const CONTENT_ID: &str = "product-details-content";

/// Renderizar la ficha del banquete `banquet_id`
pub fn render_product_details(state: &AppState, banquet_id: &str, guard: MountGuard) -> Result<Element, JsValue> {
    log::info!("🎬 [DETAILS] render_product_details({})", banquet_id);

    let vm = Rc::new(ProductDetailsViewModel::new(state.api.clone(), state.session.clone()));

    let container = ElementBuilder::new("div")?
        .class("product-details")
        .id(CONTENT_ID)?
        .build();
    render_sections(&container, &vm.banquet())?;

    let banquet_id = banquet_id.to_string();
    spawn_local(async move {
        if vm.load(&banquet_id, &guard).await {
            if let Some(container) = get_element_by_id(CONTENT_ID) {
                if let Err(e) = render_sections(&container, &vm.banquet()) {
                    log::error!("❌ [DETAILS] Error repintando la ficha: {:?}", e);
                }
            }
        }
    });

    Ok(container)
}

fn render_sections(container: &Element, banquet: &Banquet) -> Result<(), JsValue> {
    set_inner_html(container, "");

    append_child(container, &sections::banner(banquet)?)?;

    let pricing_row = ElementBuilder::new("div")?
        .class("details-row")
        .child(
            ElementBuilder::new("div")?
                .class("details-column narrow")
                .child(sections::charges(banquet)?)?
                .child(sections::available_areas(banquet)?)?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("details-column wide")
                .child(sections::inquiry_form(banquet)?)?
                .build(),
        )?
        .build();
    append_child(container, &pricing_row)?;

    let about_row = ElementBuilder::new("div")?
        .class("details-row")
        .child(
            ElementBuilder::new("div")?
                .class("details-column wide")
                .child(sections::about(banquet)?)?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("details-column narrow")
                .child(sections::gallery(banquet)?)?
                .build(),
        )?
        .build();
    append_child(container, &about_row)?;

    append_child(container, &sections::reviews()?)?;
    append_child(container, &sections::faq()?)?;
    append_child(container, &sections::browse()?)?;
    Ok(())
}
