// Secciones de la ficha. Solo presentación: reciben el registro (o nada)

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{on_submit, ElementBuilder};
use crate::models::Banquet;

const NOT_AVAILABLE: &str = "-";

fn section(class: &str, title: &str) -> Result<ElementBuilder, JsValue> {
    ElementBuilder::new("section")?
        .class(&format!("details-section {}", class))
        .child(ElementBuilder::new("h3")?.class("details-section-title").text(title).build())
}

fn row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("details-line")
        .child(ElementBuilder::new("span")?.class("details-label").text(label).build())?
        .child(ElementBuilder::new("span")?.class("details-value").text(value).build())?
        .build())
}

/// Filas de precios en el orden en que se muestran
pub(crate) fn charge_rows(banquet: &Banquet) -> Vec<(&'static str, String)> {
    [
        ("Veg Price", &banquet.veg_price),
        ("Non-Veg Price", &banquet.nonveg_price),
        ("Price Per Room", &banquet.price_per_room),
    ]
    .into_iter()
    .map(|(label, value)| {
        let shown = Banquet::display_value(value)
            .map(|v| format!("₹ {}", v))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        (label, shown)
    })
    .collect()
}

pub(crate) fn area_rows(banquet: &Banquet) -> Vec<(&'static str, String)> {
    let or_missing = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());
    vec![
        ("Type", or_missing(banquet.banquet_type())),
        ("Fixed Capacity", or_missing(Banquet::display_value(&banquet.fixed_capacity))),
        ("Max Capacity", or_missing(Banquet::display_value(&banquet.max_capacity))),
    ]
}

/// URLs absolutas de la galería
pub(crate) fn gallery_urls(banquet: &Banquet) -> Vec<String> {
    banquet
        .photo_paths()
        .iter()
        .map(|path| CONFIG.image_url(path))
        .collect()
}

pub fn banner(banquet: &Banquet) -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("div")?.class("details-banner");
    let name = banquet.property_name().unwrap_or_default();
    let banner = match banquet.cover_photo() {
        Some(path) => banner.child(
            ElementBuilder::new("img")?
                .class("details-banner-img")
                .attr("src", &CONFIG.image_url(&path))?
                .attr("alt", if name.is_empty() { "Banquet" } else { name.as_str() })?
                .build(),
        )?,
        None => banner.child(ElementBuilder::new("div")?.class("details-banner-placeholder").build())?,
    };
    let mut caption = ElementBuilder::new("div")?.class("details-banner-caption").child(
        ElementBuilder::new("h1")?
            .text(&name)
            .build(),
    )?;
    if let Some(location) = banquet.location_line() {
        caption = caption.child(ElementBuilder::new("p")?.text(&location).build())?;
    }
    Ok(banner.child(caption.build())?.build())
}

pub fn charges(banquet: &Banquet) -> Result<Element, JsValue> {
    let rows = charge_rows(banquet)
        .iter()
        .map(|(label, value)| row(label, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(section("details-charges", "Charges")?.children(rows)?.build())
}

pub fn available_areas(banquet: &Banquet) -> Result<Element, JsValue> {
    let rows = area_rows(banquet)
        .iter()
        .map(|(label, value)| row(label, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(section("details-areas", "Available Areas")?.children(rows)?.build())
}

pub fn inquiry_form(banquet: &Banquet) -> Result<Element, JsValue> {
    let mut form = ElementBuilder::new("form")?.class("details-inquiry-form");
    for (kind, placeholder) in [("text", "Full Name"), ("tel", "Mobile Number"), ("date", "Function Date"), ("number", "No. of Guests")] {
        form = form.child(
            ElementBuilder::new("input")?
                .class("form-input")
                .attr("type", kind)?
                .attr("placeholder", placeholder)?
                .build(),
        )?;
    }
    let form = form
        .child(
            ElementBuilder::new("button")?
                .class("btn-submit")
                .attr("type", "submit")?
                .text("Send Inquiry")
                .build(),
        )?
        .build();

    let banquet_id = banquet.id().unwrap_or_default();
    // TODO: enviar la consulta cuando el backend exponga el endpoint de inquiries
    on_submit(&form, move || {
        log::info!("📨 [DETAILS] Consulta para {} aún sin endpoint", banquet_id);
    })?;

    Ok(section("details-inquiry", "Check Availability & Prices")?.child(form)?.build())
}

pub fn about(banquet: &Banquet) -> Result<Element, JsValue> {
    let mut about = section("details-about", "About")?;
    if let Some(address) = banquet.address() {
        about = about.child(ElementBuilder::new("p")?.class("details-address").text(&address).build())?;
    }
    if let Some(location) = banquet.location_line() {
        about = about.child(ElementBuilder::new("p")?.text(&location).build())?;
    }
    Ok(about.build())
}

pub fn gallery(banquet: &Banquet) -> Result<Element, JsValue> {
    let mut grid = ElementBuilder::new("div")?.class("details-gallery-grid");
    for (index, url) in gallery_urls(banquet).iter().enumerate() {
        grid = grid.child(
            ElementBuilder::new("img")?
                .attr("src", url)?
                .attr("alt", &format!("Gallery {}", index + 1))?
                .attr("loading", "lazy")?
                .build(),
        )?;
    }
    Ok(section("details-gallery", "Gallery")?.child(grid.build())?.build())
}

pub fn reviews() -> Result<Element, JsValue> {
    Ok(section("details-reviews", "Reviews")?
        .child(ElementBuilder::new("p")?.class("details-empty").text("No reviews yet").build())?
        .build())
}

pub fn faq() -> Result<Element, JsValue> {
    Ok(section("details-faq", "FAQ")?.build())
}

pub fn browse() -> Result<Element, JsValue> {
    Ok(section("details-browse", "Browse Similar Venues")?.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_charges_tolerate_missing_fields() {
        let rows = charge_rows(&Banquet::default());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|(_, value)| value == NOT_AVAILABLE));
    }

    #[test]
    fn test_charges_show_numbers_and_strings() {
        let banquet = Banquet {
            veg_price: Some(json!(1200)),
            nonveg_price: Some(json!("1500")),
            ..Default::default()
        };
        let rows = charge_rows(&banquet);
        assert_eq!(rows[0], ("Veg Price", "₹ 1200".to_string()));
        assert_eq!(rows[1], ("Non-Veg Price", "₹ 1500".to_string()));
        assert_eq!(rows[2].1, NOT_AVAILABLE);
    }

    #[test]
    fn test_gallery_skips_empty_paths() {
        let banquet = Banquet {
            additional_photos: Some(json!(["a.jpg", "", "https://cdn.example.com/b.jpg"])),
            ..Default::default()
        };
        let urls = gallery_urls(&banquet);
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("/a.jpg"));
        assert_eq!(urls[1], "https://cdn.example.com/b.jpg");
    }

    #[test]
    fn test_area_rows_for_partial_record() {
        let banquet = Banquet {
            banquet_type: Some(json!("Terrace")),
            max_capacity: Some(json!(300)),
            ..Default::default()
        };
        let rows = area_rows(&banquet);
        assert_eq!(rows[0].1, "Terrace");
        assert_eq!(rows[1].1, NOT_AVAILABLE);
        assert_eq!(rows[2].1, "300");
    }
}
