// ============================================================================
// ADD BANQUET VIEW - Formulario de alta de banquete
// ============================================================================
// La vista solo traduce eventos del DOM al BanquetForm y pinta errores y
// previsualizaciones de forma incremental (sin re-render completo por tecla)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use crate::dom::files::{create_preview_url, read_selected_files, revoke_preview_url};
use crate::dom::navigation::go_back;
use crate::dom::toast::show_toast;
use crate::dom::{
    append_child, get_element_by_id, on_click, on_file_change, on_input, on_select_change, on_submit,
    set_attribute, set_error_text, set_inner_html, set_text_content, toggle_attribute, ElementBuilder,
};
use crate::models::BanquetField;
use crate::services::ApiClient;
use crate::state::{AppState, MountGuard};
use crate::viewmodels::{BanquetForm, BanquetFormViewModel, FormPhase, SubmitOutcome};

type SharedForm = Rc<RefCell<BanquetForm>>;
type FormViewModel = BanquetFormViewModel<Rc<ApiClient>>;

const CATERING_POLICIES: &[&str] = &["Outside Catering", "Inside Catering"];
const DECOR_POLICIES: &[&str] = &["Outside Decoration", "Inside Decoration"];
const DJ_POLICIES: &[&str] = &["Outside DJ", "Inside DJ"];
const BANQUET_TYPES: &[&str] = &["Indoor", "Outdoor", "Poolside", "Indoor & Outdoor", "Terrace"];

const SUBMIT_BUTTON_ID: &str = "banquet-submit";
const COVER_PREVIEW_ID: &str = "preview-cover_photo";
const ADDITIONAL_PREVIEW_ID: &str = "preview-additional_photos";

/// URLs de objeto de las previsualizaciones, alineadas con el borrador
#[derive(Default)]
struct PhotoPreviews {
    cover: Option<String>,
    additional: Vec<String>,
}

impl PhotoPreviews {
    fn replace_cover(&mut self, url: Option<String>) {
        if let Some(old) = std::mem::replace(&mut self.cover, url) {
            revoke_preview_url(&old);
        }
    }

    fn remove_additional(&mut self, index: usize) {
        if index < self.additional.len() {
            let url = self.additional.remove(index);
            revoke_preview_url(&url);
        }
    }

    fn revoke_all(&mut self) {
        self.replace_cover(None);
        for url in self.additional.drain(..) {
            revoke_preview_url(&url);
        }
    }
}

type SharedPreviews = Rc<RefCell<PhotoPreviews>>;

fn field_label(field: BanquetField) -> &'static str {
    match field {
        BanquetField::PropertyName => "Property Name",
        BanquetField::ParkingCapacity => "Parking Capacity",
        BanquetField::CateringPolicy => "Catering Policy",
        BanquetField::DecorPolicy => "Decor Policy",
        BanquetField::DjPolicy => "DJ Policy",
        BanquetField::BanquetType => "Banquet Type",
        BanquetField::FixedCapacity => "Fixed Capacity",
        BanquetField::MaxCapacity => "Max Capacity",
        BanquetField::PricePerRoom => "Price Per Room",
        BanquetField::Space => "Space",
        BanquetField::VegPrice => "Veg Price",
        BanquetField::NonvegPrice => "Non-Veg Price",
        BanquetField::State => "State",
        BanquetField::City => "City",
        BanquetField::Pincode => "Pincode",
        BanquetField::Address => "Address",
        BanquetField::CoverPhoto => "Cover Photo",
        BanquetField::AdditionalPhotos => "Additional Photos",
    }
}

fn error_id(field: BanquetField) -> String {
    format!("error-{}", field.name())
}

fn input_id(field: BanquetField) -> String {
    format!("field-{}", field.name())
}

/// Actualizar el mensaje de error de un campo
fn show_field_error(field: BanquetField, message: &str) {
    if let Some(span) = get_element_by_id(&error_id(field)) {
        if let Err(e) = set_error_text(&span, message) {
            log::warn!("⚠️ [BANQUET] No se pudo pintar el error de {}: {:?}", field.name(), e);
        }
    }
}

fn show_all_errors(form: &BanquetForm) {
    for field in BanquetField::ALL {
        show_field_error(field, form.error(field));
    }
}

/// Renderizar vista de alta de banquete
pub fn render_add_banquet(state: &AppState, guard: MountGuard) -> Result<Element, JsValue> {
    log::info!("🎬 [BANQUET] render_add_banquet() llamado");

    let form: SharedForm = Rc::new(RefCell::new(BanquetForm::new()));
    let previews: SharedPreviews = Rc::new(RefCell::new(PhotoPreviews::default()));
    let vm = Rc::new(BanquetFormViewModel::new(state.api.clone(), state.session.clone(), form.clone()));

    // Las URLs de objeto viven lo que viva la vista
    {
        let previews = previews.clone();
        guard.on_unmount(move || previews.borrow_mut().revoke_all());
    }

    let container = ElementBuilder::new("div")?.class("add-banquet").build();

    // Header con botón atrás
    let back_btn = ElementBuilder::new("button")?
        .class("btn-back")
        .attr("type", "button")?
        .attr("aria-label", "Back")?
        .text("‹")
        .build();
    on_click(&back_btn, move |_| go_back())?;
    let header = ElementBuilder::new("div")?
        .class("add-banquet-header")
        .child(back_btn)?
        .child(ElementBuilder::new("h2")?.text("Add Banquet").build())?
        .build();
    append_child(&container, &header)?;

    let form_el = ElementBuilder::new("form")?
        .class("add-banquet-form")
        .attr("novalidate", "")?
        .build();

    // Información del banquete
    let info_fields = vec![
        text_field(&form, BanquetField::PropertyName, "Property Name")?,
        text_field(&form, BanquetField::ParkingCapacity, "Parking Space")?,
        select_field(&form, BanquetField::CateringPolicy, CATERING_POLICIES)?,
        select_field(&form, BanquetField::DecorPolicy, DECOR_POLICIES)?,
        select_field(&form, BanquetField::DjPolicy, DJ_POLICIES)?,
        select_field(&form, BanquetField::BanquetType, BANQUET_TYPES)?,
        text_field(&form, BanquetField::FixedCapacity, "Enter Fixed Capacity")?,
        text_field(&form, BanquetField::MaxCapacity, "Maximum Capacity")?,
        text_field(&form, BanquetField::PricePerRoom, "Enter Price Per Room")?,
        text_field(&form, BanquetField::Space, "Enter Space")?,
        text_field(&form, BanquetField::VegPrice, "Maximum Veg Price")?,
        text_field(&form, BanquetField::NonvegPrice, "Maximum Non-Veg Price")?,
    ];
    append_child(&form_el, &section("Banquet Information", info_fields)?)?;

    // Dirección
    let address_fields = vec![
        state_field(&form)?,
        city_field(&form)?,
        text_field(&form, BanquetField::Pincode, "Enter Pincode")?,
        text_field(&form, BanquetField::Address, "Enter Address")?,
    ];
    append_child(&form_el, &section("Address Information", address_fields)?)?;

    // Fotos
    let photo_fields = vec![
        photo_field(&form, &previews, &guard, BanquetField::CoverPhoto)?,
        photo_field(&form, &previews, &guard, BanquetField::AdditionalPhotos)?,
    ];
    append_child(&form_el, &section("Upload Images", photo_fields)?)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-submit")
        .id(SUBMIT_BUTTON_ID)?
        .attr("type", "submit")?
        .text("Submit")
        .build();
    let actions = ElementBuilder::new("div")?
        .class("form-actions")
        .child(submit_btn)?
        .build();
    append_child(&form_el, &actions)?;

    {
        let vm = vm.clone();
        let guard = guard.clone();
        on_submit(&form_el, move || {
            submit(vm.clone(), guard.clone());
        })?;
    }

    append_child(&container, &form_el)?;
    Ok(container)
}

/// Lanzar el envío y reaccionar al resultado
fn submit(vm: Rc<FormViewModel>, guard: MountGuard) {
    if vm.form().borrow().phase() == FormPhase::Editing {
        set_submitting(true);
    }
    spawn_local(async move {
        let outcome = vm.submit().await;
        if !guard.is_mounted() {
            return;
        }
        // El envío en curso sigue controlando el botón
        if outcome == SubmitOutcome::AlreadySubmitting {
            return;
        }
        set_submitting(false);
        match outcome {
            SubmitOutcome::Invalid => show_all_errors(&vm.form().borrow()),
            SubmitOutcome::AlreadySubmitting => {}
            SubmitOutcome::Created { message } => {
                if let Err(e) = show_toast(&message) {
                    log::warn!("⚠️ [BANQUET] No se pudo mostrar el toast: {:?}", e);
                }
                go_back();
            }
            // Ya registrado en el log por el view model; el borrador se conserva
            SubmitOutcome::Failed(_) => {}
        }
    });
}

fn set_submitting(submitting: bool) {
    if let Some(btn) = get_element_by_id(SUBMIT_BUTTON_ID) {
        if let Err(e) = toggle_attribute(&btn, "disabled", submitting) {
            log::warn!("⚠️ [BANQUET] No se pudo cambiar el estado del botón: {:?}", e);
        }
        set_text_content(&btn, if submitting { "Submitting..." } else { "Submit" });
    }
}

fn section(title: &str, fields: Vec<Element>) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("div")?.class("form-grid").children(fields)?.build();
    Ok(ElementBuilder::new("div")?
        .class("form-section")
        .child(ElementBuilder::new("p")?.class("form-section-title").text(title).build())?
        .child(grid)?
        .build())
}

/// label + control + span de error
fn field_group(field: BanquetField, control: Element) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", &input_id(field))?
        .text(field_label(field))
        .build();
    let error = ElementBuilder::new("span")?
        .class("field-error")
        .id(&error_id(field))?
        .attr("hidden", "")?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(control)?
        .child(error)?
        .build())
}

fn text_field(form: &SharedForm, field: BanquetField, placeholder: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(&input_id(field))?
        .attr("type", "text")?
        .attr("name", field.name())?
        .attr("placeholder", placeholder)?
        .build();

    let form = form.clone();
    on_input(&input, move |input: HtmlInputElement| {
        let message = form.borrow_mut().edit_field(field, &input.value()).to_string();
        show_field_error(field, &message);
    })?;

    field_group(field, input)
}

fn option(value: &str, label: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("option")?.attr("value", value).map(|b| b.text(label).build())
}

/// <select> con opción placeholder deshabilitada
fn select_element(field: BanquetField, options: &[String]) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?
        .class("form-input")
        .id(&input_id(field))?
        .attr("name", field.name())?
        .build();
    fill_options(&select, field_label(field), options)?;
    Ok(select)
}

fn fill_options(select: &Element, placeholder: &str, options: &[String]) -> Result<(), JsValue> {
    set_inner_html(select, "");
    let first = option("", placeholder)?;
    set_attribute(&first, "disabled", "")?;
    set_attribute(&first, "selected", "")?;
    append_child(select, &first)?;
    for value in options {
        append_child(select, &option(value, value)?)?;
    }
    Ok(())
}

fn select_field(form: &SharedForm, field: BanquetField, options: &[&str]) -> Result<Element, JsValue> {
    let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    let select = select_element(field, &options)?;

    let form = form.clone();
    on_select_change(&select, move |value| {
        let message = form.borrow_mut().edit_field(field, &value).to_string();
        show_field_error(field, &message);
    })?;

    field_group(field, select)
}

fn state_field(form: &SharedForm) -> Result<Element, JsValue> {
    let names: Vec<String> = form.borrow().states().iter().map(|s| s.name.clone()).collect();
    let select = select_element(BanquetField::State, &names)?;

    let form = form.clone();
    on_select_change(&select, move |value| {
        let cities = {
            let mut form = form.borrow_mut();
            form.select_state(&value);
            form.cities().to_vec()
        };
        show_field_error(BanquetField::State, "");
        if let Some(city_select) = get_element_by_id(&input_id(BanquetField::City)) {
            let result = fill_options(&city_select, field_label(BanquetField::City), &cities)
                .and_then(|_| toggle_attribute(&city_select, "disabled", value.is_empty()));
            if let Err(e) = result {
                log::error!("❌ [BANQUET] Error recargando ciudades: {:?}", e);
            }
        }
    })?;

    field_group(BanquetField::State, select)
}

fn city_field(form: &SharedForm) -> Result<Element, JsValue> {
    let select = select_element(BanquetField::City, &[])?;
    toggle_attribute(&select, "disabled", !form.borrow().is_city_enabled())?;

    let form = form.clone();
    on_select_change(&select, move |value| {
        let message = form.borrow_mut().edit_field(BanquetField::City, &value).to_string();
        show_field_error(BanquetField::City, &message);
    })?;

    field_group(BanquetField::City, select)
}

fn photo_field(
    form: &SharedForm,
    previews: &SharedPreviews,
    guard: &MountGuard,
    field: BanquetField,
) -> Result<Element, JsValue> {
    let multiple = field == BanquetField::AdditionalPhotos;
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .id(&input_id(field))?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .attr("name", field.name())?
        .build();
    toggle_attribute(&input, "multiple", multiple)?;

    let preview_id = if multiple { ADDITIONAL_PREVIEW_ID } else { COVER_PREVIEW_ID };
    let preview_box = ElementBuilder::new("div")?.class("photo-previews").id(preview_id)?.build();

    {
        let form = form.clone();
        let previews = previews.clone();
        let guard = guard.clone();
        on_file_change(&input, move |input: HtmlInputElement| {
            let form = form.clone();
            let previews = previews.clone();
            let guard = guard.clone();
            // El turno se toma antes de leer: fija el orden de aplicación
            let ticket = if multiple {
                form.borrow_mut().reserve_additional_read()
            } else {
                form.borrow_mut().reserve_cover_read()
            };
            spawn_local(async move {
                let attachments = read_selected_files(&input).await;
                // Permite volver a elegir el mismo fichero
                input.set_value("");
                if !guard.is_mounted() {
                    return;
                }
                if multiple {
                    let added = form.borrow_mut().complete_additional_read(ticket, attachments);
                    let urls: Vec<String> = form.borrow().draft().additional_photos[added]
                        .iter()
                        .map(|a| create_preview_url(a).unwrap_or_default())
                        .collect();
                    previews.borrow_mut().additional.extend(urls);
                } else {
                    let cover = attachments.into_iter().next();
                    if !form.borrow_mut().complete_cover_read(ticket, cover) {
                        return;
                    }
                    let url = form.borrow().draft().cover_photo.as_ref().and_then(create_preview_url);
                    previews.borrow_mut().replace_cover(url);
                }
                if let Err(e) = render_previews(&form, &previews) {
                    log::error!("❌ [BANQUET] Error pintando previsualizaciones: {:?}", e);
                }
            });
        })?;
    }

    let group = field_group(field, input)?;
    append_child(&group, &preview_box)?;
    Ok(group)
}

/// Repintar ambas zonas de previsualización desde el estado
fn render_previews(form: &SharedForm, previews: &SharedPreviews) -> Result<(), JsValue> {
    if let Some(cover_box) = get_element_by_id(COVER_PREVIEW_ID) {
        set_inner_html(&cover_box, "");
        let cover_url = previews.borrow().cover.clone();
        if let Some(url) = cover_url.filter(|_| form.borrow().draft().cover_photo.is_some()) {
            let tile = preview_tile(&url, "Cover Preview")?;
            {
                let form = form.clone();
                let previews = previews.clone();
                attach_remove(&tile, move || {
                    form.borrow_mut().remove_cover_photo();
                    previews.borrow_mut().replace_cover(None);
                    if let Err(e) = render_previews(&form, &previews) {
                        log::error!("❌ [BANQUET] {:?}", e);
                    }
                })?;
            }
            append_child(&cover_box, &tile)?;
        }
    }

    if let Some(additional_box) = get_element_by_id(ADDITIONAL_PREVIEW_ID) {
        set_inner_html(&additional_box, "");
        let urls = previews.borrow().additional.clone();
        for (index, url) in urls.iter().enumerate() {
            let tile = preview_tile(url, &format!("Additional Preview {}", index + 1))?;
            {
                let form = form.clone();
                let previews = previews.clone();
                attach_remove(&tile, move || {
                    form.borrow_mut().remove_additional_photo(index);
                    previews.borrow_mut().remove_additional(index);
                    if let Err(e) = render_previews(&form, &previews) {
                        log::error!("❌ [BANQUET] {:?}", e);
                    }
                })?;
            }
            append_child(&additional_box, &tile)?;
        }
    }
    Ok(())
}

fn preview_tile(url: &str, alt: &str) -> Result<Element, JsValue> {
    let img = ElementBuilder::new("img")?
        .class("photo-preview-img")
        .attr("src", url)?
        .attr("alt", alt)?
        .build();
    let remove = ElementBuilder::new("button")?
        .class("photo-remove")
        .attr("type", "button")?
        .attr("aria-label", "Remove photo")?
        .text("✕")
        .build();
    ElementBuilder::new("div")?
        .class("photo-preview")
        .child(img)?
        .child(remove)
        .map(|b| b.build())
}

/// Enganchar el botón de quitar de una tesela
fn attach_remove<F>(tile: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let button = tile
        .query_selector(".photo-remove")?
        .ok_or_else(|| JsValue::from_str("Preview tile without remove button"))?;
    on_click(&button, move |e| {
        e.prevent_default();
        handler();
    })
}
