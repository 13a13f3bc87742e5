// ============================================================================
// FILES - Lectura de ficheros elegidos y URLs de previsualización
// ============================================================================

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlInputElement, Url};
use crate::models::Attachment;

/// Blob con el contenido de un adjunto
pub fn attachment_blob(attachment: &Attachment) -> Result<Blob, JsValue> {
    let bytes = Uint8Array::from(attachment.bytes.as_slice());
    let parts = Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&attachment.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Leer un File del navegador a memoria
pub async fn read_attachment(file: File) -> Result<Attachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Error leyendo {}: {:?}", file.name(), e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(Attachment::new(file.name(), file.type_(), bytes))
}

/// Leer todos los ficheros elegidos en un input, en orden.
/// Los que fallan se registran y se omiten.
pub async fn read_selected_files(input: &HtmlInputElement) -> Vec<Attachment> {
    let mut attachments = Vec::new();
    let Some(files) = input.files() else {
        return attachments;
    };
    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            match read_attachment(file).await {
                Ok(attachment) => attachments.push(attachment),
                Err(e) => log::error!("❌ [FILES] {}", e),
            }
        }
    }
    attachments
}

/// URL de objeto para previsualizar un adjunto
pub fn create_preview_url(attachment: &Attachment) -> Option<String> {
    let blob = attachment_blob(attachment).ok()?;
    Url::create_object_url_with_blob(&blob).ok()
}

pub fn revoke_preview_url(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        log::warn!("⚠️ [FILES] No se pudo liberar {}: {:?}", url, e);
    }
}
