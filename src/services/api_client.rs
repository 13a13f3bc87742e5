// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra la Vendor API
// ============================================================================

use std::rc::Rc;
use gloo_net::http::{Request, Response};
use urlencoding::encode;
use wasm_bindgen::JsValue;
use web_sys::FormData;
use crate::config::CONFIG;
use crate::dom::files::attachment_blob;
use crate::models::{
    AddBanquetResponse, BanquetPayload, GetBanquetResponse, LoginRequest, LoginResponse,
};

/// Operaciones de la Vendor API que consumen los view models
#[allow(async_fn_in_trait)]
pub trait VendorApi {
    /// POST /vendor/login
    async fn login(&self, mobile_number: &str, password: &str) -> Result<LoginResponse, String>;

    /// GET /vendor/get-banquet?vendor_id=..&banquet_id=..
    async fn get_banquet(
        &self,
        vendor_id: &str,
        banquet_id: &str,
        token: &str,
    ) -> Result<GetBanquetResponse, String>;

    /// POST /vendor/add-banquet/{vendor_id} (multipart)
    async fn add_banquet(
        &self,
        vendor_id: &str,
        token: &str,
        payload: &BanquetPayload,
    ) -> Result<AddBanquetResponse, String>;
}

/// Compartir un cliente entre vistas sin clonar su configuración
impl<T: VendorApi> VendorApi for Rc<T> {
    async fn login(&self, mobile_number: &str, password: &str) -> Result<LoginResponse, String> {
        (**self).login(mobile_number, password).await
    }

    async fn get_banquet(
        &self,
        vendor_id: &str,
        banquet_id: &str,
        token: &str,
    ) -> Result<GetBanquetResponse, String> {
        (**self).get_banquet(vendor_id, banquet_id, token).await
    }

    async fn add_banquet(
        &self,
        vendor_id: &str,
        token: &str,
        payload: &BanquetPayload,
    ) -> Result<AddBanquetResponse, String> {
        (**self).add_banquet(vendor_id, token, payload).await
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_base_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/vendor/login", self.base_url)
    }

    /// Los ids llegan de la URL o del token: se codifican siempre
    pub fn get_banquet_url(&self, vendor_id: &str, banquet_id: &str) -> String {
        format!(
            "{}/vendor/get-banquet?vendor_id={}&banquet_id={}",
            self.base_url,
            encode(vendor_id),
            encode(banquet_id)
        )
    }

    pub fn add_banquet_url(&self, vendor_id: &str) -> String {
        format!("{}/vendor/add-banquet/{}", self.base_url, encode(vendor_id))
    }

    /// Leer el cuerpo JSON; el backend responde `{success:false}` también con códigos de error
    async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
        let status = response.status();
        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(e) if response_ok(status) => Err(format!("Parse error: {}", e)),
            Err(_) => Err(format!("HTTP {}: {}", status, response.status_text())),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn response_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Construir el FormData multipart del alta de banquete
fn banquet_form_data(payload: &BanquetPayload) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for (name, value) in &payload.fields {
        form.append_with_str(name, value)?;
    }
    form.append_with_blob_and_filename(
        "cover_photo",
        &attachment_blob(&payload.cover_photo)?,
        &payload.cover_photo.file_name,
    )?;
    for photo in &payload.additional_photos {
        form.append_with_blob_and_filename("additional_photos", &attachment_blob(photo)?, &photo.file_name)?;
    }
    Ok(form)
}

impl VendorApi for ApiClient {
    async fn login(&self, mobile_number: &str, password: &str) -> Result<LoginResponse, String> {
        let request = LoginRequest {
            mobile_number: mobile_number.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Enviando login de vendedor");

        let response = Request::post(&self.login_url())
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::parse_json::<LoginResponse>(response).await
    }

    async fn get_banquet(
        &self,
        vendor_id: &str,
        banquet_id: &str,
        token: &str,
    ) -> Result<GetBanquetResponse, String> {
        log::info!("📋 [API] Obteniendo banquete {} del vendedor {}", banquet_id, vendor_id);

        let response = Request::get(&self.get_banquet_url(vendor_id, banquet_id))
            .header("Content-Type", "application/json")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::parse_json::<GetBanquetResponse>(response).await
    }

    async fn add_banquet(
        &self,
        vendor_id: &str,
        token: &str,
        payload: &BanquetPayload,
    ) -> Result<AddBanquetResponse, String> {
        let total_bytes: usize = payload.cover_photo.size()
            + payload.additional_photos.iter().map(|p| p.size()).sum::<usize>();
        log::info!(
            "🏛️ [API] Creando banquete para vendedor {} ({} fotos adicionales, {} bytes)",
            vendor_id,
            payload.additional_photos.len(),
            total_bytes
        );

        let form = banquet_form_data(payload)
            .map_err(|e| format!("Multipart build error: {:?}", e))?;

        // Sin Content-Type: el navegador añade el boundary del multipart
        let response = Request::post(&self.add_banquet_url(vendor_id))
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        Self::parse_json::<AddBanquetResponse>(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let api = ApiClient::with_base_url("https://api.example.com/api/");
        assert_eq!(api.login_url(), "https://api.example.com/api/vendor/login");
        assert_eq!(
            api.get_banquet_url("v1", "b9"),
            "https://api.example.com/api/vendor/get-banquet?vendor_id=v1&banquet_id=b9"
        );
        assert_eq!(api.add_banquet_url("v1"), "https://api.example.com/api/vendor/add-banquet/v1");
    }

    #[test]
    fn test_ids_with_reserved_characters_stay_in_their_parameter() {
        let api = ApiClient::with_base_url("https://api.example.com/api");
        assert_eq!(
            api.get_banquet_url("v1", "b1&vendor_id=other"),
            "https://api.example.com/api/vendor/get-banquet?vendor_id=v1&banquet_id=b1%26vendor_id%3Dother"
        );
        assert_eq!(
            api.get_banquet_url("v 1", "b%2"),
            "https://api.example.com/api/vendor/get-banquet?vendor_id=v%201&banquet_id=b%252"
        );
        assert_eq!(
            api.add_banquet_url("v1/../admin"),
            "https://api.example.com/api/vendor/add-banquet/v1%2F..%2Fadmin"
        );
    }

    #[test]
    fn test_response_ok_range() {
        assert!(response_ok(200));
        assert!(response_ok(201));
        assert!(!response_ok(400));
        assert!(!response_ok(500));
    }
}
