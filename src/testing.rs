// Dobles de prueba compartidos por los tests de view models

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::session::fake_token;
use crate::models::{
    AddBanquetResponse, Attachment, BanquetDraft, BanquetPayload, GetBanquetResponse, LoginResponse,
};
use crate::services::VendorApi;
use crate::state::SessionState;
use crate::utils::storage::MemoryTokenStore;

/// Vendor API en memoria que registra cada llamada
pub struct MockVendorApi {
    pub login_calls: RefCell<Vec<(String, String)>>,
    pub get_calls: RefCell<Vec<(String, String, String)>>,
    pub add_calls: RefCell<Vec<(String, String, BanquetPayload)>>,
    pub login_response: RefCell<Result<LoginResponse, String>>,
    pub get_response: RefCell<Result<GetBanquetResponse, String>>,
    pub add_response: RefCell<Result<AddBanquetResponse, String>>,
}

impl MockVendorApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            login_calls: RefCell::new(Vec::new()),
            get_calls: RefCell::new(Vec::new()),
            add_calls: RefCell::new(Vec::new()),
            login_response: RefCell::new(Err("login not scripted".to_string())),
            get_response: RefCell::new(Err("get not scripted".to_string())),
            add_response: RefCell::new(Ok(AddBanquetResponse {
                success: true,
                message: Some("Banquet added successfully".to_string()),
            })),
        })
    }

    pub fn request_count(&self) -> usize {
        self.login_calls.borrow().len() + self.get_calls.borrow().len() + self.add_calls.borrow().len()
    }
}

impl VendorApi for MockVendorApi {
    async fn login(&self, mobile_number: &str, password: &str) -> Result<LoginResponse, String> {
        self.login_calls
            .borrow_mut()
            .push((mobile_number.to_string(), password.to_string()));
        self.login_response.borrow().clone()
    }

    async fn get_banquet(
        &self,
        vendor_id: &str,
        banquet_id: &str,
        token: &str,
    ) -> Result<GetBanquetResponse, String> {
        self.get_calls
            .borrow_mut()
            .push((vendor_id.to_string(), banquet_id.to_string(), token.to_string()));
        self.get_response.borrow().clone()
    }

    async fn add_banquet(
        &self,
        vendor_id: &str,
        token: &str,
        payload: &BanquetPayload,
    ) -> Result<AddBanquetResponse, String> {
        self.add_calls
            .borrow_mut()
            .push((vendor_id.to_string(), token.to_string(), payload.clone()));
        self.add_response.borrow().clone()
    }
}

/// Sesión autenticada del vendedor `vendor_id`
pub fn signed_in_session(vendor_id: &str) -> (SessionState, String) {
    let token = fake_token(&format!(r#"{{"_id":"{}"}}"#, vendor_id));
    let store = MemoryTokenStore::with_token(&token);
    (SessionState::restore(Rc::new(store), 0), token)
}

pub fn photo(name: &str) -> Attachment {
    Attachment::new(name, "image/jpeg", name.as_bytes().to_vec())
}

/// Borrador completo y válido
pub fn complete_draft() -> BanquetDraft {
    BanquetDraft {
        property_name: "Royal Palace".to_string(),
        parking_capacity: "120".to_string(),
        catering_policy: "Inside Catering".to_string(),
        decor_policy: "Outside Decoration".to_string(),
        dj_policy: "Inside DJ".to_string(),
        banquet_type: "Indoor".to_string(),
        fixed_capacity: "300".to_string(),
        max_capacity: "500".to_string(),
        price_per_room: "4500".to_string(),
        space: "12000".to_string(),
        veg_price: "900".to_string(),
        nonveg_price: "1100".to_string(),
        state: "Maharashtra".to_string(),
        city: "Pune".to_string(),
        pincode: "411001".to_string(),
        address: "12 MG Road".to_string(),
        cover_photo: Some(photo("cover.jpg")),
        additional_photos: vec![photo("a.jpg"), photo("b.jpg")],
    }
}
