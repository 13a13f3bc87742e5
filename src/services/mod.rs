pub mod api_client;
pub mod geography;

pub use api_client::{ApiClient, VendorApi};
