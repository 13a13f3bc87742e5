pub mod auth;
pub mod banquet;
pub mod location;
pub mod session;

pub use auth::{LoginErrors, LoginRequest, LoginResponse};
pub use banquet::{AddBanquetResponse, Attachment, Banquet, BanquetDraft, BanquetField, BanquetPayload, GetBanquetResponse};
pub use location::{CountryDataset, LocationOption, StateRecord};
pub use session::Session;
