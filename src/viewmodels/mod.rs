pub mod banquet_form_viewmodel;
pub mod login_viewmodel;
pub mod product_details_viewmodel;

pub use banquet_form_viewmodel::{BanquetForm, BanquetFormViewModel, FormPhase, SubmitOutcome};
pub use login_viewmodel::{LoginOutcome, LoginViewModel};
pub use product_details_viewmodel::ProductDetailsViewModel;
