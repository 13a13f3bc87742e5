pub mod app;
pub mod home;
pub mod login;
pub mod add_banquet;
pub mod product_details;

pub use app::render_app;
pub use home::{render_home, render_not_found};
pub use login::render_login;
pub use add_banquet::render_add_banquet;
pub use product_details::render_product_details;
