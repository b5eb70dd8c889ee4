mod api;
mod pages;

pub use api::asset_status;
pub use pages::{generate_certificate, index};
