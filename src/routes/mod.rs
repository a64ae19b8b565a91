// Route exports
pub mod pages;
pub mod render;

use actix_web::web;

pub use pages::{handle_form_payload_error, AppState};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure);
}
