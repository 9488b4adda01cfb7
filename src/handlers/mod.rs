pub mod form_handler;

pub use form_handler::{configure, generate_form, health_check};
