pub mod forms_api;
pub mod request;
pub mod response;
