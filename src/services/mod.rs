pub mod form_assembly_service;
pub mod form_generation_service;
pub mod forms_service;
pub mod generation_client;
pub mod response_decoder;
