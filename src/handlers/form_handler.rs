use actix_web::{get, post, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use secrecy::SecretString;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::GenerateFormRequestDto, response::HealthResponse},
};

/// Generate questions for a topic and publish them as a new form owned by
/// the bearer token's account.
#[post("/api/generate")]
pub async fn generate_form(
    state: web::Data<AppState>,
    request: web::Json<GenerateFormRequestDto>,
    auth: BearerAuth,
) -> Result<HttpResponse, AppError> {
    let forms = state
        .forms_connector
        .connect(SecretString::from(auth.token().to_string()));

    let response = state
        .form_generation_service
        .generate_form(request.into_inner(), forms.as_ref())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_form).service(health_check);
}
