use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{
        request::{GenerateFormRequestDto, GenerationRequest},
        response::GenerateFormResponse,
    },
    services::{
        form_assembly_service::{AssemblyOptions, FormAssemblyService},
        forms_service::FormsService,
        generation_client::GenerationClient,
        response_decoder,
    },
};

/// Generation call, decode, then form assembly.
pub struct FormGenerationService {
    generator: Arc<dyn GenerationClient>,
    assembler: FormAssemblyService,
}

impl FormGenerationService {
    pub fn new(generator: Arc<dyn GenerationClient>, assembler: FormAssemblyService) -> Self {
        Self {
            generator,
            assembler,
        }
    }

    pub async fn generate_form(
        &self,
        request: GenerateFormRequestDto,
        forms: &dyn FormsService,
    ) -> AppResult<GenerateFormResponse> {
        request.validate()?;

        let generation_request = GenerationRequest::from(&request);
        let raw = self.generator.generate(&generation_request).await?;

        let decoded = response_decoder::decode(&raw);
        if let Some(err) = &decoded.error {
            log::warn!("Discarding generation output: {}", err);
        }
        let question_set = decoded.question_set;
        if question_set.is_empty() {
            return Err(AppError::GenerationFailed(
                "no questions generated".to_string(),
            ));
        }
        log::info!("Decoded {} generated question(s)", question_set.len());

        let options = AssemblyOptions {
            shuffle: request.shuffle,
            is_quiz: request.is_quiz,
        };
        let report = self
            .assembler
            .build_and_submit(forms, &question_set, options)
            .await?;

        log::info!(
            "Form {} ready with {} item(s), {} skipped",
            report.form_id,
            report.item_count,
            report.skipped.len()
        );

        Ok(GenerateFormResponse::from_report(
            question_set.questions,
            report,
        ))
    }
}
