use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        form_assembly_service::FormAssemblyService,
        form_generation_service::FormGenerationService,
        forms_service::{FormsConnector, GoogleFormsConnector},
        generation_client::{GenerationClient, OpenAiCompatGenerationClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub form_generation_service: Arc<FormGenerationService>,
    pub forms_connector: Arc<dyn FormsConnector>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http = GoogleFormsConnector::build_http_client(config.http_timeout_seconds)?;
        let forms_connector = Arc::new(GoogleFormsConnector::new(http, config.forms_api_base.clone()));
        let generator = Arc::new(OpenAiCompatGenerationClient::new(&config));

        Ok(Self::with_services(config, generator, forms_connector))
    }

    /// Wire the state from explicit collaborators.
    pub fn with_services(
        config: Config,
        generator: Arc<dyn GenerationClient>,
        forms_connector: Arc<dyn FormsConnector>,
    ) -> Self {
        let assembler = FormAssemblyService::new(config.form_title.clone());
        let form_generation_service = Arc::new(FormGenerationService::new(generator, assembler));

        Self {
            form_generation_service,
            forms_connector,
            config: Arc::new(config),
        }
    }
}
