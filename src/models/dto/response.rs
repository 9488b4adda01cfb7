use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::form_link;
use crate::services::form_assembly_service::AssemblyReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Complete,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFormResponse {
    pub questions: Vec<String>,
    pub form_id: String,
    pub form_url: String,
    pub responder_url: String,
    pub status: SubmissionStatus,
    pub item_count: usize,
    pub skipped_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl GenerateFormResponse {
    pub fn from_report(questions: Vec<String>, report: AssemblyReport) -> Self {
        let status = if report.is_complete() {
            SubmissionStatus::Complete
        } else {
            SubmissionStatus::Degraded
        };
        let warnings = report
            .degradations
            .iter()
            .map(ToString::to_string)
            .chain(report.skipped.iter().map(ToString::to_string))
            .collect();

        GenerateFormResponse {
            questions,
            form_url: form_link::edit_url(&report.form_id),
            responder_url: form_link::responder_url(&report.form_id),
            form_id: report.form_id,
            status,
            item_count: report.item_count,
            skipped_count: report.skipped.len(),
            warnings,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
