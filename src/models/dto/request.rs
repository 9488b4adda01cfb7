use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_AMOUNT: u32 = 5;
pub const DEFAULT_DIFFICULTY: &str = "medium";
pub const DEFAULT_TOPIC: &str = "General Knowledge";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_QUESTION_TYPE: &str = "ai-choice";

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFormRequestDto {
    #[serde(default = "default_amount")]
    #[validate(range(min = 1, max = 50))]
    pub amount: u32,

    #[serde(default = "default_difficulty")]
    #[validate(length(min = 1, max = 50))]
    pub difficulty: String,

    #[serde(default = "default_topic")]
    #[validate(length(min = 1, max = 500))]
    pub topic: String,

    #[serde(default = "default_language")]
    #[validate(length(min = 1, max = 50))]
    pub language: String,

    #[serde(default = "default_question_type")]
    #[validate(length(min = 1, max = 50))]
    pub question_type: String,

    #[serde(default = "default_true")]
    pub is_quiz: bool,

    #[serde(default = "default_true")]
    pub shuffle: bool,
}

impl Default for GenerateFormRequestDto {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            difficulty: default_difficulty(),
            topic: default_topic(),
            language: default_language(),
            question_type: default_question_type(),
            is_quiz: true,
            shuffle: true,
        }
    }
}

/// Parameters forwarded to the generation service. The form builder never
/// reads these; they only shape the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub amount: u32,
    pub difficulty: String,
    pub topic: String,
    pub language: String,
    pub question_type: String,
    pub is_quiz: bool,
}

impl From<&GenerateFormRequestDto> for GenerationRequest {
    fn from(dto: &GenerateFormRequestDto) -> Self {
        GenerationRequest {
            amount: dto.amount,
            difficulty: dto.difficulty.trim().to_string(),
            topic: dto.topic.trim().to_string(),
            language: dto.language.trim().to_string(),
            question_type: dto.question_type.trim().to_string(),
            is_quiz: dto.is_quiz,
        }
    }
}

fn default_amount() -> u32 {
    DEFAULT_AMOUNT
}

fn default_difficulty() -> String {
    DEFAULT_DIFFICULTY.to_string()
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_question_type() -> String {
    DEFAULT_QUESTION_TYPE.to_string()
}

fn default_true() -> bool {
    true
}
