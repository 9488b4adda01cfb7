//! Wire types for the Google Forms REST API (v1).
//!
//! Only the subset the form builder emits or reads is modelled.

use serde::{Deserialize, Serialize};

use crate::models::domain::form_plan::{
    ChoiceKind, GradingFeedback, GradingSpec, ItemRequest, QuestionPayload,
};

pub const QUIZ_SETTINGS_MASK: &str = "quizSettings.isQuiz";
pub const REQUIRED_MASK: &str = "questionItem.question.required";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFormRequest {
    pub info: FormInfo,
}

impl CreateFormRequest {
    pub fn titled(title: &str) -> Self {
        Self {
            info: FormInfo {
                title: title.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFormResponse {
    pub form_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateFormRequest {
    pub requests: Vec<FormRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormRequest {
    UpdateSettings(UpdateSettingsRequest),
    CreateItem(CreateItemRequest),
    UpdateItem(UpdateItemRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub settings: FormSettings,
    pub update_mask: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub quiz_settings: QuizSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub is_quiz: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub item: Item,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub item: Item,
    pub location: Location,
    pub update_mask: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub question_item: QuestionItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question: Question,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading: Option<Grading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_question: Option<ChoiceQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_question: Option<TextQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    #[serde(rename = "type")]
    pub choice_type: ChoiceType,
    pub options: Vec<ChoiceOption>,
    pub shuffle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoiceType {
    Radio,
    Checkbox,
    DropDown,
}

impl From<ChoiceKind> for ChoiceType {
    fn from(kind: ChoiceKind) -> Self {
        match kind {
            ChoiceKind::Radio => ChoiceType::Radio,
            ChoiceKind::Checkbox => ChoiceType::Checkbox,
            ChoiceKind::DropDown => ChoiceType::DropDown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQuestion {
    pub paragraph: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grading {
    pub point_value: u32,
    pub correct_answers: CorrectAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_right: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when_wrong: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_feedback: Option<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectAnswers {
    pub answers: Vec<CorrectAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectAnswer {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchUpdateFormResponse {
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl BatchUpdateFormResponse {
    /// Item ids acknowledged by `createItem` replies, paired with the reply position.
    pub fn created_item_ids(&self) -> Vec<(usize, String)> {
        self.replies
            .iter()
            .enumerate()
            .filter_map(|(position, reply)| {
                reply
                    .create_item
                    .as_ref()
                    .and_then(|created| created.item_id.clone())
                    .map(|item_id| (position, item_id))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_item: Option<CreateItemResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub question_id: Vec<String>,
}

impl FormRequest {
    pub fn enable_quiz() -> Self {
        FormRequest::UpdateSettings(UpdateSettingsRequest {
            settings: FormSettings {
                quiz_settings: QuizSettings { is_quiz: true },
            },
            update_mask: QUIZ_SETTINGS_MASK.to_string(),
        })
    }

    pub fn mark_required(item_id: String, index: usize) -> Self {
        FormRequest::UpdateItem(UpdateItemRequest {
            item: Item {
                item_id: Some(item_id),
                title: None,
                question_item: QuestionItem {
                    question: Question {
                        required: Some(true),
                        ..Question::default()
                    },
                },
            },
            location: Location { index },
            update_mask: REQUIRED_MASK.to_string(),
        })
    }
}

impl From<&GradingSpec> for Grading {
    fn from(spec: &GradingSpec) -> Self {
        let correct_answers = CorrectAnswers {
            answers: spec
                .correct_answers
                .iter()
                .map(|value| CorrectAnswer {
                    value: value.clone(),
                })
                .collect(),
        };
        let feedback = |text: &String| Some(Feedback { text: text.clone() });

        match &spec.feedback {
            GradingFeedback::RightWrong {
                when_right,
                when_wrong,
            } => Grading {
                point_value: spec.point_value,
                correct_answers,
                when_right: feedback(when_right),
                when_wrong: feedback(when_wrong),
                general_feedback: None,
            },
            GradingFeedback::General(text) => Grading {
                point_value: spec.point_value,
                correct_answers,
                when_right: None,
                when_wrong: None,
                general_feedback: feedback(text),
            },
        }
    }
}

impl From<&ItemRequest> for FormRequest {
    fn from(item: &ItemRequest) -> Self {
        let mut question = Question {
            grading: item.grading.as_ref().map(Grading::from),
            ..Question::default()
        };
        match &item.payload {
            QuestionPayload::Text { paragraph } => {
                question.text_question = Some(TextQuestion {
                    paragraph: *paragraph,
                });
            }
            QuestionPayload::Choice {
                choice_kind,
                options,
                shuffle,
            } => {
                question.choice_question = Some(ChoiceQuestion {
                    choice_type: (*choice_kind).into(),
                    options: options
                        .iter()
                        .map(|value| ChoiceOption {
                            value: value.clone(),
                        })
                        .collect(),
                    shuffle: *shuffle,
                });
            }
        }

        FormRequest::CreateItem(CreateItemRequest {
            item: Item {
                item_id: None,
                title: Some(item.title.clone()),
                question_item: QuestionItem { question },
            },
            location: Location { index: item.index },
        })
    }
}
