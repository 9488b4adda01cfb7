use serde::Serialize;

pub const POINT_VALUE: u32 = 1;
pub const FEEDBACK_WHEN_RIGHT: &str = "Correct!";
pub const FEEDBACK_WHEN_WRONG: &str = "Wrong answer.";
pub const FEEDBACK_SHORT_ANSWER: &str = "Auto-graded short answer.";

/// Ordered, index-assigned items ready for a single batched create call.
///
/// Indices are handed out by [`FormMutationPlan::push`], so they are always
/// `0..len` with no gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormMutationPlan {
    items: Vec<ItemRequest>,
}

impl FormMutationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: String, payload: QuestionPayload, grading: Option<GradingSpec>) {
        let index = self.items.len();
        self.items.push(ItemRequest {
            index,
            title,
            payload,
            grading,
        });
    }

    pub fn items(&self) -> &[ItemRequest] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemRequest {
    pub index: usize,
    pub title: String,
    pub payload: QuestionPayload,
    pub grading: Option<GradingSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionPayload {
    Text {
        paragraph: bool,
    },
    Choice {
        choice_kind: ChoiceKind,
        options: Vec<String>,
        shuffle: bool,
    },
}

impl QuestionPayload {
    pub fn options(&self) -> &[String] {
        match self {
            QuestionPayload::Choice { options, .. } => options,
            QuestionPayload::Text { .. } => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoiceKind {
    Radio,
    Checkbox,
    DropDown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradingSpec {
    pub point_value: u32,
    pub correct_answers: Vec<String>,
    pub feedback: GradingFeedback,
}

impl GradingSpec {
    pub fn for_choices(correct_answers: Vec<String>) -> Self {
        Self {
            point_value: POINT_VALUE,
            correct_answers,
            feedback: GradingFeedback::RightWrong {
                when_right: FEEDBACK_WHEN_RIGHT.to_string(),
                when_wrong: FEEDBACK_WHEN_WRONG.to_string(),
            },
        }
    }

    pub fn for_short_answer(answer: String) -> Self {
        Self {
            point_value: POINT_VALUE,
            correct_answers: vec![answer],
            feedback: GradingFeedback::General(FEEDBACK_SHORT_ANSWER.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingFeedback {
    RightWrong { when_right: String, when_wrong: String },
    General(String),
}
