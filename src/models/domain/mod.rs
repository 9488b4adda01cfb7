pub mod form_plan;
pub mod form_link;
pub mod question_set;
pub use form_plan::{FormMutationPlan, GradingSpec, ItemRequest, QuestionPayload};
pub use question_set::{AnswerSpec, QuestionSet, TypeTag};
