#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        question_set::CorrectValue, AnswerSpec, QuestionSet, TypeTag,
    };

    /// Builds a question set from type codes, the way the decoder would.
    pub fn question_set(
        questions: &[&str],
        types: &[&str],
        answers: Option<Vec<AnswerSpec>>,
    ) -> QuestionSet {
        QuestionSet {
            questions: questions.iter().map(|q| q.to_string()).collect(),
            types: types.iter().map(|t| TypeTag::from_code(t)).collect(),
            answers,
        }
    }

    pub fn choice_mapping(correct: &str, choices: &[&str]) -> AnswerSpec {
        AnswerSpec::ChoiceMapping {
            correct: CorrectValue::Delimited(correct.to_string()),
            choices: choices.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn capital_short_answer() -> QuestionSet {
        question_set(
            &["Capital of France?"],
            &["SA"],
            Some(vec![AnswerSpec::PlainText("Paris".to_string())]),
        )
    }

    pub fn capital_single_choice() -> QuestionSet {
        question_set(
            &["Capital of France?"],
            &["MC"],
            Some(vec![choice_mapping("Paris", &["Paris", "Lyon", "Nice"])]),
        )
    }

    /// Every supported type plus one unsupported and one malformed item.
    pub fn mixed_quiz() -> QuestionSet {
        question_set(
            &[
                "Capital of France?",
                "Rate this quiz",
                "French cities?",
                "Pick a river",
                "Describe Paris",
                "Largest city?",
                "Which is a planet?",
            ],
            &["SA", "RT", "CB", "DD", "LA", "MC", "MC"],
            Some(vec![
                AnswerSpec::PlainText("Paris".to_string()),
                AnswerSpec::Absent,
                choice_mapping("Paris, Lyon, Berlin", &["Paris", "Lyon", "Nice"]),
                choice_mapping("Seine", &["Seine", "Rhine"]),
                AnswerSpec::Absent,
                AnswerSpec::PlainText("Paris".to_string()),
                choice_mapping("Mars", &["Mars", "Moon"]),
            ]),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_capital_short_answer() {
        let set = capital_short_answer();
        assert_eq!(set.len(), 1);
        assert_eq!(set.types.len(), set.questions.len());
    }

    #[test]
    fn test_fixtures_mixed_quiz_is_parallel() {
        let set = mixed_quiz();
        assert_eq!(set.types.len(), set.questions.len());
        assert_eq!(set.answers.as_ref().map(Vec::len), Some(set.len()));
    }
}
