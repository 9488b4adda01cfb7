use crate::models::dto::request::GenerationRequest;

pub const SYSTEM_PROMPT: &str = "You write questions for online forms. You reply with a single JSON object and nothing else: no prose, no comments, no markdown code fences.";

const TYPE_CATALOGUE: &str = "Short Answer (SA), Long Answer (LA), Multiple Choice (MC), Checkbox with several correct answers (CB), Dropdown (DD), Linear Scale (LS), Rating (RT), Date (DT), Time (TT)";

/// Question-type preference that lets the generator choose per question.
pub const AI_CHOICE: &str = "ai-choice";

pub fn build_form_prompt(request: &GenerationRequest) -> String {
    let type_rule = if is_ai_choice(&request.question_type) {
        format!(
            "Choose the best type for each question from: {}.",
            TYPE_CATALOGUE
        )
    } else {
        format!(
            "Use the question type \"{}\" for every question. Type codes: {}.",
            request.question_type, TYPE_CATALOGUE
        )
    };

    let answer_rules = if request.is_quiz {
        r#"This form is a graded quiz, so include an "answers" array parallel to "questions".
- For MC, CB and DD questions the answer is an object with exactly one key: the correct answer (several correct answers for CB are joined with commas), mapped to the full ordered list of choices, e.g. {"Paris": ["Paris", "Lyon", "Nice", "Marseille"]}. Every correct answer must appear verbatim in the list of choices.
- Never put more than one key in an answer object. This is invalid: {"Ice Hockey": ["Ice Hockey", "Lacrosse"], "Lacrosse": ["Ice Hockey", "Lacrosse"]}.
- For SA questions the answer is a short string. For LA and other types use null."#
    } else {
        r#"This form is not graded. Only MC, CB and DD questions need an "answers" entry, and only to carry their options: use an object with exactly one key (any one of the options) mapped to the full ordered list of choices. Use null for every other type. If no question is MC, CB or DD, leave out the "answers" key."#
    };

    format!(
        r#"Generate {amount} form questions with difficulty "{difficulty}" about "{topic}", written in {language}.
{type_rule}
A phrase-length reply makes a Short Answer; anything longer is a Long Answer.

Return exactly this JSON shape:
{{
  "questions": ["Question 1", "Question 2"],
  "types": ["MC", "SA"],
  "answers": [{{"Correct": ["Correct", "Wrong 1", "Wrong 2", "Wrong 3"]}}, "Answer 2"]
}}
"questions" and "types" must have the same length.
{answer_rules}"#,
        amount = request.amount,
        difficulty = request.difficulty,
        topic = request.topic,
        language = request.language,
        type_rule = type_rule,
        answer_rules = answer_rules,
    )
}

fn is_ai_choice(question_type: &str) -> bool {
    let normalized = question_type.trim().to_ascii_lowercase().replace('_', "-");
    normalized.is_empty() || normalized == AI_CHOICE
}
