use once_cell::sync::Lazy;
use regex::Regex;

use crate::{errors::DecodeError, models::domain::QuestionSet};

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[A-Za-z0-9_+\-]*[ \t]*").expect("OPENING_FENCE is a valid regex pattern")
});

const CLOSING_FENCE: &str = "```";

/// Result of decoding generator output. `error` is set whenever
/// `question_set` is the canonical empty set because of a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub question_set: QuestionSet,
    pub error: Option<DecodeError>,
}

impl Decoded {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Decode raw generator text. Never fails: a parse error yields the empty
/// question set together with the error that caused it.
pub fn decode(raw: &str) -> Decoded {
    match try_decode(raw) {
        Ok(question_set) => Decoded {
            question_set,
            error: None,
        },
        Err(err) => {
            log::warn!("Failed to decode generation response: {}", err);
            Decoded {
                question_set: QuestionSet::empty(),
                error: Some(err),
            }
        }
    }
}

pub fn try_decode(raw: &str) -> Result<QuestionSet, DecodeError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    serde_json::from_str::<QuestionSet>(body).map_err(|e| DecodeError::Malformed(e.to_string()))
}

/// Strip a leading ```` ``` ```` / ```` ```json ```` marker and a trailing
/// ```` ``` ````, trimming whitespace around both.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();

    if let Some(opening) = OPENING_FENCE.find(body) {
        body = body[opening.end()..].trim_start();
    }
    if let Some(stripped) = body.strip_suffix(CLOSING_FENCE) {
        body = stripped.trim_end();
    }

    body
}
