use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decoded output of the generation service.
///
/// `questions` and `types` are parallel; `answers` is only present for
/// graded quizzes and may be shorter than `questions`. Individual entries of
/// any JSON shape are accepted here and judged per item by the form builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionSet {
    #[serde(default, deserialize_with = "lenient_titles")]
    pub questions: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerSpec>>,
}

impl QuestionSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn type_at(&self, index: usize) -> Option<&TypeTag> {
        self.types.get(index)
    }

    /// Missing trailing answers read as `Absent`.
    pub fn answer_at(&self, index: usize) -> &AnswerSpec {
        self.answers
            .as_ref()
            .and_then(|answers| answers.get(index))
            .unwrap_or(&AnswerSpec::Absent)
    }
}

/// Question type codes understood by the generation contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    ShortAnswer,
    LongAnswer,
    SingleChoice,
    MultiChoice,
    Dropdown,
    LinearScale,
    Rating,
    Date,
    Time,
    Unknown(String),
}

impl TypeTag {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SA" => TypeTag::ShortAnswer,
            "LA" => TypeTag::LongAnswer,
            "MC" => TypeTag::SingleChoice,
            "CB" => TypeTag::MultiChoice,
            "DD" => TypeTag::Dropdown,
            "LS" => TypeTag::LinearScale,
            "RT" => TypeTag::Rating,
            "DT" => TypeTag::Date,
            "TT" => TypeTag::Time,
            _ => TypeTag::Unknown(code.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            TypeTag::ShortAnswer => "SA",
            TypeTag::LongAnswer => "LA",
            TypeTag::SingleChoice => "MC",
            TypeTag::MultiChoice => "CB",
            TypeTag::Dropdown => "DD",
            TypeTag::LinearScale => "LS",
            TypeTag::Rating => "RT",
            TypeTag::Date => "DT",
            TypeTag::Time => "TT",
            TypeTag::Unknown(code) => code,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            TypeTag::SingleChoice | TypeTag::MultiChoice | TypeTag::Dropdown
        )
    }

    /// Types the generator may emit but the form builder cannot render.
    pub fn is_recognized_unsupported(&self) -> bool {
        matches!(
            self,
            TypeTag::LinearScale | TypeTag::Rating | TypeTag::Date | TypeTag::Time
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(code) => TypeTag::from_code(&code),
            other => TypeTag::Unknown(other.to_string()),
        })
    }
}

impl Serialize for TypeTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

/// What is known about a question's correct answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerSpec {
    Absent,
    PlainText(String),
    ChoiceMapping {
        correct: CorrectValue,
        choices: Vec<String>,
    },
    /// Any shape the generator produced that fits none of the above.
    Malformed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorrectValue {
    /// Possibly comma-delimited, e.g. `"Paris, Lyon"`. JSON mapping keys
    /// always decode to this form.
    Delimited(String),
    /// Already split; for callers building a question set in code.
    List(Vec<String>),
}

impl CorrectValue {
    pub fn values(&self) -> Vec<String> {
        match self {
            CorrectValue::Delimited(raw) => raw.split(',').map(|v| v.trim().to_string()).collect(),
            CorrectValue::List(values) => values.clone(),
        }
    }
}

impl AnswerSpec {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => AnswerSpec::Absent,
            Value::String(text) => AnswerSpec::PlainText(text),
            Value::Number(number) => AnswerSpec::PlainText(number.to_string()),
            Value::Object(map) => {
                if map.len() != 1 {
                    return AnswerSpec::Malformed(format!(
                        "expected a single-key mapping, got {} keys",
                        map.len()
                    ));
                }
                let Some((correct, choices)) = map.into_iter().next() else {
                    return AnswerSpec::Malformed("empty mapping".to_string());
                };
                match string_list(choices) {
                    Some(choices) => AnswerSpec::ChoiceMapping {
                        correct: CorrectValue::Delimited(correct),
                        choices,
                    },
                    None => AnswerSpec::Malformed(format!(
                        "choices for '{}' are not a list of strings",
                        correct
                    )),
                }
            }
            Value::Array(_) => AnswerSpec::Malformed("bare list".to_string()),
            Value::Bool(flag) => AnswerSpec::Malformed(format!("boolean {}", flag)),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            AnswerSpec::Absent => "absent",
            AnswerSpec::PlainText(_) => "plain text",
            AnswerSpec::ChoiceMapping { .. } => "choice mapping",
            AnswerSpec::Malformed(_) => "malformed",
        }
    }
}

/// Numbers and booleans become their text; anything else becomes an empty
/// title, which the form builder skips.
fn lenient_titles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let titles = Vec::<Value>::deserialize(deserializer)?;
    Ok(titles
        .into_iter()
        .map(|title| match title {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            _ => String::new(),
        })
        .collect())
}

fn string_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for AnswerSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(AnswerSpec::from_value(value))
    }
}

impl Serialize for AnswerSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            AnswerSpec::Absent | AnswerSpec::Malformed(_) => serializer.serialize_none(),
            AnswerSpec::PlainText(text) => serializer.serialize_str(text),
            AnswerSpec::ChoiceMapping { correct, choices } => {
                let key = match correct {
                    CorrectValue::Delimited(raw) => raw.clone(),
                    CorrectValue::List(values) => values.join(", "),
                };
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&key, choices)?;
                map.end()
            }
        }
    }
}
