//! Question and Choice records
//!
//! `NewQuestion`/`NewChoice` are the inbound shapes accepted by the create
//! operation. `Question`/`Choice` are the persisted rows, each with its
//! store-assigned id.

use serde::{Deserialize, Serialize};

/// A question submitted for creation, with its choices in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub choices: Vec<NewChoice>,
}

impl NewQuestion {
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice (builder style)
    pub fn with_choice(mut self, choice_text: impl Into<String>, is_correct: bool) -> Self {
        self.choices.push(NewChoice {
            choice_text: choice_text.into(),
            is_correct,
        });
        self
    }
}

/// A candidate answer submitted alongside a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewChoice {
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A persisted question row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
}

/// A persisted choice row, linked to its question by `question_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i64,
}

/// A question together with its choices, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionWithChoices {
    #[serde(flatten)]
    pub question: Question,
    pub choices: Vec<Choice>,
}

impl QuestionWithChoices {
    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct_defaults_to_false() {
        let q: NewQuestion = serde_json::from_str(
            r#"{"question_text":"Capital of France?","choices":[{"choice_text":"Paris"}]}"#,
        )
        .unwrap();
        assert_eq!(q.choices.len(), 1);
        assert!(!q.choices[0].is_correct);
    }

    #[test]
    fn test_missing_question_text_is_rejected() {
        let result = serde_json::from_str::<NewQuestion>(r#"{"choices":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_choices_is_rejected() {
        let result = serde_json::from_str::<NewQuestion>(r#"{"question_text":"?"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let q: NewQuestion = serde_json::from_str(r#"{"question_text":"","choices":[]}"#).unwrap();
        assert!(q.question_text.is_empty());
        assert!(q.choices.is_empty());
    }

    #[test]
    fn test_builder_preserves_order() {
        let q = NewQuestion::new("2+2?")
            .with_choice("4", true)
            .with_choice("5", false);
        assert_eq!(q.choices[0].choice_text, "4");
        assert_eq!(q.choices[1].choice_text, "5");
    }

    #[test]
    fn test_question_with_choices_serializes_flat() {
        let detail = QuestionWithChoices {
            question: Question {
                id: 7,
                question_text: "2+2?".to_string(),
            },
            choices: vec![Choice {
                id: 1,
                choice_text: "4".to_string(),
                is_correct: true,
                question_id: 7,
            }],
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["question_text"], "2+2?");
        assert_eq!(value["choices"][0]["question_id"], 7);
        assert_eq!(detail.correct_choices().count(), 1);
    }
}
