use serde::{Deserialize, Serialize};

/// One question as returned by the question-list endpoint.
///
/// The browsing engine only interprets `id` (identity for selection) and
/// `solution_html` (presence gates the solution panel); `content` is passed
/// through opaquely to the math-markup renderer. Fields the endpoint sends
/// beyond these are ignored on deserialization. List order is whatever the
/// endpoint returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u64,
    /// Raw question body, possibly containing math markup.
    #[serde(default)]
    pub content: String,
    /// Worked solution as an HTML payload, when the bank has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_html: Option<String>,
}

impl Question {
    pub fn has_solution(&self) -> bool {
        self.solution_html
            .as_deref()
            .is_some_and(|html| !html.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_tolerated() {
        let question: Question = serde_json::from_str(
            r#"{"id": 7, "content": "What is $2^8$?", "marks": 4, "usedCount": 1}"#,
        )
        .expect("deserialize question");
        assert_eq!(question.id, 7);
        assert_eq!(question.content, "What is $2^8$?");
        assert!(question.solution_html.is_none());
    }

    #[test]
    fn blank_solution_counts_as_absent() {
        let question = Question {
            id: 1,
            content: String::new(),
            solution_html: Some("  ".to_string()),
        };
        assert!(!question.has_solution());
    }
}
