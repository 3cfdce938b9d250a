use crate::core::{Category, Lang};
use crate::response::Response;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    Answered(u8),
    NotAnswered,
}

impl AnswerStatus {
    pub fn label(&self) -> String {
        match self {
            AnswerStatus::Answered(pct) => format!("{pct}%"),
            AnswerStatus::NotAnswered => "Not Answered".to_string(),
        }
    }
}

impl Serialize for AnswerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// One row of the per-question listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub category: Category,
    pub indicator: String,
    pub text: String,
    pub status: AnswerStatus,
}

/// Per-question rows for ESG responses, in response order. Unanswered
/// questions are listed too.
pub fn question_summaries(responses: &[Response], lang: Lang) -> Vec<QuestionSummary> {
    responses
        .iter()
        .filter_map(|response| {
            let category = response.esg_category()?;
            let status = match response.percent() {
                Some(pct) => AnswerStatus::Answered(pct),
                None => AnswerStatus::NotAnswered,
            };
            Some(QuestionSummary {
                category,
                indicator: response.indicator.clone(),
                text: response.text.resolve(lang).to_string(),
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::filter_responses;
    use serde_json::json;

    #[test]
    fn test_lists_answered_and_unanswered() {
        let responses = filter_responses(&[
            json!({"question": {"category": "Environment", "text": {"en": "Energy audit", "ms": "Audit tenaga"}},
                   "answer": {"question_score": 3, "question_max": 4}}),
            json!({"question": {"category": "Social", "text": "Training hours"}}),
            json!({"question": {"category": "Economic", "text": "Revenue"}}),
        ]);

        let rows = question_summaries(&responses, Lang::Ms);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "Audit tenaga");
        assert_eq!(rows[0].status, AnswerStatus::Answered(75));
        assert_eq!(rows[1].status.label(), "Not Answered");
        assert_eq!(rows[1].indicator, "General");
    }
}
