//! Request and response bodies
//!
//! Field names here are the wire contract; clients depend on them verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_application::{
    CreateQuestionInput, CreateQuestionOutput, DeleteQuestionOutput, QuestionListing,
    TriviaError,
};
use trivia_domain::{CategoryId, CategoryMap, Question, QuestionId, QuizCategory, QuizState};

/// Read an integer that may arrive as a JSON number or a numeric string.
///
/// Browsers built around form inputs send `"6"` as often as `6`, and some
/// JSON encoders write whole numbers as `3.0`.
pub fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_u32(value: &Value) -> Option<u32> {
    lenient_int(value).and_then(|n| u32::try_from(n).ok())
}

// ==================== Requests ====================

/// `?page=N` query string; left raw so bad values fall back to page 1
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Body of `POST /api/questions`, which either searches or creates
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<Value>,
    pub difficulty: Option<Value>,
}

/// What a `POST /api/questions` body asks for
#[derive(Debug, PartialEq, Eq)]
pub enum QuestionsPost {
    Search(String),
    Create(CreateQuestionInput),
}

impl QuestionsPostBody {
    /// A body carrying `searchTerm` is a search; anything else is a creation.
    ///
    /// Unreadable `category`/`difficulty` values count as missing.
    pub fn into_request(self) -> QuestionsPost {
        if let Some(term) = self.search_term {
            return QuestionsPost::Search(term);
        }
        QuestionsPost::Create(CreateQuestionInput {
            question: self.question,
            answer: self.answer,
            category: self.category.as_ref().and_then(lenient_int),
            difficulty: self.difficulty.as_ref().and_then(lenient_int),
        })
    }
}

/// Only `id` matters; the display name clients echo back is ignored
#[derive(Debug, Deserialize)]
pub struct QuizCategoryBody {
    pub id: Option<Value>,
}

/// Body of `POST /api/quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<Value>>,
    pub quiz_category: Option<QuizCategoryBody>,
}

impl QuizRequest {
    /// Validate and convert into the domain's quiz state.
    ///
    /// Anything missing or malformed is a `BadRequest`.
    pub fn into_state(self) -> Result<QuizState, TriviaError> {
        let category = self
            .quiz_category
            .ok_or_else(|| TriviaError::BadRequest("missing quiz_category".into()))?;
        let raw_id = category
            .id
            .ok_or_else(|| TriviaError::BadRequest("missing quiz_category.id".into()))?;
        let id = lenient_u32(&raw_id).ok_or_else(|| {
            TriviaError::BadRequest(format!("quiz_category.id is not a category id: {raw_id}"))
        })?;

        let previous = self
            .previous_questions
            .ok_or_else(|| TriviaError::BadRequest("missing previous_questions".into()))?;
        let seen = previous
            .iter()
            .map(|v| {
                lenient_u32(v).map(QuestionId).ok_or_else(|| {
                    TriviaError::BadRequest(format!("previous_questions entry is not an id: {v}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QuizState::new(QuizCategory::from_wire(id), seen))
    }
}

// ==================== Responses ====================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Paginated listing; `current_category` is `null` for the unfiltered list
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<CategoryId>,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            total_questions: listing.total_questions(),
            questions: listing.page.items,
            categories: listing.categories,
            current_category: listing.current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<DeleteQuestionOutput> for DeleteResponse {
    fn from(output: DeleteQuestionOutput) -> Self {
        Self {
            success: true,
            deleted: output.deleted,
            total_questions: output.page.total_count,
            questions: output.page.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

impl From<CreateQuestionOutput> for CreateResponse {
    fn from(output: CreateQuestionOutput) -> Self {
        Self {
            success: true,
            created: output.created,
            total_questions: output.page.total_count,
            questions: output.page.items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
}

/// Quiz draw; `question` is absent once the client has seen everything
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quiz(body: Value) -> QuizRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int(&json!(6)), Some(6));
        assert_eq!(lenient_int(&json!("6")), Some(6));
        assert_eq!(lenient_int(&json!(" 4 ")), Some(4));
        assert_eq!(lenient_int(&json!("four")), None);
        assert_eq!(lenient_int(&json!(2.5)), None);
        assert_eq!(lenient_int(&json!(3.0)), Some(3));
        assert_eq!(lenient_int(&json!(1e300)), None);
        assert_eq!(lenient_int(&json!(null)), None);
    }

    #[test]
    fn test_search_term_selects_search() {
        let body: QuestionsPostBody =
            serde_json::from_value(json!({"searchTerm": "title", "question": "ignored"})).unwrap();
        assert_eq!(body.into_request(), QuestionsPost::Search("title".into()));
    }

    #[test]
    fn test_create_coerces_string_numbers() {
        let body: QuestionsPostBody = serde_json::from_value(json!({
            "question": "Who?",
            "answer": "Me",
            "category": "6",
            "difficulty": "4"
        }))
        .unwrap();
        assert_eq!(
            body.into_request(),
            QuestionsPost::Create(CreateQuestionInput::new("Who?", "Me", 6, 4))
        );
    }

    #[test]
    fn test_create_treats_garbage_as_missing() {
        let body: QuestionsPostBody =
            serde_json::from_value(json!({"question": "Q", "answer": "A", "category": []}))
                .unwrap();
        match body.into_request() {
            QuestionsPost::Create(input) => {
                assert_eq!(input.category, None);
                assert_eq!(input.difficulty, None);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn test_quiz_state_from_string_id() {
        let state = quiz(json!({
            "previous_questions": [10],
            "quiz_category": {"type": "Sports", "id": "6"}
        }))
        .into_state()
        .unwrap();
        assert_eq!(state.category, QuizCategory::Only(CategoryId(6)));
        assert!(state.seen_ids.contains(&QuestionId(10)));
    }

    #[test]
    fn test_quiz_accepts_whole_float_ids() {
        let state = quiz(json!({
            "previous_questions": [10.0, 11],
            "quiz_category": {"id": 6.0}
        }))
        .into_state()
        .unwrap();
        assert_eq!(state.category, QuizCategory::Only(CategoryId(6)));
        assert!(state.seen_ids.contains(&QuestionId(10)));
        assert!(state.seen_ids.contains(&QuestionId(11)));
    }

    #[test]
    fn test_quiz_category_zero_means_all() {
        let state = quiz(json!({
            "previous_questions": [],
            "quiz_category": {"type": "click", "id": 0}
        }))
        .into_state()
        .unwrap();
        assert_eq!(state.category, QuizCategory::All);
        assert!(state.seen_ids.is_empty());
    }

    #[test]
    fn test_quiz_missing_parts_are_bad_requests() {
        let cases = [
            json!({"previous_questions": []}),
            json!({"previous_questions": [], "quiz_category": {"type": "Art"}}),
            json!({"quiz_category": {"id": 2}}),
            json!({"previous_questions": ["x"], "quiz_category": {"id": 2}}),
            json!({"previous_questions": [], "quiz_category": {"id": -1}}),
        ];
        for body in cases {
            let err = quiz(body.clone()).into_state().unwrap_err();
            assert_eq!(err.code(), 400, "body {body} should be rejected");
        }
    }

    #[test]
    fn test_exhausted_quiz_omits_question() {
        let body = serde_json::to_value(QuizResponse {
            success: true,
            question: None,
        })
        .unwrap();
        assert_eq!(body, json!({"success": true}));
    }

    #[test]
    fn test_listing_keeps_null_current_category() {
        let body = serde_json::to_value(QuestionListResponse {
            success: true,
            questions: vec![],
            total_questions: 0,
            categories: CategoryMap::new(),
            current_category: None,
        })
        .unwrap();
        assert_eq!(body["current_category"], Value::Null);
        assert!(body.as_object().unwrap().contains_key("current_category"));
    }
}
