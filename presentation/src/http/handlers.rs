//! Route handlers
//!
//! Each handler extracts the request, delegates to one use case, and
//! shapes the answer. Extractor rejections are turned into the API's own
//! error bodies instead of axum's plain-text defaults.

use super::dto::{
    CategoriesResponse, CreateResponse, DeleteResponse, HealthResponse, PageQuery,
    QuestionListResponse, QuestionsPost, QuestionsPostBody, QuizRequest, QuizResponse,
    SearchResponse,
};
use super::error::{ApiError, ErrorBody};
use super::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;
use trivia_domain::{CategoryId, PageNumber, QuestionId};

type ApiResult<T> = Result<Json<T>, ApiError>;

/// An unreadable query string (e.g. a repeated `page`) means page 1
fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> PageNumber {
    let query = match query {
        Ok(Query(query)) => query,
        Err(e) => {
            debug!("Ignoring query string: {}", e.body_text());
            PageQuery::default()
        }
    };
    PageNumber::from_query(query.page.as_deref())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { success: true })
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state.list_categories.execute().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<QuestionListResponse> {
    let listing = state.list_questions.execute(page_of(query)).await?;
    Ok(Json(listing.into()))
}

pub async fn list_category_questions(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<QuestionListResponse> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    let listing = state
        .list_questions
        .execute_for_category(CategoryId(id), page_of(query))
        .await?;
    Ok(Json(listing.into()))
}

pub async fn delete_question(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<DeleteResponse> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    let output = state
        .delete_question
        .execute(QuestionId(id), page_of(query))
        .await?;
    Ok(Json(output.into()))
}

/// `POST /api/questions`: search when the body has `searchTerm`, else create
pub async fn post_questions(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;

    match body.into_request() {
        QuestionsPost::Search(term) => {
            debug!("Searching questions for {:?}", term);
            let questions = state.search_questions.execute(&term).await?;
            Ok(Json(SearchResponse {
                success: true,
                questions,
            })
            .into_response())
        }
        QuestionsPost::Create(input) => {
            let output = state.create_question.execute(input, page_of(query)).await?;
            Ok(Json(CreateResponse::from(output)).into_response())
        }
    }
}

pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let quiz = request.into_state()?;
    let outcome = state.play_quiz.execute(&quiz).await?;
    Ok(Json(QuizResponse {
        success: true,
        question: outcome.into_question(),
    }))
}

/// Anything that matches no route
pub async fn not_found() -> ApiError {
    ApiError::not_found("no such route")
}

/// A known route hit with a method it does not serve
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::method_not_allowed()),
    )
        .into_response()
}
