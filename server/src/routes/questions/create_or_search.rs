use actix_web::{
    web::{block, Data, Json, Query},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{NewQuestion, Question, QuestionDetails},
    PgPool,
};
use errors::Error;

use crate::handlers::{paginate_questions, PageQuery};

/// Body of `POST /api/questions`. A non-empty `searchTerm` turns the request
/// into a search; otherwise all four creation fields must be present.
#[derive(Clone, Deserialize, Serialize)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDetails>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub new_question_id: i32,
}

pub async fn create_or_search(
    pool: Data<PgPool>,
    query: Query<PageQuery>,
    params: Json<QuestionPayload>,
) -> Result<HttpResponse, Error> {
    let payload = params.into_inner();

    match payload.search_term {
        Some(ref term) if !term.is_empty() => search(&pool, term.clone(), query.page()).await,
        _ => create(&pool, payload).await,
    }
}

async fn search(pool: &Data<PgPool>, term: String, page: i64) -> Result<HttpResponse, Error> {
    let conn = get_conn(pool)?;

    let res = block(move || Question::search(&conn, &term)).await?;
    let questions = res?;

    Ok(HttpResponse::Ok().json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions: paginate_questions(&questions, page),
        current_category: None,
    }))
}

async fn create(pool: &Data<PgPool>, payload: QuestionPayload) -> Result<HttpResponse, Error> {
    let question = payload.question.filter(|question| !question.is_empty());
    let answer = payload.answer.filter(|answer| !answer.is_empty());
    let difficulty = payload.difficulty.filter(|difficulty| *difficulty != 0);
    let category = payload.category.filter(|category| *category != 0);

    let new_question = match (question, answer, difficulty, category) {
        (Some(question), Some(answer), Some(difficulty), Some(category)) => NewQuestion {
            question,
            answer,
            category,
            difficulty,
        },
        _ => {
            return Err(Error::UnprocessableEntity(
                "question, answer, difficulty and category are required".to_string(),
            ));
        }
    };

    let conn = get_conn(pool)?;
    let res = block(move || Question::create(&conn, new_question)).await?;
    let question = res?;

    Ok(HttpResponse::Ok().json(CreateQuestionResponse {
        success: true,
        new_question_id: question.id,
    }))
}
