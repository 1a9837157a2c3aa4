use actix_web::{
    web::{block, Data, Json},
    Result,
};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Question, QuestionDetails},
    PgPool,
};
use errors::Error;

#[derive(Clone, Deserialize, Serialize)]
pub struct QuizCategory {
    pub id: i32,
}

/// Category id 0 means "draw from every category".
#[derive(Clone, Deserialize, Serialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    pub previous_questions: Vec<i32>,
}

#[derive(Deserialize, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionDetails>,
}

pub async fn next_question(
    pool: Data<PgPool>,
    params: Json<QuizRequest>,
) -> Result<Json<QuizResponse>, Error> {
    let QuizRequest {
        quiz_category,
        previous_questions,
    } = params.into_inner();

    let conn = get_conn(&pool)?;
    let res = block(move || {
        if quiz_category.id == 0 {
            Question::get_all(&conn)
        } else {
            Question::get_by_category(&conn, quiz_category.id)
        }
    })
    .await?;
    let questions = res?;

    if questions.is_empty() {
        return Err(Error::NotFound("No questions to quiz on".to_string()));
    }

    let remaining: Vec<QuestionDetails> = questions
        .into_iter()
        .filter(|question| !previous_questions.contains(&question.id))
        .collect();

    // An exhausted pool is the end of the quiz, not an error.
    Ok(Json(QuizResponse {
        success: true,
        question: remaining.choose(&mut thread_rng()).cloned(),
    }))
}
