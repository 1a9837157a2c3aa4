use std::collections::BTreeMap;

use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Category, Question, QuestionDetails},
    PgPool,
};
use errors::Error;

use crate::handlers::{paginate_questions, PageQuery};

#[derive(Deserialize, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDetails>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<String>,
}

pub async fn get_all(
    pool: Data<PgPool>,
    query: Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, Error> {
    let conn = get_conn(&pool)?;

    let res: Result<(Vec<QuestionDetails>, Vec<Category>), Error> = block(move || {
        let questions = Question::get_all(&conn)?;
        let categories = Category::get_all(&conn)?;

        Ok((questions, categories))
    })
    .await?;
    let (questions, categories) = res?;

    let page = paginate_questions(&questions, query.page());
    let categories: BTreeMap<i32, String> =
        categories.into_iter().map(|c| (c.id, c.type_)).collect();

    if page.is_empty() || categories.is_empty() {
        return Err(Error::NotFound(format!(
            "No questions on page {}",
            query.page()
        )));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions: page,
        categories,
        current_category: None,
    }))
}
