use actix_web::{
    web::{block, Data, Json, Path, Query},
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
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDetails>,
    pub total_questions: usize,
    pub current_category: String,
}

pub async fn get_questions(
    pool: Data<PgPool>,
    category_id: Path<i32>,
    query: Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, Error> {
    let category_id = category_id.into_inner();
    let conn = get_conn(&pool)?;

    let res: Result<(Category, Vec<QuestionDetails>), Error> = block(move || {
        let category = Category::find_by_id(&conn, category_id)?;
        let questions = Question::get_by_category(&conn, category_id)?;

        Ok((category, questions))
    })
    .await?;
    let (category, questions) = res?;

    if questions.is_empty() {
        return Err(Error::NotFound(format!(
            "No questions in category {}",
            category_id
        )));
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: paginate_questions(&questions, query.page()),
        current_category: category.type_,
    }))
}
