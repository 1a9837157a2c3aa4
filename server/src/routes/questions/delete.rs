use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Deserialize, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted_question_id: i32,
}

pub async fn delete(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, Error> {
    let question_id = question_id.into_inner();
    let conn = get_conn(&pool)?;

    let res: Result<i32, Error> = block(move || {
        let question = Question::find_by_id(&conn, question_id)?;
        Question::delete_by_id(&conn, question.id)?;

        Ok(question.id)
    })
    .await?;
    let deleted_question_id = res?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted_question_id,
    }))
}

#[cfg(test)]
mod tests {
    use diesel::{self, QueryDsl, RunQueryDsl};

    use db::{
        get_conn,
        models::{NewQuestion, Question},
        new_pool,
        schema::questions,
    };
    use errors::ErrorResponse;

    use super::DeleteQuestionResponse;
    use crate::tests::helpers::tests::test_delete;

    #[actix_rt::test]
    async fn test_delete_question_then_not_found_on_repeat() {
        let pool = new_pool();
        let conn = get_conn(&pool).unwrap();

        let question: Question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question: "Scheduled for removal?".to_string(),
                answer: "Yes".to_string(),
                category: 1,
                difficulty: 1,
            })
            .get_result(&conn)
            .unwrap();

        let res: (u16, DeleteQuestionResponse) =
            test_delete(&format!("/api/questions/{}", question.id)).await;

        assert_eq!(res.0, 200);
        assert!(res.1.success);
        assert_eq!(res.1.deleted_question_id, question.id);

        let remaining: i64 = questions::table
            .find(question.id)
            .count()
            .get_result(&conn)
            .unwrap();
        assert_eq!(remaining, 0);

        let res: (u16, ErrorResponse) =
            test_delete(&format!("/api/questions/{}", question.id)).await;

        assert_eq!(res.0, 404);
        assert_eq!(res.1.message, "Resource Not Found");
    }

    #[actix_rt::test]
    async fn test_delete_unknown_question() {
        let res: (u16, ErrorResponse) = test_delete("/api/questions/1000000").await;

        assert_eq!(res.0, 404);
    }

    #[actix_rt::test]
    async fn test_delete_on_collection_is_method_not_allowed() {
        let res: (u16, ErrorResponse) = test_delete("/api/questions").await;

        assert_eq!(res.0, 405);
        assert_eq!(res.1.message, "Method Not Allowed");
    }
}
