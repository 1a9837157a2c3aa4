use chrono::{DateTime, Utc};
use diesel::{
    self, ExpressionMethods, PgConnection, PgTextExpressionMethods, QueryDsl, RunQueryDsl,
};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The wire shape of a question. Timestamps stay in the database.
#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct QuestionDetails {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<QuestionDetails>, Error> {
        use crate::schema::questions::dsl::{
            answer, category, difficulty, id, question, questions as questions_table,
        };

        let results = questions_table
            .select((id, question, answer, category, difficulty))
            .order(id)
            .load::<QuestionDetails>(conn)?;

        Ok(results)
    }

    /// Case-insensitive substring match on the question text.
    pub fn search(conn: &PgConnection, term: &str) -> Result<Vec<QuestionDetails>, Error> {
        use crate::schema::questions::dsl::{
            answer, category, difficulty, id, question, questions as questions_table,
        };

        let results = questions_table
            .filter(question.ilike(format!("%{}%", term)))
            .select((id, question, answer, category, difficulty))
            .order(id)
            .load::<QuestionDetails>(conn)?;

        Ok(results)
    }

    pub fn get_by_category(
        conn: &PgConnection,
        category_id: i32,
    ) -> Result<Vec<QuestionDetails>, Error> {
        use crate::schema::questions::dsl::{
            answer, category, difficulty, id, question, questions as questions_table,
        };

        let results = questions_table
            .filter(category.eq(category_id))
            .select((id, question, answer, category, difficulty))
            .order(id)
            .load::<QuestionDetails>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        use crate::schema::questions::dsl::questions as questions_table;

        let result = questions_table
            .find(question_id)
            .first::<Question>(conn)?;

        Ok(result)
    }

    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    pub fn delete_by_id(conn: &PgConnection, question_id: i32) -> Result<usize, Error> {
        use crate::schema::questions::dsl::questions as questions_table;

        let deleted = diesel::delete(questions_table.find(question_id)).execute(conn)?;

        Ok(deleted)
    }
}
