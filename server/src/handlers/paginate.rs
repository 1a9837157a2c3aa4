use serde::Deserialize;

use db::models::QuestionDetails;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page number taken from the query string.
#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Slices an ordered result set into a fixed-size page. Pages outside the
/// result set come back empty.
pub fn paginate_questions(questions: &[QuestionDetails], page: i64) -> Vec<QuestionDetails> {
    if page < 1 {
        return Vec::new();
    }

    let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
    if start >= questions.len() {
        return Vec::new();
    }

    let end = (start + QUESTIONS_PER_PAGE).min(questions.len());
    questions[start..end].to_vec()
}
