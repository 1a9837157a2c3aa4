use actix_web::web::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct IndexResponse {
    pub success: bool,
    pub message: String,
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        success: true,
        message: "Welcome to the trivia API".to_string(),
    })
}
