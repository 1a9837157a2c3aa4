use std::collections::BTreeMap;

use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Category, PgPool};
use errors::Error;

#[derive(Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

pub async fn get_all(pool: Data<PgPool>) -> Result<Json<CategoriesResponse>, Error> {
    let conn = get_conn(&pool)?;

    let res = block(move || Category::get_all(&conn)).await?;
    let categories = res?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.type_)).collect(),
    }))
}
