use chrono::{DateTime, Utc};
use diesel::{PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::categories;

#[derive(Debug, Deserialize, Identifiable, Queryable, Serialize)]
#[table_name = "categories"]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "categories"]
pub struct NewCategory {
    pub type_: String,
}

impl Category {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::{categories as categories_table, id};

        let results = categories_table.order(id).load::<Category>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, category_id: i32) -> Result<Category, Error> {
        use crate::schema::categories::dsl::categories as categories_table;

        let category = categories_table
            .find(category_id)
            .first::<Category>(conn)?;

        Ok(category)
    }
}
