use diesel::{self, RunQueryDsl};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{NewCategory, NewQuestion},
    new_pool,
    schema::{categories, questions},
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();

    for type_ in &[
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ] {
        diesel::insert_into(categories::table)
            .values(NewCategory {
                type_: type_.to_string(),
            })
            .execute(&conn)
            .unwrap();
    }

    let starters = vec![
        NewQuestion {
            question: "What is the heaviest organ in the human body?".to_string(),
            answer: "The Liver".to_string(),
            category: 1,
            difficulty: 4,
        },
        NewQuestion {
            question: "La Giaconda is better known as what?".to_string(),
            answer: "Mona Lisa".to_string(),
            category: 2,
            difficulty: 3,
        },
        NewQuestion {
            question: "What is the largest lake in Africa?".to_string(),
            answer: "Lake Victoria".to_string(),
            category: 3,
            difficulty: 2,
        },
        NewQuestion {
            question: "Whose autobiography is entitled I Know Why the Caged Bird Sings?"
                .to_string(),
            answer: "Maya Angelou".to_string(),
            category: 4,
            difficulty: 2,
        },
        NewQuestion {
            question: "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?"
                .to_string(),
            answer: "Apollo 13".to_string(),
            category: 5,
            difficulty: 4,
        },
        NewQuestion {
            question: "Which is the only team to play in every soccer World Cup tournament?"
                .to_string(),
            answer: "Brazil".to_string(),
            category: 6,
            difficulty: 3,
        },
    ];

    for new_question in starters {
        diesel::insert_into(questions::table)
            .values(new_question)
            .execute(&conn)
            .unwrap();
    }
}
