table! {
    categories (id) {
        id -> Int4,
        #[sql_name = "type"]
        type_ -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

table! {
    questions (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Int4,
        difficulty -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

allow_tables_to_appear_in_same_query!(categories, questions,);
