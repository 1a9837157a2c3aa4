use actix_web::{web, HttpResponse, Result};

use errors::Error;

pub mod categories;
mod index;
pub mod questions;
pub mod quiz;

pub use self::index::*;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("", web::get().to(index))
            .service(
                web::scope("/categories")
                    .route("/{id}/questions", web::get().to(categories::get_questions))
                    .route("/{id}/questions", web::route().to(method_not_allowed))
                    .route("", web::get().to(categories::get_all))
                    .route("", web::route().to(method_not_allowed)),
            )
            .service(
                web::scope("/questions")
                    .route("", web::get().to(questions::get_all))
                    .route("", web::post().to(questions::create_or_search))
                    .route("", web::route().to(method_not_allowed))
                    .route("/{id}", web::delete().to(questions::delete))
                    .route("/{id}", web::route().to(method_not_allowed)),
            )
            .service(
                web::scope("/quiz")
                    .route("", web::post().to(quiz::next_question))
                    .route("", web::route().to(method_not_allowed)),
            ),
    );
}

/// Fallback for routes that exist with a different verb.
pub async fn method_not_allowed() -> Result<HttpResponse, Error> {
    Err(Error::MethodNotAllowed)
}

/// Malformed or missing JSON bodies come back as a 400 envelope instead of
/// the default actix error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("rejected json payload - {}", err);
        Error::BadRequest(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!("rejected query string - {}", err);
        Error::BadRequest(err.to_string()).into()
    })
}
