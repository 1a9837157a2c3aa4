#[macro_use]
extern crate log;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;

mod handlers;
mod routes;
mod tests;

use crate::routes::{json_config, query_config, routes};
use errors::ErrorResponse;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::new_pool();

    info!("Listening on 0.0.0.0:8080");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config())
            .app_data(query_config())
            .configure(routes)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(ErrorResponse::new(404, "Resource Not Found"))
            }))
    })
    .bind("0.0.0.0:8080")?
    .run()
    .await
}
