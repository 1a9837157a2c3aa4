#[cfg(test)]
pub mod tests {
    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::BoxBody, dev::ServiceResponse, error::Error, test, web, App, HttpResponse,
    };
    use serde::{de::DeserializeOwned, Serialize};

    use errors::ErrorResponse;

    use crate::routes::{json_config, query_config, routes};

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(web::Data::new(db::new_pool()))
                .app_data(json_config())
                .app_data(query_config())
                .configure(routes)
                .default_service(web::route().to(|| async {
                    HttpResponse::NotFound().json(ErrorResponse::new(404, "Resource Not Found"))
                })),
        )
        .await
    }

    async fn read_json<R>(res: ServiceResponse<BoxBody>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "response did not deserialize. body: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let res = test::call_service(&app, test::TestRequest::get().uri(route).to_request()).await;

        read_json(res).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::post().set_json(&params).uri(route);
        let res = test::call_service(&app, req.to_request()).await;

        read_json(res).await
    }

    /// POST without a body, for the bad-request paths
    pub async fn test_post_no_body<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let res = test::call_service(&app, test::TestRequest::post().uri(route).to_request()).await;

        read_json(res).await
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let res =
            test::call_service(&app, test::TestRequest::delete().uri(route).to_request()).await;

        read_json(res).await
    }
}
