use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::service::AppService;

#[tracing::instrument(name = "Greeting the caller", skip(service))]
pub async fn get_hello(service: web::Data<AppService>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(service.get_hello())
}
