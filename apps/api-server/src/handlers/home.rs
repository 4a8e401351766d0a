//! Landing page.

use actix_web::HttpResponse;

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<html lang='en'><title>Blog API</title><body><h1>Blog API</h1></body></html>")
}
