//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(posts::json_config())
        .app_data(posts::query_config())
        .route("/", web::get().to(home::index))
        .service(
            web::scope("/api/v1")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Post routes
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::patch().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                ),
        );
}
