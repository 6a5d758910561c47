use actix_web::{web, HttpResponse};

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(handlers::json_config())
            .service(web::resource("/health").route(web::get().to(handlers::pages::health)))
            .service(
                web::resource("/donations")
                    .route(web::post().to(handlers::donations::create))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/volunteers")
                    .route(web::post().to(handlers::volunteers::create))
                    .route(web::head().to(HttpResponse::MethodNotAllowed)),
            )
            .service(
                web::resource("/achievements")
                    .route(web::get().to(handlers::achievements::timeline))
                    .route(web::post().to(handlers::achievements::create)),
            )
            .service(web::resource("/pages").route(web::get().to(handlers::pages::index)))
            .service(web::resource("/pages/{slug}").route(web::get().to(handlers::pages::show)))
            .service(web::resource("/contact").route(web::get().to(handlers::pages::contact)))
            .service(web::resource("/impact").route(web::get().to(handlers::pages::impact))),
    );
}
