//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
mod text_field;
pub mod token_config;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

use crate::domain::Error;
use crate::domain::messages::ROUTE_NOT_FOUND;
use crate::middleware::BearerAuth;

/// Fallback for unknown paths and unsupported methods.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use agenda_backend::inbound::http::route_not_found;
///
/// let _app = App::new().default_service(web::to(route_not_found));
/// ```
pub async fn route_not_found() -> ApiResult<web::Json<()>> {
    Err(Error::not_found(ROUTE_NOT_FOUND))
}

/// Register every REST route plus the JSON extractor configuration.
///
/// Contact resources are wrapped in [`BearerAuth`]; user resources are open.
/// Handlers expect `web::Data<HttpState>` to be registered by the caller.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use agenda_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(
            web::resource("/usuarios/registro")
                .route(web::post().to(users::register))
                .default_service(web::to(route_not_found)),
        )
        .service(
            web::resource("/usuarios/login")
                .route(web::post().to(users::login))
                .default_service(web::to(route_not_found)),
        )
        .service(
            web::resource("/usuarios")
                .route(web::get().to(users::list_users))
                .default_service(web::to(route_not_found)),
        )
        .service(
            web::resource("/contatos")
                .route(web::post().to(contacts::create_contact))
                .route(web::get().to(contacts::list_contacts))
                .default_service(web::to(route_not_found))
                .wrap(BearerAuth),
        )
        .service(
            web::resource("/contatos/{id}")
                .route(web::put().to(contacts::update_contact))
                .route(web::delete().to(contacts::delete_contact))
                .default_service(web::to(route_not_found))
                .wrap(BearerAuth),
        );
}
